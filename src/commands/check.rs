//! Self-check command
//!
//! Plays random games against the generator: draw a secret and some guesses
//! from the alphabet, score them with Wordle feedback, generate candidates and
//! see whether the secret survived.

use super::generate::DEFAULT_MAX_CANDIDATES;
use crate::core::{Grid, score_row};
use crate::error::GridError;
use crate::solver::Generator;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Settings for a self-check run
#[derive(Debug, Clone, Copy)]
pub struct CheckConfig {
    /// Number of random games
    pub trials: usize,
    /// Guesses entered per game
    pub guesses: usize,
    /// Trial `i` is seeded with `seed + i`
    pub seed: u64,
    /// Games whose search space is larger than this are skipped
    pub max_candidates: u64,
    pub show_progress: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            guesses: 2,
            seed: 42,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            show_progress: true,
        }
    }
}

/// One random game
#[derive(Debug, Clone)]
pub struct Trial {
    pub secret: String,
    pub guesses: Vec<String>,
    /// `None` when the search space was over the limit
    pub candidates: Option<usize>,
    pub secret_found: bool,
}

/// Aggregate result of a self-check run
#[derive(Debug)]
pub struct CheckResult {
    pub trials: usize,
    pub evaluated: usize,
    pub skipped: usize,
    pub secret_found: usize,
    pub min_candidates: usize,
    pub max_candidates: usize,
    pub average_candidates: f64,
    /// Games whose secret was missing from the candidates, at most ten
    pub misses: Vec<Trial>,
    pub duration: Duration,
}

impl CheckResult {
    /// Share of evaluated games that kept the secret, in percent
    #[must_use]
    pub fn found_rate(&self) -> f64 {
        if self.evaluated == 0 {
            return 0.0;
        }
        self.secret_found as f64 / self.evaluated as f64 * 100.0
    }
}

/// Run `config.trials` random games in parallel
///
/// # Errors
///
/// Returns an error if a game needs more guesses than the grid has rows, a
/// scored guess does not fit the grid, or the progress bar template is invalid.
pub fn run_check(generator: &Generator, config: &CheckConfig) -> Result<CheckResult> {
    let rows = generator.config().rows;
    if config.guesses == 0 || config.guesses > rows {
        bail!(
            "guesses per game must be between 1 and {rows}, got {}",
            config.guesses
        );
    }

    info!(
        "checking {} games of {} guesses over '{}' ({} duplicates)",
        config.trials,
        config.guesses,
        generator.alphabet(),
        generator.duplicates()
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.trials as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let trials = (0..config.trials)
        .into_par_iter()
        .map(|index| {
            let trial = run_trial(generator, config, config.seed.wrapping_add(index as u64));
            pb.inc(1);
            trial
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&trials, start.elapsed()))
}

/// Play a single seeded game
///
/// # Errors
/// Returns `GridError` if `config.guesses` exceeds the grid's rows.
pub fn run_trial(
    generator: &Generator,
    config: &CheckConfig,
    seed: u64,
) -> Result<Trial, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns = generator.config().columns;
    let symbols = generator.alphabet().symbols();
    let mut random_string = || -> String {
        (0..columns)
            .map(|_| symbols[rng.random_range(0..symbols.len())])
            .collect()
    };

    let secret = random_string();
    let guesses: Vec<String> = (0..config.guesses).map(|_| random_string()).collect();

    let mut grid = generator.new_grid();
    for (row, guess) in guesses.iter().enumerate() {
        grid.set_row(row, score_row(guess, &secret))?;
    }

    Ok(evaluate(generator, &grid, config.max_candidates, secret, guesses))
}

fn evaluate(
    generator: &Generator,
    grid: &Grid,
    max_candidates: u64,
    secret: String,
    guesses: Vec<String>,
) -> Trial {
    if generator.search_space(grid) > u128::from(max_candidates) {
        return Trial {
            secret,
            guesses,
            candidates: None,
            secret_found: false,
        };
    }

    let candidates = generator.generate(grid);
    let secret_found = candidates.contains(&secret);
    Trial {
        secret,
        guesses,
        candidates: Some(candidates.len()),
        secret_found,
    }
}

fn summarize(trials: &[Trial], duration: Duration) -> CheckResult {
    let counts: Vec<usize> = trials.iter().filter_map(|t| t.candidates).collect();
    let evaluated = counts.len();
    let secret_found = trials.iter().filter(|t| t.secret_found).count();
    let average_candidates = if evaluated > 0 {
        counts.iter().sum::<usize>() as f64 / evaluated as f64
    } else {
        0.0
    };

    let misses = trials
        .iter()
        .filter(|t| t.candidates.is_some() && !t.secret_found)
        .take(10)
        .cloned()
        .collect();

    CheckResult {
        trials: trials.len(),
        evaluated,
        skipped: trials.len() - evaluated,
        secret_found,
        min_candidates: counts.iter().copied().min().unwrap_or(0),
        max_candidates: counts.iter().copied().max().unwrap_or(0),
        average_candidates,
        misses,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DuplicateHandling, GeneratorConfig};
    use crate::core::{Alphabet, AlphabetMode};

    fn quiet(trials: usize, guesses: usize) -> CheckConfig {
        CheckConfig {
            trials,
            guesses,
            show_progress: false,
            ..CheckConfig::default()
        }
    }

    fn small_generator(duplicates: DuplicateHandling) -> Generator {
        let alphabet = Alphabet::custom("ABCD").unwrap();
        let config = GeneratorConfig::new(3, 4, AlphabetMode::LettersOnly).with_duplicates(duplicates);
        Generator::with_alphabet(alphabet, config).unwrap()
    }

    #[test]
    fn per_occurrence_always_keeps_the_secret() {
        let generator = small_generator(DuplicateHandling::PerOccurrence);
        let result = run_check(&generator, &quiet(100, 2)).unwrap();

        assert_eq!(result.trials, 100);
        assert_eq!(result.evaluated, 100);
        assert_eq!(result.secret_found, 100);
        assert!(result.misses.is_empty());
        assert!((result.found_rate() - 100.0).abs() < f64::EPSILON);
        assert!(result.min_candidates >= 1);
    }

    #[test]
    fn statistics_are_consistent() {
        let generator = small_generator(DuplicateHandling::Global);
        let result = run_check(&generator, &quiet(50, 3)).unwrap();

        assert_eq!(result.evaluated + result.skipped, result.trials);
        assert!(result.secret_found <= result.evaluated);
        assert!(result.misses.len() <= result.evaluated - result.secret_found);
        assert!(result.average_candidates >= result.min_candidates as f64);
        assert!(result.average_candidates <= result.max_candidates as f64);
    }

    #[test]
    fn trials_are_reproducible() {
        let generator = small_generator(DuplicateHandling::Global);
        let config = quiet(1, 2);

        let first = run_trial(&generator, &config, 7).unwrap();
        let second = run_trial(&generator, &config, 7).unwrap();
        assert_eq!(first.secret, second.secret);
        assert_eq!(first.guesses, second.guesses);
        assert_eq!(first.candidates, second.candidates);
        assert_eq!(first.guesses.len(), 2);
        assert!(first.secret.chars().all(|c| "ABCD".contains(c)));
    }

    #[test]
    fn oversized_games_are_skipped() {
        let generator = small_generator(DuplicateHandling::Global);
        let config = CheckConfig {
            max_candidates: 0,
            ..quiet(5, 1)
        };
        let result = run_check(&generator, &config).unwrap();

        assert_eq!(result.skipped, 5);
        assert_eq!(result.evaluated, 0);
        assert!(result.found_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn trial_with_too_many_guesses_fails() {
        let generator = small_generator(DuplicateHandling::Global);
        let result = run_trial(&generator, &quiet(1, 4), 3);

        assert!(matches!(result, Err(GridError::OutOfRange { row: 3, .. })));
    }

    #[test]
    fn guesses_must_fit_the_grid() {
        let generator = small_generator(DuplicateHandling::Global);
        assert!(run_check(&generator, &quiet(1, 4)).is_err());
        assert!(run_check(&generator, &quiet(1, 0)).is_err());
    }
}

//! Main candidate generator interface

use super::{CandidateBuilder, Constraints, RequiredCharacters};
use crate::config::{DuplicateHandling, GeneratorConfig};
use crate::core::{Alphabet, Grid, InputGrid};
use crate::error::ConfigError;
use log::debug;

/// Candidate generator
///
/// Holds the alphabet, built once from the configuration. Each call to
/// [`Generator::generate`] works on a fresh snapshot of the grid.
#[derive(Debug, Clone)]
pub struct Generator {
    alphabet: Alphabet,
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for the configured alphabet mode
    ///
    /// # Errors
    /// Returns `ConfigError` if the grid dimensions are zero.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            alphabet: Alphabet::from_mode(config.alphabet_mode),
            config,
        })
    }

    /// Create a generator over an explicit alphabet
    ///
    /// `config.alphabet_mode` is ignored.
    ///
    /// # Errors
    /// Returns `ConfigError` if the grid dimensions are zero.
    pub fn with_alphabet(
        alphabet: Alphabet,
        config: GeneratorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { alphabet, config })
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub const fn duplicates(&self) -> DuplicateHandling {
        self.config.duplicates
    }

    /// An empty grid with the configured dimensions
    #[must_use]
    pub fn new_grid(&self) -> Grid {
        Grid::new(self.config.rows, self.config.columns)
    }

    /// Constraints implied by `grid`
    pub fn analyze<'g, G: InputGrid>(&self, grid: &'g G) -> Constraints<'g, G> {
        Constraints::analyze(grid, &self.alphabet, self.config.duplicates)
    }

    /// Admissible sets for `grid`, ready to enumerate
    pub fn builder<G: InputGrid>(&self, grid: &G) -> CandidateBuilder {
        let constraints = self.analyze(grid);
        CandidateBuilder::from_fn(|column| constraints.admissible(column))
    }

    /// Number of strings enumerated before the required-character filter
    ///
    /// Saturates at `u128::MAX`. Cheap compared to [`Self::generate`]; use it to
    /// refuse oversized searches.
    pub fn search_space<G: InputGrid>(&self, grid: &G) -> u128 {
        self.builder(grid).count()
    }

    /// Every string consistent with the feedback in `grid`
    ///
    /// Steps: prefilter the alphabet, enumerate one admissible symbol per
    /// column, then drop candidates missing a required symbol. The result is
    /// deterministic for a given grid.
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::config::GeneratorConfig;
    /// use wordle_candidates::core::{Alphabet, Grid};
    /// use wordle_candidates::solver::Generator;
    ///
    /// let alphabet = Alphabet::custom("AB").unwrap();
    /// let generator = Generator::with_alphabet(alphabet, GeneratorConfig::default()).unwrap();
    /// let grid = Grid::new(1, 2);
    ///
    /// assert_eq!(generator.generate(&grid), ["AA", "AB", "BA", "BB"]);
    /// ```
    pub fn generate<G: InputGrid>(&self, grid: &G) -> Vec<String> {
        let builder = self.builder(grid);
        debug!(
            "enumerating {} candidates of length {}",
            builder.count(),
            builder.candidate_len()
        );
        let candidates: Vec<String> = builder.iter().collect();

        let required = RequiredCharacters::from_grid(grid, self.config.duplicates);
        let candidates = required.apply(candidates);
        debug!("{} candidates after required-character filter", candidates.len());
        candidates
    }
}

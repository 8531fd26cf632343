//! Candidate generation command
//!
//! Fills a grid from `GUESS/FEEDBACK` rows and lists every consistent string.

use crate::core::Grid;
use crate::solver::Generator;
use anyhow::{Context, Result, bail};
use log::{info, warn};

/// Search spaces above this are refused unless overridden
pub const DEFAULT_MAX_CANDIDATES: u64 = 5_000_000;

/// Result of generating candidates for a grid
pub struct GenerateResult {
    pub grid: Grid,
    pub prefiltered: String,
    pub search_space: u128,
    pub candidates: Vec<String>,
}

/// Fill a fresh grid with `rows`, top to bottom
///
/// # Errors
///
/// Returns an error if there are more rows than the grid holds, or a row is
/// malformed, has the wrong length, or uses a symbol outside the alphabet.
pub fn build_grid<S: AsRef<str>>(generator: &Generator, rows: &[S]) -> Result<Grid> {
    let mut grid = generator.new_grid();
    if rows.len() > generator.config().rows {
        bail!(
            "{} rows given but the grid only holds {}",
            rows.len(),
            generator.config().rows
        );
    }

    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        grid.enter(index, row, generator.alphabet())
            .with_context(|| format!("row {} ('{row}')", index + 1))?;
    }

    Ok(grid)
}

/// Generate every candidate consistent with `rows`
///
/// # Errors
///
/// Returns an error if the rows cannot be entered into the grid, or if the
/// search space exceeds `max_candidates`.
pub fn generate_candidates<S: AsRef<str>>(
    generator: &Generator,
    rows: &[S],
    max_candidates: u64,
) -> Result<GenerateResult> {
    let grid = build_grid(generator, rows)?;

    let search_space = generator.search_space(&grid);
    if search_space > u128::from(max_candidates) {
        warn!("refusing to enumerate {search_space} strings (limit {max_candidates})");
        bail!(
            "{search_space} strings to enumerate exceeds the limit of {max_candidates}; \
             add more feedback or raise --max-candidates"
        );
    }

    let prefiltered = generator.analyze(&grid).prefiltered().iter().collect();
    let candidates = generator.generate(&grid);
    info!(
        "{} of {search_space} enumerated strings satisfy the feedback",
        candidates.len()
    );

    Ok(GenerateResult {
        grid,
        prefiltered,
        search_space,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::core::{AlphabetMode, InputGrid};

    fn letters_generator() -> Generator {
        Generator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn generate_from_rows() {
        let generator = letters_generator();
        let rows = ["CRANE/-GG--", "BLAST/--G-G", "DRAFT/-GGGG"];

        let result = generate_candidates(&generator, &rows, DEFAULT_MAX_CANDIDATES).unwrap();

        assert!(result.candidates.contains(&"GRAFT".to_string()));
        assert!(result.candidates.iter().all(|c| c.ends_with("RAFT")));
        assert!(!result.prefiltered.contains('C'));
        assert_eq!(result.grid.row_count(), 5);
    }

    #[test]
    fn lowercase_rows_are_accepted() {
        let generator = letters_generator();
        let result =
            generate_candidates(&generator, &["graft/ggggg"], DEFAULT_MAX_CANDIDATES).unwrap();

        assert_eq!(result.candidates, ["GRAFT"]);
        assert_eq!(result.search_space, 1);
    }

    #[test]
    fn too_many_rows() {
        let config = GeneratorConfig::new(1, 2, AlphabetMode::LettersOnly);
        let generator = Generator::new(config).unwrap();

        assert!(build_grid(&generator, &["AB/--", "CD/--"]).is_err());
    }

    #[test]
    fn symbol_outside_alphabet() {
        let config = GeneratorConfig::new(5, 3, AlphabetMode::DigitsOnly);
        let generator = Generator::new(config).unwrap();

        let err = build_grid(&generator, &["1A3/---"]).unwrap_err();
        assert!(format!("{err:#}").contains("'A'"));
    }

    #[test]
    fn operator_rows_with_slash() {
        let config = GeneratorConfig::new(5, 5, AlphabetMode::DigitsAndOperators);
        let generator = Generator::new(config).unwrap();

        let result = generate_candidates(&generator, &["8/4=2/GGGGG"], DEFAULT_MAX_CANDIDATES)
            .unwrap();
        assert_eq!(result.candidates, ["8/4=2"]);
    }

    #[test]
    fn wrong_row_length() {
        let generator = letters_generator();
        assert!(build_grid(&generator, &["ABC/---"]).is_err());
    }

    #[test]
    fn oversized_search_refused() {
        let generator = letters_generator();
        let rows: [&str; 0] = [];

        assert!(generate_candidates(&generator, &rows, 1000).is_err());
        // 26^5 is above the default limit too
        assert!(generate_candidates(&generator, &rows, DEFAULT_MAX_CANDIDATES).is_err());
    }
}

//! Constraint analysis
//!
//! Turns the feedback in a grid into two things:
//! - the prefiltered alphabet (every symbol not ruled out globally)
//! - the admissible symbols for each column

use crate::config::DuplicateHandling;
use crate::core::{Alphabet, CharacterStatus, InputGrid};
use log::debug;
use rustc_hash::FxHashSet;

/// Constraints derived from one snapshot of a grid
///
/// Borrowing the grid for the lifetime of the analysis keeps it from being
/// edited while candidates are generated.
#[derive(Debug)]
pub struct Constraints<'g, G: InputGrid> {
    grid: &'g G,
    prefiltered: Vec<char>,
    duplicates: DuplicateHandling,
}

impl<'g, G: InputGrid> Constraints<'g, G> {
    /// Analyse `grid` against `alphabet`
    ///
    /// The base alphabet is never modified; the prefiltered copy lives as long as
    /// this value.
    pub fn analyze(grid: &'g G, alphabet: &Alphabet, duplicates: DuplicateHandling) -> Self {
        let prefiltered = prefilter(grid, alphabet, duplicates);
        debug!(
            "prefiltered alphabet: {} of {} symbols remain",
            prefiltered.len(),
            alphabet.len()
        );

        Self {
            grid,
            prefiltered,
            duplicates,
        }
    }

    /// The alphabet minus every symbol proven absent
    #[must_use]
    pub fn prefiltered(&self) -> &[char] {
        &self.prefiltered
    }

    /// Symbols still possible at `column`, in alphabet order
    ///
    /// Rows are scanned top to bottom. A row without a cell at `column` ends the
    /// scan with an empty set, the first `Correct` cell ends it with that symbol
    /// alone, and misplaced symbols are removed from the column. An empty grid
    /// has no columns.
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::config::DuplicateHandling;
    /// use wordle_candidates::core::{Alphabet, Grid};
    /// use wordle_candidates::solver::Constraints;
    ///
    /// let alphabet = Alphabet::custom("CAT").unwrap();
    /// let grid = Grid::parse(&["CAT/GY-"]).unwrap();
    /// let constraints = Constraints::analyze(&grid, &alphabet, DuplicateHandling::Global);
    ///
    /// assert_eq!(constraints.prefiltered(), &['C', 'A']);
    /// assert_eq!(constraints.admissible(0), vec!['C']);
    /// assert_eq!(constraints.admissible(1), vec!['C']);
    /// assert!(constraints.admissible(3).is_empty());
    /// ```
    #[must_use]
    pub fn admissible(&self, column: usize) -> Vec<char> {
        if self.grid.row_count() == 0 {
            return Vec::new();
        }

        let mut excluded: FxHashSet<char> = FxHashSet::default();
        for row in 0..self.grid.row_count() {
            let Some(cell) = self.grid.cell(row, column) else {
                return Vec::new();
            };
            let Some((symbol, status)) = cell.feedback() else {
                continue;
            };

            match status {
                CharacterStatus::Correct => return vec![symbol],
                CharacterStatus::PresentWrongPosition => {
                    excluded.insert(symbol);
                }
                CharacterStatus::Absent => {
                    if self.duplicates == DuplicateHandling::PerOccurrence {
                        excluded.insert(symbol);
                    }
                }
                CharacterStatus::Unset => {}
            }
        }

        self.prefiltered
            .iter()
            .copied()
            .filter(|symbol| !excluded.contains(symbol))
            .collect()
    }

    /// Admissible sets for every column up to, not including, the first empty one
    #[must_use]
    pub fn column_sets(&self) -> Vec<Vec<char>> {
        (0..)
            .map(|column| self.admissible(column))
            .take_while(|set| !set.is_empty())
            .collect()
    }
}

/// Remove every symbol marked absent anywhere in the grid
fn prefilter<G: InputGrid>(
    grid: &G,
    alphabet: &Alphabet,
    duplicates: DuplicateHandling,
) -> Vec<char> {
    let confirmed: FxHashSet<char> = match duplicates {
        DuplicateHandling::Global => FxHashSet::default(),
        DuplicateHandling::PerOccurrence => grid
            .cells()
            .filter_map(|cell| cell.feedback())
            .filter(|(_, status)| status.is_present())
            .map(|(symbol, _)| symbol)
            .collect(),
    };

    let absent: FxHashSet<char> = grid
        .cells()
        .filter_map(|cell| cell.feedback())
        .filter(|&(symbol, status)| {
            status == CharacterStatus::Absent && !confirmed.contains(&symbol)
        })
        .map(|(symbol, _)| symbol)
        .collect();

    alphabet
        .symbols()
        .iter()
        .copied()
        .filter(|symbol| !absent.contains(symbol))
        .collect()
}

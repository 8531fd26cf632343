//! Required-character filter
//!
//! Symbols marked present-but-misplaced have to show up somewhere in every
//! candidate. The enumeration only keeps them out of their own column, so this
//! pass drops the candidates that never use them.

use crate::config::DuplicateHandling;
use crate::core::{CharacterStatus, InputGrid};
use log::debug;
use rustc_hash::FxHashMap;

/// Symbols every candidate must contain, with a minimum number of occurrences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequiredCharacters {
    entries: Vec<(char, usize)>,
}

impl RequiredCharacters {
    /// Collect the required symbols from `grid` in row-major order
    ///
    /// With [`DuplicateHandling::Global`] every misplaced cell adds one entry
    /// requiring a single occurrence, repeats included. With
    /// [`DuplicateHandling::PerOccurrence`] each symbol with a misplaced cell is
    /// listed once, requiring as many occurrences as the most confirmations it
    /// got within a single row.
    pub fn from_grid<G: InputGrid>(grid: &G, duplicates: DuplicateHandling) -> Self {
        let entries = match duplicates {
            DuplicateHandling::Global => grid
                .cells()
                .filter_map(|cell| cell.feedback())
                .filter(|&(_, status)| status == CharacterStatus::PresentWrongPosition)
                .map(|(symbol, _)| (symbol, 1))
                .collect(),
            DuplicateHandling::PerOccurrence => per_occurrence_entries(grid),
        };

        Self { entries }
    }

    /// `(symbol, minimum occurrences)` in discovery order
    #[must_use]
    pub fn entries(&self) -> &[(char, usize)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `candidate` contains every required symbol often enough
    #[must_use]
    pub fn is_satisfied_by(&self, candidate: &str) -> bool {
        self.entries
            .iter()
            .all(|&(symbol, min)| occurrences(candidate, symbol) >= min)
    }

    /// Keep only the candidates that satisfy every entry, one entry at a time
    #[must_use]
    pub fn apply(&self, mut candidates: Vec<String>) -> Vec<String> {
        for &(symbol, min) in &self.entries {
            let before = candidates.len();
            candidates.retain(|candidate| occurrences(candidate, symbol) >= min);
            debug!(
                "requiring {min}x '{symbol}': {before} -> {} candidates",
                candidates.len()
            );
        }
        candidates
    }
}

fn occurrences(candidate: &str, symbol: char) -> usize {
    candidate.chars().filter(|&c| c == symbol).count()
}

fn per_occurrence_entries<G: InputGrid>(grid: &G) -> Vec<(char, usize)> {
    let mut order: Vec<char> = Vec::new();
    let mut required: FxHashMap<char, usize> = FxHashMap::default();

    for row in 0..grid.row_count() {
        let mut confirmed: FxHashMap<char, usize> = FxHashMap::default();
        for column in 0..grid.row_len(row) {
            let Some((symbol, status)) = grid.cell(row, column).and_then(|cell| cell.feedback())
            else {
                continue;
            };
            if status.is_present() {
                *confirmed.entry(symbol).or_insert(0) += 1;
            }
            if status == CharacterStatus::PresentWrongPosition && !required.contains_key(&symbol) {
                order.push(symbol);
                required.insert(symbol, 0);
            }
        }

        for (symbol, count) in confirmed {
            if let Some(min) = required.get_mut(&symbol) {
                *min = (*min).max(count);
            }
        }
    }

    order
        .into_iter()
        .map(|symbol| (symbol, required[&symbol]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_misplaced_cells_keeps_everything() {
        let grid = Grid::parse(&["ABC/G--"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::Global);

        assert!(required.is_empty());
        assert_eq!(required.apply(strings(&["XYZ", "AAA"])), strings(&["XYZ", "AAA"]));
    }

    #[test]
    fn global_lists_every_misplaced_cell() {
        let grid = Grid::parse(&["ABA/Y-Y", "CA/Y?"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::Global);

        assert_eq!(required.entries(), &[('A', 1), ('A', 1), ('C', 1)]);
    }

    #[test]
    fn global_membership_ignores_repeats() {
        let grid = Grid::parse(&["AXA/Y-Y"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::Global);

        assert_eq!(
            required.apply(strings(&["BAB", "BBB", "AAB"])),
            strings(&["BAB", "AAB"])
        );
    }

    #[test]
    fn filter_keeps_order() {
        let grid = Grid::parse(&["AB/YY"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::Global);

        assert_eq!(
            required.apply(strings(&["BA", "AA", "CB", "BA"])),
            strings(&["BA", "BA"])
        );
        assert!(required.is_satisfied_by("BA"));
        assert!(!required.is_satisfied_by("AC"));
    }

    #[test]
    fn per_occurrence_counts_within_a_row() {
        // Two confirmed A's in one guess: the target has at least two
        let grid = Grid::parse(&["AXA/Y-G", "ABC/Y--"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::PerOccurrence);

        assert_eq!(required.entries(), &[('A', 2)]);
        assert_eq!(
            required.apply(strings(&["BAB", "BAA", "AAA"])),
            strings(&["BAA", "AAA"])
        );
    }

    #[test]
    fn per_occurrence_ignores_correct_only_symbols() {
        let grid = Grid::parse(&["AB/GY"]).unwrap();
        let required = RequiredCharacters::from_grid(&grid, DuplicateHandling::PerOccurrence);

        assert_eq!(required.entries(), &[('B', 1)]);
    }
}

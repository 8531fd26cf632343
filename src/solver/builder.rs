//! Candidate enumeration
//!
//! Builds every string that takes one admissible symbol per column. The walk is
//! a depth-first backtrack over a single buffer, driven by an explicit stack of
//! per-column positions instead of recursion.

/// Admissible symbols for each column of a candidate
///
/// Columns are collected from a per-column query until the first column with no
/// admissible symbols; that column fixes the candidate length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBuilder {
    columns: Vec<Vec<char>>,
}

impl CandidateBuilder {
    /// Query `admissible` for columns 0, 1, 2, ... until it returns an empty set
    ///
    /// `admissible` must eventually return an empty set.
    pub fn from_fn<F>(mut admissible: F) -> Self
    where
        F: FnMut(usize) -> Vec<char>,
    {
        let mut columns = Vec::new();
        loop {
            let set = admissible(columns.len());
            if set.is_empty() {
                break;
            }
            columns.push(set);
        }
        Self { columns }
    }

    /// Use precomputed column sets, truncated at the first empty one
    #[must_use]
    pub fn from_columns(mut columns: Vec<Vec<char>>) -> Self {
        if let Some(end) = columns.iter().position(Vec::is_empty) {
            columns.truncate(end);
        }
        Self { columns }
    }

    /// Length of every candidate this builder yields
    #[must_use]
    pub fn candidate_len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<char>] {
        &self.columns
    }

    /// Number of candidates [`Self::iter`] yields, saturating at `u128::MAX`
    #[must_use]
    pub fn count(&self) -> u128 {
        self.columns
            .iter()
            .fold(1u128, |acc, set| acc.saturating_mul(set.len() as u128))
    }

    /// Enumerate candidates: column 0 varies slowest, alphabet order within a column
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::solver::CandidateBuilder;
    ///
    /// let builder = CandidateBuilder::from_columns(vec![vec!['A', 'B'], vec!['A', 'B']]);
    /// let all: Vec<String> = builder.iter().collect();
    /// assert_eq!(all, ["AA", "AB", "BA", "BB"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Candidates<'_> {
        Candidates {
            columns: &self.columns,
            positions: Vec::with_capacity(self.columns.len()),
            buffer: String::new(),
            started: false,
            done: false,
        }
    }
}

impl<'a> IntoIterator for &'a CandidateBuilder {
    type Item = String;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the candidates of a [`CandidateBuilder`]
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    columns: &'a [Vec<char>],
    /// Index into each column's set for the symbols currently in `buffer`
    positions: Vec<usize>,
    buffer: String,
    started: bool,
    done: bool,
}

impl Candidates<'_> {
    /// Push the first symbol of every column from `positions.len()` onwards
    fn descend(&mut self) {
        let columns = self.columns;
        for set in &columns[self.positions.len()..] {
            self.positions.push(0);
            self.buffer.push(set[0]);
        }
    }

    /// Backtrack to the deepest column with an untried symbol and advance it
    fn advance(&mut self) -> bool {
        let columns = self.columns;
        while let Some(index) = self.positions.pop() {
            self.buffer.pop();
            let set = &columns[self.positions.len()];
            if let Some(&next) = set.get(index + 1) {
                self.positions.push(index + 1);
                self.buffer.push(next);
                self.descend();
                return true;
            }
        }
        false
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
            self.descend();
            if self.columns.is_empty() {
                // The only candidate of zero columns is the empty string
                self.done = true;
            }
        }

        Some(self.buffer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_product_in_order() {
        let builder =
            CandidateBuilder::from_columns(vec![vec!['A', 'B'], vec!['C'], vec!['D', 'E', 'F']]);
        let all: Vec<String> = builder.iter().collect();

        assert_eq!(all, ["ACD", "ACE", "ACF", "BCD", "BCE", "BCF"]);
        assert_eq!(builder.count(), 6);
    }

    #[test]
    fn no_columns_yields_single_empty_candidate() {
        let builder = CandidateBuilder::from_columns(vec![]);
        let all: Vec<String> = builder.iter().collect();

        assert_eq!(all, [""]);
        assert_eq!(builder.count(), 1);
        assert_eq!(builder.candidate_len(), 0);
    }

    #[test]
    fn first_empty_column_fixes_length() {
        let builder = CandidateBuilder::from_columns(vec![vec!['A'], vec![], vec!['B']]);
        let all: Vec<String> = builder.iter().collect();

        assert_eq!(all, ["A"]);
    }

    #[test]
    fn from_fn_stops_at_first_empty_set() {
        let mut queried = Vec::new();
        let builder = CandidateBuilder::from_fn(|column| {
            queried.push(column);
            if column < 3 { vec!['X', 'Y'] } else { vec![] }
        });

        assert_eq!(queried, [0, 1, 2, 3]);
        assert_eq!(builder.candidate_len(), 3);
        assert_eq!(builder.iter().count(), 8);
    }

    #[test]
    fn candidates_are_unique() {
        let builder = CandidateBuilder::from_columns(vec![vec!['A', 'B', 'C']; 4]);
        let all: Vec<String> = builder.iter().collect();
        let unique: rustc_hash::FxHashSet<&String> = all.iter().collect();

        assert_eq!(all.len(), 81);
        assert_eq!(unique.len(), 81);
    }

    #[test]
    fn iterator_is_fused_after_exhaustion() {
        let builder = CandidateBuilder::from_columns(vec![vec!['A']]);
        let mut iter = builder.iter();

        assert_eq!(iter.next().as_deref(), Some("A"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn many_columns_do_not_recurse() {
        let builder = CandidateBuilder::from_columns(vec![vec!['Z']; 10_000]);
        let only = builder.iter().next().unwrap();

        assert_eq!(only.len(), 10_000);
        assert_eq!(builder.iter().count(), 1);
    }

    #[test]
    fn count_saturates() {
        let builder = CandidateBuilder::from_columns(vec![vec!['A'; 36]; 40]);
        assert_eq!(builder.count(), u128::MAX);
    }
}

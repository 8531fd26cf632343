//! Input grid
//!
//! The grid is owned by whatever collects the user's feedback. Candidate
//! generation only reads it through [`InputGrid`]; the in-memory [`Grid`] is the
//! implementation used by the CLI and the tests.

use super::{Alphabet, CharacterStatus};
use crate::error::GridError;

/// A single entry: an optional symbol plus its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    value: Option<char>,
    status: CharacterStatus,
}

impl Cell {
    #[must_use]
    pub const fn new(value: char, status: CharacterStatus) -> Self {
        Self {
            value: Some(value),
            status,
        }
    }

    /// A cell with nothing entered
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            status: CharacterStatus::Unset,
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<char> {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> CharacterStatus {
        self.status
    }

    /// The symbol and status, if a symbol has been entered
    #[inline]
    #[must_use]
    pub const fn feedback(self) -> Option<(char, CharacterStatus)> {
        match self.value {
            Some(value) => Some((value, self.status)),
            None => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value.is_none()
    }
}

/// Read access to a grid of guesses plus the ability to reset it
///
/// Rows are guesses, columns are positions. A row shorter than its neighbours
/// reports `None` for the missing columns.
pub trait InputGrid {
    /// Number of guess rows
    fn row_count(&self) -> usize;

    /// Number of cells in `row`
    fn row_len(&self, row: usize) -> usize;

    /// The cell at `(row, column)`, or `None` if the row has no such column
    fn cell(&self, row: usize, column: usize) -> Option<Cell>;

    /// Reset every cell to [`Cell::empty`]
    fn clear(&mut self);

    /// Every cell in row-major order
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.row_count()).flat_map(move |row| {
            (0..self.row_len(row)).filter_map(move |column| self.cell(row, column))
        })
    }
}

/// In-memory rows × columns grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a rectangular grid with every cell empty
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![Cell::empty(); columns]; rows],
        }
    }

    /// Wrap rows as supplied by another grid provider
    ///
    /// Rows are not required to have equal length; see [`InputGrid`].
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid from `GUESS/FEEDBACK` rows
    ///
    /// # Errors
    /// Returns `GridError` if any row is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::core::{Grid, InputGrid, CharacterStatus};
    ///
    /// let grid = Grid::parse(&["CRANE/G-Y--", "SLOTH/--G?-"]).unwrap();
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.cell(0, 0).unwrap().status(), CharacterStatus::Correct);
    /// assert!(grid.cell(1, 3).unwrap().is_empty());
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let rows = rows
            .iter()
            .map(|row| parse_row(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Number of columns in the widest row
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Replace one cell
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` if the cell does not exist.
    pub fn set_cell(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GridError> {
        let rows = self.rows.len();
        let columns = self.column_count();
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(GridError::OutOfRange {
                row,
                column,
                rows,
                columns,
            })?;
        *slot = cell;
        Ok(())
    }

    /// Replace a whole row
    ///
    /// # Errors
    /// Returns `GridError` if the row does not exist or `cells` has the wrong length.
    pub fn set_row(&mut self, row: usize, cells: Vec<Cell>) -> Result<(), GridError> {
        let rows = self.rows.len();
        let columns = self.column_count();
        let slot = self.rows.get_mut(row).ok_or(GridError::OutOfRange {
            row,
            column: 0,
            rows,
            columns,
        })?;
        if slot.len() != cells.len() {
            return Err(GridError::RowLength {
                expected: slot.len(),
                actual: cells.len(),
            });
        }
        *slot = cells;
        Ok(())
    }

    /// Enter a `GUESS/FEEDBACK` row, rejecting symbols outside `alphabet`
    ///
    /// # Errors
    /// Returns `GridError` if the row is malformed, does not fit the grid, or
    /// uses a symbol the alphabet lacks.
    pub fn enter(&mut self, row: usize, text: &str, alphabet: &Alphabet) -> Result<(), GridError> {
        let cells = parse_row(text)?;
        if let Some(symbol) = cells
            .iter()
            .filter_map(|cell| cell.value())
            .find(|&symbol| !alphabet.contains(symbol))
        {
            return Err(GridError::UnsupportedCharacter(symbol));
        }
        self.set_row(row, cells)
    }

    /// Reset a single row to empty cells
    pub fn clear_row(&mut self, row: usize) {
        if let Some(cells) = self.rows.get_mut(row) {
            cells.fill(Cell::empty());
        }
    }

    /// Index of the first row with nothing entered
    #[must_use]
    pub fn next_empty_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Index of the last row with anything entered
    #[must_use]
    pub fn last_filled_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .rposition(|row| row.iter().any(|cell| !cell.is_empty()))
    }
}

impl InputGrid for Grid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.rows.get(row)?.get(column).copied()
    }

    fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::empty());
        }
    }
}

/// Parse `GUESS/FEEDBACK` into cells
///
/// The guess is upper-cased. A `?` in the feedback leaves that cell empty.
/// The last `/` separates the halves, so guesses may contain `/` themselves.
///
/// # Errors
/// Returns `GridError` if the separator is missing, the halves differ in length,
/// or a feedback symbol is unknown.
pub fn parse_row(text: &str) -> Result<Vec<Cell>, GridError> {
    let (guess, feedback) = text
        .trim()
        .rsplit_once('/')
        .ok_or_else(|| GridError::MalformedRow(text.to_string()))?;

    let guess: Vec<char> = guess.trim().to_uppercase().chars().collect();
    let statuses = feedback
        .trim()
        .chars()
        .map(CharacterStatus::from_symbol)
        .collect::<Result<Vec<_>, _>>()?;

    if guess.len() != statuses.len() {
        return Err(GridError::RowLength {
            expected: guess.len(),
            actual: statuses.len(),
        });
    }

    Ok(guess
        .into_iter()
        .zip(statuses)
        .map(|(value, status)| match status {
            CharacterStatus::Unset => Cell::empty(),
            _ => Cell::new(value, status),
        })
        .collect())
}

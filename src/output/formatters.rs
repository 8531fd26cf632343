//! Formatting utilities for terminal output

use crate::core::Cell;

/// Placeholder shown for a cell with nothing entered
const EMPTY_SYMBOL: char = '_';

/// Format a row's feedback as an emoji string
#[must_use]
pub fn row_to_emoji(cells: &[Cell]) -> String {
    cells.iter().map(|cell| cell.status().to_emoji()).collect()
}

/// Format a row in `GUESS/FEEDBACK` notation
///
/// Empty cells become `_` with `?` feedback, so the text parses back into the
/// same row.
///
/// # Examples
/// ```
/// use wordle_candidates::core::parse_row;
/// use wordle_candidates::output::formatters::row_notation;
///
/// let cells = parse_row("crane/g-y?-").unwrap();
/// assert_eq!(row_notation(&cells), "CRA_E/G-Y?-");
/// ```
#[must_use]
pub fn row_notation(cells: &[Cell]) -> String {
    let feedback: String = cells.iter().map(|cell| cell.status().symbol()).collect();
    format!("{}/{feedback}", row_guess(cells))
}

/// Symbols of a row with empty cells shown as `_`
#[must_use]
pub fn row_guess(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| cell.value().unwrap_or(EMPTY_SYMBOL))
        .collect()
}

/// One line per grid row: number, guess and emoji feedback
#[must_use]
pub fn grid_lines(rows: &[Vec<Cell>]) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(index, cells)| {
            format!(
                "{}. {} {}",
                index + 1,
                row_guess(cells),
                row_to_emoji(cells)
            )
        })
        .collect()
}

/// Candidates joined for display, cut off after `limit`
#[must_use]
pub fn candidate_summary(candidates: &[String], limit: usize) -> String {
    let mut text = candidates
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let hidden = candidates.len().saturating_sub(limit);
    if hidden > 0 {
        text.push_str(&format!(" ... and {hidden} more"));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Wordle feedback scoring
//!
//! Produces the statuses a guess would receive against a known secret. The
//! generator never needs this; it is used to build realistic grids for the
//! self-check command and the tests.

use super::{Cell, CharacterStatus};
use rustc_hash::FxHashMap;

/// Score `guess` against `secret` with Wordle's duplicate rules
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark present-but-misplaced symbols while the pool lasts
/// 3. Everything else is absent
///
/// Positions past the end of the shorter string are ignored.
///
/// # Examples
/// ```
/// use wordle_candidates::core::{CharacterStatus, score};
///
/// // ROBOT vs FLOOR: R(yellow) O(yellow) B(gray) O(green) T(gray)
/// let statuses = score("ROBOT", "FLOOR");
/// assert_eq!(statuses[0], CharacterStatus::PresentWrongPosition);
/// assert_eq!(statuses[3], CharacterStatus::Correct);
/// assert_eq!(statuses[4], CharacterStatus::Absent);
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> Vec<CharacterStatus> {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();
    let len = guess.len().min(secret.len());

    let mut result = vec![CharacterStatus::Absent; len];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &symbol in &secret[..len] {
        *available.entry(symbol).or_insert(0) += 1;
    }

    for i in 0..len {
        if guess[i] == secret[i] {
            result[i] = CharacterStatus::Correct;
            if let Some(count) = available.get_mut(&guess[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for i in 0..len {
        if result[i] == CharacterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess[i])
            && *count > 0
        {
            result[i] = CharacterStatus::PresentWrongPosition;
            *count -= 1;
        }
    }

    result
}

/// Score `guess` against `secret` and pair each status with its symbol
#[must_use]
pub fn score_row(guess: &str, secret: &str) -> Vec<Cell> {
    guess
        .chars()
        .zip(score(guess, secret))
        .map(|(symbol, status)| Cell::new(symbol, status))
        .collect()
}

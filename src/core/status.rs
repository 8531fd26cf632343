//! Per-cell feedback status
//!
//! The status of a cell is one of four tags:
//! - Unset (nothing entered)
//! - Correct (green, right symbol in the right place)
//! - `PresentWrongPosition` (yellow, symbol is elsewhere in the target)
//! - Absent (gray, symbol does not occur in the target)

use crate::error::GridError;

/// Feedback attached to a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterStatus {
    #[default]
    Unset,
    Correct,
    PresentWrongPosition,
    Absent,
}

impl CharacterStatus {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present in the wrong position
    /// - '-'/'_'/'.'/⬜ for absent
    /// - '?'/⬛ for unset
    ///
    /// # Errors
    /// Returns `GridError::InvalidFeedback` for any other symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::core::CharacterStatus;
    ///
    /// assert_eq!(CharacterStatus::from_symbol('g'), Ok(CharacterStatus::Correct));
    /// assert_eq!(CharacterStatus::from_symbol('🟨'), Ok(CharacterStatus::PresentWrongPosition));
    /// assert!(CharacterStatus::from_symbol('x').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, GridError> {
        match symbol {
            'G' | 'g' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | '🟨' => Ok(Self::PresentWrongPosition),
            '-' | '_' | '.' | '⬜' => Ok(Self::Absent),
            '?' | '⬛' => Ok(Self::Unset),
            _ => Err(GridError::InvalidFeedback(symbol)),
        }
    }

    /// ASCII symbol accepted back by [`Self::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unset => '?',
            Self::Correct => 'G',
            Self::PresentWrongPosition => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Unset => '⬛',
            Self::Correct => '🟩',
            Self::PresentWrongPosition => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the status says the symbol occurs somewhere in the target
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Correct | Self::PresentWrongPosition)
    }
}

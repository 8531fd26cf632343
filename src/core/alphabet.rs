//! Alphabet construction
//!
//! An alphabet is the ordered set of symbols a candidate may be built from.
//! Symbol order matters: admissible sets and generated candidates follow it.

use crate::error::ConfigError;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Keyboard order, zero last
const DIGITS: &str = "1234567890";
const OPERATORS: &str = "!()*+-./<=>^";

/// Which symbol ranges make up the alphabet
///
/// Digits follow the keyboard row, `1` through `9` and then `0`, so candidates
/// list `1...` before `0...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphabetMode {
    /// `A-Z`
    #[default]
    LettersOnly,
    /// `A-Z` followed by `1-9, 0`
    LettersAndDigits,
    /// `1-9, 0`
    DigitsOnly,
    /// Digits followed by `! ( ) * + - . / < = > ^`
    DigitsAndOperators,
}

impl AlphabetMode {
    /// All supported modes, in declaration order
    pub const ALL: [Self; 4] = [
        Self::LettersOnly,
        Self::LettersAndDigits,
        Self::DigitsOnly,
        Self::DigitsAndOperators,
    ];

    /// Name accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LettersOnly => "letters",
            Self::LettersAndDigits => "letters-digits",
            Self::DigitsOnly => "digits",
            Self::DigitsAndOperators => "digits-operators",
        }
    }

    const fn allows_letters(self) -> bool {
        matches!(self, Self::LettersOnly | Self::LettersAndDigits)
    }

    const fn allows_digits(self) -> bool {
        matches!(
            self,
            Self::LettersAndDigits | Self::DigitsOnly | Self::DigitsAndOperators
        )
    }

    const fn allows_operators(self) -> bool {
        matches!(self, Self::DigitsAndOperators)
    }
}

impl FromStr for AlphabetMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letters" | "alpha" | "letters-only" => Ok(Self::LettersOnly),
            "letters-digits" | "alphanumeric" | "letters-and-digits" => {
                Ok(Self::LettersAndDigits)
            }
            "digits" | "numbers" | "digits-only" => Ok(Self::DigitsOnly),
            "digits-operators" | "math" | "digits-and-operators" => Ok(Self::DigitsAndOperators),
            _ => Err(ConfigError::UnsupportedAlphabetMode(s.to_string())),
        }
    }
}

impl fmt::Display for AlphabetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, duplicate-free set of symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet for a mode: letters, then digits, then operators
    ///
    /// # Examples
    /// ```
    /// use wordle_candidates::core::{Alphabet, AlphabetMode};
    ///
    /// let alphabet = Alphabet::from_mode(AlphabetMode::DigitsOnly);
    /// assert_eq!(alphabet.to_string(), "1234567890");
    /// ```
    #[must_use]
    pub fn from_mode(mode: AlphabetMode) -> Self {
        let mut symbols = String::new();
        if mode.allows_letters() {
            symbols.push_str(LETTERS);
        }
        if mode.allows_digits() {
            symbols.push_str(DIGITS);
        }
        if mode.allows_operators() {
            symbols.push_str(OPERATORS);
        }

        Self {
            symbols: symbols.chars().collect(),
        }
    }

    /// Build an alphabet from an explicit symbol list, keeping its order
    ///
    /// # Errors
    /// Returns `ConfigError` if `symbols` is empty or repeats a symbol.
    pub fn custom(symbols: &str) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();
        let mut ordered = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
            ordered.push(symbol);
        }

        if ordered.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        Ok(Self { symbols: ordered })
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_only() {
        let alphabet = Alphabet::from_mode(AlphabetMode::LettersOnly);
        assert_eq!(alphabet.to_string(), LETTERS);
        assert_eq!(alphabet.len(), 26);
    }

    #[test]
    fn letters_then_digits() {
        let alphabet = Alphabet::from_mode(AlphabetMode::LettersAndDigits);
        assert_eq!(alphabet.to_string(), format!("{LETTERS}{DIGITS}"));
        assert_eq!(alphabet.len(), 36);
    }

    #[test]
    fn digits_put_zero_last() {
        let alphabet = Alphabet::from_mode(AlphabetMode::DigitsOnly);
        assert_eq!(alphabet.symbols().first(), Some(&'1'));
        assert_eq!(alphabet.symbols().last(), Some(&'0'));
    }

    #[test]
    fn digits_then_operators() {
        let alphabet = Alphabet::from_mode(AlphabetMode::DigitsAndOperators);
        assert_eq!(alphabet.to_string(), "1234567890!()*+-./<=>^");
        assert!(!alphabet.contains('A'));
        assert!(alphabet.contains('^'));
    }

    #[test]
    fn every_mode_is_duplicate_free() {
        for mode in AlphabetMode::ALL {
            let alphabet = Alphabet::from_mode(mode);
            assert!(Alphabet::custom(&alphabet.to_string()).is_ok(), "{mode}");
        }
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in AlphabetMode::ALL {
            assert_eq!(mode.name().parse::<AlphabetMode>(), Ok(mode));
        }
        assert_eq!("MATH".parse(), Ok(AlphabetMode::DigitsAndOperators));
    }

    #[test]
    fn unsupported_mode_rejected() {
        assert_eq!(
            "hex".parse::<AlphabetMode>(),
            Err(ConfigError::UnsupportedAlphabetMode("hex".to_string()))
        );
    }

    #[test]
    fn custom_keeps_order() {
        let alphabet = Alphabet::custom("CAT").unwrap();
        assert_eq!(alphabet.symbols(), &['C', 'A', 'T']);
    }

    #[test]
    fn custom_rejects_duplicates_and_empty() {
        assert_eq!(Alphabet::custom("ABA"), Err(ConfigError::DuplicateSymbol('A')));
        assert_eq!(Alphabet::custom(""), Err(ConfigError::EmptyAlphabet));
    }
}

//! Generator configuration

use crate::core::AlphabetMode;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How repeated symbols in the feedback are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateHandling {
    /// An absent symbol is ruled out everywhere, and each misplaced symbol only
    /// has to appear once
    #[default]
    Global,
    /// An absent symbol that is confirmed elsewhere in the grid is only ruled out
    /// at its own column, and repeated confirmations in one guess require that
    /// many occurrences
    PerOccurrence,
}

impl DuplicateHandling {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerOccurrence => "per-occurrence",
        }
    }
}

impl FromStr for DuplicateHandling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "simple" => Ok(Self::Global),
            "per-occurrence" | "occurrence" | "wordle" => Ok(Self::PerOccurrence),
            _ => Err(ConfigError::UnsupportedDuplicateHandling(s.to_string())),
        }
    }
}

impl fmt::Display for DuplicateHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options recognised by [`crate::solver::Generator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of guesses the grid holds
    pub rows: usize,
    /// Symbols per guess
    pub columns: usize,
    pub alphabet_mode: AlphabetMode,
    pub duplicates: DuplicateHandling,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new(rows: usize, columns: usize, alphabet_mode: AlphabetMode) -> Self {
        Self {
            rows,
            columns,
            alphabet_mode,
            duplicates: DuplicateHandling::Global,
        }
    }

    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicateHandling) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Check the grid dimensions
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyDimension` if rows or columns is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::EmptyDimension("row"));
        }
        if self.columns == 0 {
            return Err(ConfigError::EmptyDimension("column"));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(5, 5, AlphabetMode::LettersOnly)
    }
}

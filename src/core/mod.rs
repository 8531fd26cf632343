//! Core domain types
//!
//! Alphabets, cell feedback and the input grid. Nothing here knows how
//! candidates are generated.

mod alphabet;
mod feedback;
mod grid;
mod status;

pub use alphabet::{Alphabet, AlphabetMode};
pub use feedback::{score, score_row};
pub use grid::{Cell, Grid, InputGrid, parse_row};
pub use status::CharacterStatus;

//! Candidate generation
//!
//! Constraint analysis, enumeration and the required-character filter, tied
//! together by [`Generator`].

mod builder;
mod constraints;
mod engine;
mod required;

pub use builder::{CandidateBuilder, Candidates};
pub use constraints::Constraints;
pub use engine::Generator;
pub use required::RequiredCharacters;

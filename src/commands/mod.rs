//! Command implementations

pub mod check;
pub mod generate;
pub mod simple;

pub use check::{CheckConfig, CheckResult, Trial, run_check};
pub use generate::{DEFAULT_MAX_CANDIDATES, GenerateResult, build_grid, generate_candidates};
pub use simple::{SimpleConfig, run_simple, run_simple_with};

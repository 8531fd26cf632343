//! Wordle Candidates
//!
//! Enumerates every string consistent with Wordle-style guess feedback, over
//! letters, digits or arithmetic symbols.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_candidates::config::GeneratorConfig;
//! use wordle_candidates::core::Grid;
//! use wordle_candidates::solver::Generator;
//!
//! let generator = Generator::new(GeneratorConfig::default()).unwrap();
//! let grid = Grid::parse(&["CRANE/-GG--", "BLAST/--G-G", "DRAFT/-GGGG"]).unwrap();
//!
//! let candidates = generator.generate(&grid);
//! assert!(candidates.contains(&"GRAFT".to_string()));
//! ```

// Generator configuration
pub mod config;

// Core domain types
pub mod core;

// Error types
pub mod error;

// Candidate generation
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

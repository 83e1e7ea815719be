//! Genetic-algorithm solver for the numbers game: order six numbers and
//! five operators so that evaluating them left to right lands on (or as
//! close as possible to) a target.
//!
//! ```no_run
//! let outcome = birislem::solve(&[1, 2, 3, 4, 5, 6], 21).unwrap();
//! println!("{}", outcome);
//! ```

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::evaluation::{Expression, NumberContext};
pub use engines::generation::{
    solve, solve_with, Chromosome, EvolutionEngine, GenerationReport, ProgressCallback,
    SolveOutcome,
};
pub use error::{EvaluationError, Result, SolverError};
pub use types::{Operator, Termination};

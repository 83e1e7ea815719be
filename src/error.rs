use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid gene: {gene} is outside 0..{len}")]
    InvalidGene { gene: usize, len: usize },

    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reasons a decoded expression has no integer value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },

    #[error("arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, SolverError>;

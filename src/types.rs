use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of input numbers in a puzzle
pub const NUMBER_COUNT: usize = 6;

/// Number of operator slots between them
pub const OPERATOR_COUNT: usize = NUMBER_COUNT - 1;

/// Fitness of an expression that has no integer value
pub const UNREACHABLE_FITNESS: u64 = u64::MAX;

/// Binary operator applied between two consecutive operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The fixed operator slots. A chromosome's operator genes are a
/// permutation of indices into this table.
///
/// Only two slots add, so an all-addition expression such as
/// `1 + 2 + 3 + 4 + 5 + 6` cannot be formed.
pub const OPERATOR_SLOTS: [Operator; OPERATOR_COUNT] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Add,
];

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Why the generational loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A chromosome hit the target exactly
    ExactMatch,
    /// The generation cap was reached without an exact match
    GenerationLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::ExactMatch => write!(f, "exact match"),
            Termination::GenerationLimit => write!(f, "generation limit"),
        }
    }
}

use super::traits::ConfigSection;
use crate::error::SolverError;
use crate::types::NUMBER_COUNT;
use serde::{Deserialize, Serialize};

/// The numbers and target of one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub numbers: Vec<i64>,
    pub target: i64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3, 4, 5, 6],
            target: 21,
        }
    }
}

impl ConfigSection for PuzzleConfig {
    fn section_name() -> &'static str {
        "puzzle"
    }

    fn validate(&self) -> Result<(), SolverError> {
        if self.numbers.len() != NUMBER_COUNT {
            return Err(Self::invalid(&format!(
                "Exactly {} numbers are required, got {}",
                NUMBER_COUNT,
                self.numbers.len()
            )));
        }
        Ok(())
    }
}

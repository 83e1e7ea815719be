use crate::error::SolverError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SolverError>;

    /// Configuration error tagged with the section it came from
    fn invalid(message: &str) -> SolverError {
        SolverError::Configuration(format!("[{}] {}", Self::section_name(), message))
    }
}

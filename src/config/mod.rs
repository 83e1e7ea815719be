pub mod evolution;
pub mod manager;
pub mod puzzle;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use puzzle::PuzzleConfig;
pub use traits::ConfigSection;

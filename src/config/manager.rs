use super::{evolution::EvolutionConfig, puzzle::PuzzleConfig, traits::ConfigSection};
use crate::error::SolverError;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `BIRISLEM__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "BIRISLEM";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub evolution: EvolutionConfig,
    pub puzzle: Option<PuzzleConfig>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        self.evolution.validate()?;
        if let Some(puzzle) = &self.puzzle {
            puzzle.validate()?;
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, with `BIRISLEM__*` environment variables layered on top
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SolverError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        self.load_from_str(&contents)
    }

    pub fn load_from_str(&self, contents: &str) -> Result<(), SolverError> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SolverError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SolverError> {
        let toml_str = toml::to_string_pretty(&*self.read())
            .map_err(|e| SolverError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.read().clone()
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), SolverError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.write() = candidate;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

use super::traits::ConfigSection;
use crate::error::SolverError;
use serde::{Deserialize, Serialize};

/// Parameters of one generational run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub crossover_rate: f64,
    pub number_mutation_rate: f64,
    pub operator_mutation_rate: f64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            generations: 1000,
            crossover_rate: 0.9,
            number_mutation_rate: 0.2,
            operator_mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SolverError> {
        if self.population_size < 2 {
            return Err(Self::invalid("Population size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(Self::invalid("Generation cap must be at least 1"));
        }
        let rates = [
            ("Crossover rate", self.crossover_rate),
            ("Number mutation rate", self.number_mutation_rate),
            ("Operator mutation rate", self.operator_mutation_rate),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Self::invalid(&format!("{} must be between 0 and 1", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 1000);
        assert_eq!(config.generations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_rates() {
        let config = EvolutionConfig {
            number_mutation_rate: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[evolution] Number mutation rate"));

        let config = EvolutionConfig {
            crossover_rate: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_population() {
        let config = EvolutionConfig {
            population_size: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

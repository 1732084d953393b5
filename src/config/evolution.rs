use super::traits::ConfigSection;
use crate::engines::generation::operators::DEFAULT_TOURNAMENT_BIAS;
use crate::error::PhrasegenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub tournament_bias: f64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            generations: 10000,
            mutation_rate: 0.1,
            tournament_bias: DEFAULT_TOURNAMENT_BIAS,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), PhrasegenError> {
        if self.population_size == 0 {
            return Err(PhrasegenError::Configuration(
                "Population size must be positive".to_string()
            ));
        }
        // Children are bred in pairs; an odd size would overshoot every generation
        if self.population_size % 2 != 0 {
            return Err(PhrasegenError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(PhrasegenError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.tournament_bias) {
            return Err(PhrasegenError::Configuration(
                "Tournament bias must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }
}

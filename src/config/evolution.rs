use super::traits::ConfigSection;
use crate::engines::generation::crossover::CROSSOVER_RATE;
use crate::error::PixgeneError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    /// Probability that a mating pair recombines instead of passing through
    pub crossover_rate: f64,
    /// Success probability of each coin flip in the per-generation mutation loop
    pub mutation_chance: f64,
    pub seed: Option<u64>,
    /// Size of the worker pool; 0 lets rayon pick
    pub worker_threads: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            num_generations: 500,
            crossover_rate: CROSSOVER_RATE,
            mutation_chance: 0.99,
            seed: None,
            worker_threads: 0,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), PixgeneError> {
        if self.population_size == 0 {
            return Err(PixgeneError::Configuration(
                "Population size must be greater than zero".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(PixgeneError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(PixgeneError::Configuration(
                "Crossover rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.mutation_chance) {
            return Err(PixgeneError::Configuration(
                "Mutation chance must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}

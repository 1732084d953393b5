use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::generation::operators::{
    generate_population, get_best_individual, recombine, tournament,
};
use crate::error::{PhrasegenError, Result};
use crate::types::{Individual, Population, Target};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, population_size: usize, best: &Individual);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, population_size: usize, best: &Individual) {
        (**self).on_generation_complete(generation, population_size, best);
    }
}

/// Result of a full run
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub population: Population,
    pub best: Individual,
    pub generations_run: usize,
}

/// Breed the generation after `population`.
///
/// Parents come from two independent tournaments and each pair yields two
/// children, so the buffer fills two at a time until it holds at least
/// `population.len()` members. For an odd size that means one extra member
/// (3 -> 4); `EvolutionConfig::validate` rejects odd sizes for engine runs.
pub fn next_generation<R: Rng>(
    population: &[Individual],
    target: &Target,
    tournament_bias: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Population> {
    let mut next = Vec::with_capacity(population.len() + 1);

    while next.len() < population.len() {
        let parent_a = tournament(population, tournament_bias, rng)?;
        let parent_b = tournament(population, tournament_bias, rng)?;
        next.extend(recombine(parent_a, parent_b, target, mutation_rate, rng));
    }

    Ok(next)
}

pub struct EvolutionEngine {
    target: Target,
    config: EvolutionConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(target: Target, config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { target, config, rng })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Run the evolution process from a fresh random population
    pub fn run<C: ProgressCallback>(&mut self, callback: C) -> Result<EvolutionOutcome> {
        let population = self.initialize_population();
        self.run_from(population, callback)
    }

    /// Run every configured generation starting from `population`.
    ///
    /// There is no early exit: a run that matches the target keeps going
    /// until the generation budget is spent. `population` must hold exactly
    /// `population_size` members.
    pub fn run_from<C: ProgressCallback>(
        &mut self,
        mut population: Population,
        mut callback: C,
    ) -> Result<EvolutionOutcome> {
        self.check_population_size(&population)?;

        log::info!(
            "Evolving {} individuals toward {:?} for {} generations",
            population.len(),
            self.target.as_str(),
            self.config.generations
        );

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            population = self.step(&population)?;

            let best = best_of(&population)?;
            log::debug!(
                "Generation {}: best fitness {} ({:?})",
                generation,
                best.fitness(),
                best.phrase()
            );
            callback.on_generation_complete(generation, population.len(), best);
        }

        let best = best_of(&population)?.clone();
        log::info!("Finished with best fitness {} ({:?})", best.fitness(), best.phrase());

        Ok(EvolutionOutcome {
            population,
            best,
            generations_run: self.config.generations,
        })
    }

    /// Produce the next generation from `population`
    pub fn step(&mut self, population: &[Individual]) -> Result<Population> {
        self.check_population_size(population)?;
        next_generation(
            population,
            &self.target,
            self.config.tournament_bias,
            self.config.mutation_rate,
            &mut self.rng,
        )
    }

    pub fn initialize_population(&mut self) -> Population {
        generate_population(self.config.population_size, &self.target, &mut self.rng)
    }

    fn check_population_size(&self, population: &[Individual]) -> Result<()> {
        if population.len() != self.config.population_size {
            return Err(PhrasegenError::Configuration(format!(
                "Population has {} members, engine is configured for {}",
                population.len(),
                self.config.population_size
            )));
        }
        Ok(())
    }
}

fn best_of(population: &[Individual]) -> Result<&Individual> {
    get_best_individual(population)
        .ok_or_else(|| PhrasegenError::Selection("Population is empty".to_string()))
}

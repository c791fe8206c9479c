use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::RunContext;
use crate::engines::generation::{
    crossover::mate,
    genome::Genome,
    mutation::mutate_population,
    progress::ProgressCallback,
    selection::Selector,
};
use crate::error::{PixgeneError, Result};
use crate::types::PopulationStats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::mpsc;

/// Final population of a run together with its scores
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub population: Vec<Genome>,
    pub scores: Vec<f64>,
    pub stats: PopulationStats,
    pub best: Genome,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    context: RunContext,
    pool: ThreadPool,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validates `config` and builds the worker pool. Nothing runs until [`run`](Self::run).
    pub fn new(config: EvolutionConfig, context: RunContext) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pixgene-{i}"));
        if config.worker_threads > 0 {
            builder = builder.num_threads(config.worker_threads);
        }
        let pool = builder.build().map_err(|e| {
            PixgeneError::Configuration(format!("Failed to build worker pool: {}", e))
        })?;

        Ok(Self {
            config,
            context,
            pool,
            rng,
        })
    }

    /// Run the configured number of generations from a random population
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<EvolutionOutcome> {
        let population = self.initialize_population();
        self.run_with_population(population, callback)
    }

    /// Run the configured number of generations from a caller-supplied generation 0
    pub fn run_with_population<C: ProgressCallback>(
        &mut self,
        mut population: Vec<Genome>,
        callback: &mut C,
    ) -> Result<EvolutionOutcome> {
        self.check_population(&population)?;

        log::info!(
            "Evolving {} genomes of {}x{} for {} generations (perfect score {})",
            population.len(),
            self.context.width(),
            self.context.height(),
            self.config.num_generations,
            self.context.perfect_score()
        );

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            let scores = self.evaluate_population(&population);
            let stats = summarize(generation, &scores)?;
            callback.on_generation_complete(&stats, &population[stats.best_index])?;

            population = self.create_next_generation(&population, &scores);
        }

        let scores = self.evaluate_population(&population);
        let stats = summarize(self.config.num_generations, &scores)?;
        let best = population[stats.best_index].clone();
        let outcome = EvolutionOutcome {
            population,
            scores,
            stats,
            best,
        };

        callback.on_run_complete(&outcome);
        Ok(outcome)
    }

    /// Generation 0: every channel uniformly random
    pub fn initialize_population(&mut self) -> Vec<Genome> {
        let (width, height) = self.context.dimensions();
        (0..self.config.population_size)
            .map(|_| Genome::random(width, height, &mut self.rng))
            .collect()
    }

    /// Score every genome against the target, in parallel
    pub fn evaluate_population(&self, population: &[Genome]) -> Vec<f64> {
        let evaluator = self.context.evaluator();
        self.pool
            .install(|| population.par_iter().map(|g| evaluator.score(g)).collect())
    }

    /// One full generation: score, select, mate, mutate
    pub fn evolve_generation(&mut self, population: &[Genome]) -> Vec<Genome> {
        let scores = self.evaluate_population(population);
        self.create_next_generation(population, &scores)
    }

    /// Select `N/2` pairs, mate each pair as its own task on the worker pool and
    /// collect the `N` children, then mutate the new population once.
    ///
    /// Children are collected through a channel as tasks finish.
    pub fn create_next_generation(&mut self, population: &[Genome], scores: &[f64]) -> Vec<Genome> {
        let size = self.config.population_size;
        assert_eq!(population.len(), size, "population size drifted");

        let selector = Selector::new(population, scores);
        let crossover_rate = self.config.crossover_rate;
        let seeds: Vec<u64> = (0..size / 2).map(|_| self.rng.gen()).collect();

        let (tx, rx) = mpsc::channel::<(usize, (Genome, Genome))>();
        let selector_ref = &selector;
        self.pool.scope(move |scope| {
            for (slot, seed) in seeds.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let (a, b) = selector_ref.draw_pair(&mut rng);
                    let children = mate(a, b, crossover_rate, &mut rng);
                    // rx outlives the scope, so this cannot fail
                    let _ = tx.send((slot, children));
                });
            }
        });

        // Completion order is arbitrary; each pair lands in its task's slot so a
        // seeded run is reproducible
        let mut slots: Vec<Option<(Genome, Genome)>> = (0..size / 2).map(|_| None).collect();
        for (slot, children) in rx {
            slots[slot] = Some(children);
        }
        let mut next_generation: Vec<Genome> = slots
            .into_iter()
            .flatten()
            .flat_map(|(c, d)| [c, d])
            .collect();
        assert_eq!(next_generation.len(), size, "lost children during mating");

        let flips = mutate_population(&mut next_generation, self.config.mutation_chance, &mut self.rng);
        log::debug!(
            "Mated {} pairs (uniform selection: {}), applied {} bit flips",
            size / 2,
            selector.is_uniform(),
            flips
        );

        next_generation
    }

    fn check_population(&self, population: &[Genome]) -> Result<()> {
        if population.len() != self.config.population_size {
            return Err(PixgeneError::Configuration(format!(
                "Expected {} genomes, got {}",
                self.config.population_size,
                population.len()
            )));
        }
        let expected = self.context.dimensions();
        if let Some(genome) = population.iter().find(|g| g.dimensions() != expected) {
            return Err(PixgeneError::DimensionMismatch {
                expected,
                actual: genome.dimensions(),
            });
        }
        Ok(())
    }
}

fn summarize(generation: usize, scores: &[f64]) -> Result<PopulationStats> {
    PopulationStats::from_scores(generation, scores)
        .ok_or_else(|| PixgeneError::Configuration("Population is empty".to_string()))
}

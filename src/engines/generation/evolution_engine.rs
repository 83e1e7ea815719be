use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::NumberContext;
use crate::engines::generation::{
    chromosome::Chromosome,
    operators::{self, random_chromosome},
};
use crate::error::Result;
use crate::types::Termination;
use chrono::{DateTime, Local};
use log::{debug, info, trace};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

pub struct EvolutionEngine {
    config: EvolutionConfig,
    context: NumberContext,
}

/// Summary of one finished generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// 1-based generation number
    pub generation: usize,
    pub best_fitness: u64,
    pub population_best_fitness: u64,
    pub recovered_failures: usize,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, report: &GenerationReport);
}

/// Result of a run
#[derive(Debug, Clone, Serialize)]
pub struct SolveOutcome {
    pub best: Chromosome,
    pub fitness: u64,
    pub value: Option<i64>,
    pub expression: String,
    pub generations: usize,
    pub elapsed: Duration,
    pub started_at: DateTime<Local>,
    pub termination: Termination,
}

impl SolveOutcome {
    pub fn is_exact(&self) -> bool {
        self.fitness == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation: {} elapsed: {} ms best: {}",
            self.generations,
            self.elapsed.as_millis(),
            self.expression
        )
    }
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, context: NumberContext) -> Self {
        Self { config, context }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn context(&self) -> &NumberContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut NumberContext {
        &mut self.context
    }

    /// Run the generational loop until an exact match or the generation cap
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<SolveOutcome> {
        self.config.validate()?;

        let started_at = Local::now();
        let start = Instant::now();
        info!(
            "Solving {:?} -> {} with {} individuals for at most {} generations",
            self.context.numbers(),
            self.context.target(),
            self.config.population_size,
            self.config.generations
        );

        let mut population = self.initialize_population()?;
        self.sort(&mut population);

        let mut best = population[0].clone();
        let mut generation = 0;
        let mut termination = Termination::GenerationLimit;

        while generation < self.config.generations {
            generation += 1;
            callback.on_generation_start(generation);

            let mut recovered_failures = self.crossover(&mut population);
            recovered_failures += self.mutate(&mut population);
            self.sort(&mut population);

            let exact = population
                .iter()
                .find(|c| self.context.is_exact(c))
                .cloned();
            let found_exact = exact.is_some();

            if let Some(exact) = exact {
                best = exact;
            } else if self.fitness(&population[0]) < self.fitness(&best) {
                best = population[0].clone();
                debug!(
                    "Generation {}: best-ever improved to {}",
                    generation,
                    self.fitness(&best)
                );
            }

            let report = GenerationReport {
                generation,
                best_fitness: self.fitness(&best),
                population_best_fitness: self.fitness(&population[0]),
                recovered_failures,
            };
            trace!("{:?}", report);
            callback.on_generation_complete(&report);

            if found_exact || self.context.is_exact(&best) {
                termination = Termination::ExactMatch;
                break;
            }
        }

        let fitness = self.fitness(&best);
        let outcome = SolveOutcome {
            value: self.context.evaluate(&best).ok(),
            expression: self.context.describe(&best),
            best,
            fitness,
            generations: generation,
            elapsed: start.elapsed(),
            started_at,
            termination,
        };
        info!(
            "Stopped on {} after {} generations, fitness {}",
            outcome.termination, outcome.generations, outcome.fitness
        );

        Ok(outcome)
    }

    pub fn initialize_population(&mut self) -> Result<Vec<Chromosome>> {
        (0..self.config.population_size)
            .map(|_| random_chromosome(&mut self.context))
            .collect()
    }

    /// Crossover pass; returns the number of skipped attempts
    pub fn crossover(&mut self, population: &mut [Chromosome]) -> usize {
        operators::crossover(population, self.config.crossover_rate, &mut self.context)
    }

    /// Mutation pass; returns the number of skipped attempts
    pub fn mutate(&mut self, population: &mut [Chromosome]) -> usize {
        operators::mutate(population, &self.config, &mut self.context)
    }

    /// Ascending fitness, lower is better
    pub fn sort(&self, population: &mut [Chromosome]) {
        population.sort_by_cached_key(|c| self.context.fitness_of(c));
    }

    pub fn fitness(&self, chromosome: &Chromosome) -> u64 {
        self.context.fitness_of(chromosome)
    }
}

/// Solve with the default configuration and no progress output
pub fn solve(numbers: &[i64], target: i64) -> Result<SolveOutcome> {
    solve_with(numbers, target, EvolutionConfig::default(), NoProgress)
}

pub fn solve_with<C: ProgressCallback>(
    numbers: &[i64],
    target: i64,
    config: EvolutionConfig,
    callback: C,
) -> Result<SolveOutcome> {
    let context = NumberContext::from_slice(numbers, target, config.seed)?;
    EvolutionEngine::new(config, context).run(callback)
}

/// Discards all progress
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _report: &GenerationReport) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        (**self).on_generation_complete(report);
    }
}

use crate::config::EvolutionConfig;
use crate::engines::evaluation::NumberContext;
use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::repair::repair;
use crate::error::Result;
use crate::types::{NUMBER_COUNT, OPERATOR_COUNT};
use log::warn;

/// What a single mutation attempt did to its individual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Neither swap fired
    Untouched,
    /// A swap fired but the copy was not strictly fitter
    Rejected,
    /// The fitter copy replaced the individual
    Accepted,
}

/// Generate a random chromosome
pub fn random_chromosome(context: &mut NumberContext) -> Result<Chromosome> {
    let numbers = context.random_number_order();
    let operators = context.random_operator_order();
    Chromosome::new(numbers, operators)
}

/// Uniform crossover with a fixed parity mask: even positions from `first`,
/// odd positions from `second`, each sequence repaired afterwards.
pub fn recombine(first: &Chromosome, second: &Chromosome) -> Result<Chromosome> {
    let mut numbers = [0; NUMBER_COUNT];
    for (i, gene) in numbers.iter_mut().enumerate() {
        *gene = pick(i, first.number_order(), second.number_order());
    }
    repair(&mut numbers)?;

    let mut operators = [0; OPERATOR_COUNT];
    for (i, gene) in operators.iter_mut().enumerate() {
        *gene = pick(i, first.operator_order(), second.operator_order());
    }
    repair(&mut operators)?;

    let mut child = first.duplicate();
    child.set_number_order(numbers)?;
    child.set_operator_order(operators)?;
    Ok(child)
}

fn pick(index: usize, first: &[usize], second: &[usize]) -> usize {
    if index % 2 == 0 {
        first[index]
    } else {
        second[index]
    }
}

/// Crossover for `population[index]` against a random partner drawn from
/// the whole population, itself included. Only `population[index]` changes.
/// Returns whether a crossover happened.
pub fn crossover_at(
    population: &mut [Chromosome],
    index: usize,
    crossover_rate: f64,
    context: &mut NumberContext,
) -> Result<bool> {
    if context.uniform() >= crossover_rate {
        return Ok(false);
    }

    let partner = context.bounded(population.len());
    let child = recombine(&population[index], &population[partner])?;
    population[index] = child;
    Ok(true)
}

/// One left-to-right crossover pass over every index but the last.
/// Failed attempts are logged and skipped; their count is returned.
pub fn crossover(
    population: &mut [Chromosome],
    crossover_rate: f64,
    context: &mut NumberContext,
) -> usize {
    let mut failures = 0;
    for index in 0..population.len().saturating_sub(1) {
        if let Err(e) = crossover_at(population, index, crossover_rate, context) {
            warn!("Crossover skipped for individual {}: {}", index, e);
            failures += 1;
        }
    }
    failures
}

/// Speculative swap mutation of `population[index]`. The swapped copy is
/// kept only if it is strictly fitter than the original.
pub fn mutate_at(
    population: &mut [Chromosome],
    index: usize,
    config: &EvolutionConfig,
    context: &mut NumberContext,
) -> Result<MutationOutcome> {
    let mut candidate = population[index].duplicate();
    let mut mutated = false;

    if context.uniform() < config.number_mutation_rate {
        let first = context.bounded(NUMBER_COUNT);
        let second = context.bounded(NUMBER_COUNT);
        candidate.swap_number_genes(first, second)?;
        mutated = true;
    }

    if context.uniform() < config.operator_mutation_rate {
        let first = context.bounded(OPERATOR_COUNT);
        let second = context.bounded(OPERATOR_COUNT);
        candidate.swap_operator_genes(first, second)?;
        mutated = true;
    }

    if !mutated {
        return Ok(MutationOutcome::Untouched);
    }

    if context.fitness_of(&candidate) < context.fitness_of(&population[index]) {
        population[index] = candidate;
        Ok(MutationOutcome::Accepted)
    } else {
        Ok(MutationOutcome::Rejected)
    }
}

/// Mutation pass over every individual. Failed attempts are logged and
/// skipped; their count is returned.
pub fn mutate(
    population: &mut [Chromosome],
    config: &EvolutionConfig,
    context: &mut NumberContext,
) -> usize {
    let mut failures = 0;
    for index in 0..population.len() {
        if let Err(e) = mutate_at(population, index, config, context) {
            warn!("Mutation skipped for individual {}: {}", index, e);
            failures += 1;
        }
    }
    failures
}

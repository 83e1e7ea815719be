//! Chromosome representation for the numbers game
//!
//! A chromosome is two permutations:
//! - `number_order` decides in which order the six input numbers are consumed
//! - `operator_order` decides which of the five operator slots is applied
//!   between each consecutive pair
//!
//! Both are kept as valid permutations at every point the engine observes
//! them. Fitness is not stored here: it is a pure function of the genes and
//! the run's `NumberContext`, which memoises it.
//!
//! # Example
//!
//! ```
//! use birislem::Chromosome;
//!
//! let chromosome = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 4, 1, 2, 3]).unwrap();
//! assert_eq!(chromosome.number_gene(2), Some(2));
//! ```
use crate::engines::generation::repair::{first_violation, is_permutation};
use crate::error::{Result, SolverError};
use crate::types::{NUMBER_COUNT, OPERATOR_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome {
    number_order: [usize; NUMBER_COUNT],
    operator_order: [usize; OPERATOR_COUNT],
}

impl Chromosome {
    /// Build a chromosome, rejecting anything that is not a pair of permutations
    pub fn new(
        number_order: [usize; NUMBER_COUNT],
        operator_order: [usize; OPERATOR_COUNT],
    ) -> Result<Self> {
        check_permutation(&number_order)?;
        check_permutation(&operator_order)?;
        Ok(Self {
            number_order,
            operator_order,
        })
    }

    pub fn number_order(&self) -> &[usize; NUMBER_COUNT] {
        &self.number_order
    }

    pub fn operator_order(&self) -> &[usize; OPERATOR_COUNT] {
        &self.operator_order
    }

    pub fn number_gene(&self, index: usize) -> Option<usize> {
        self.number_order.get(index).copied()
    }

    pub fn operator_gene(&self, index: usize) -> Option<usize> {
        self.operator_order.get(index).copied()
    }

    /// Swap two number genes. Equal indices are a no-op.
    pub fn swap_number_genes(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, NUMBER_COUNT)?;
        check_index(second, NUMBER_COUNT)?;
        self.number_order.swap(first, second);
        Ok(())
    }

    /// Swap two operator genes. Equal indices are a no-op.
    pub fn swap_operator_genes(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, OPERATOR_COUNT)?;
        check_index(second, OPERATOR_COUNT)?;
        self.operator_order.swap(first, second);
        Ok(())
    }

    /// Replace the number genes with an already repaired sequence
    pub fn set_number_order(&mut self, genes: [usize; NUMBER_COUNT]) -> Result<()> {
        check_permutation(&genes)?;
        self.number_order = genes;
        Ok(())
    }

    /// Replace the operator genes with an already repaired sequence
    pub fn set_operator_order(&mut self, genes: [usize; OPERATOR_COUNT]) -> Result<()> {
        check_permutation(&genes)?;
        self.operator_order = genes;
        Ok(())
    }

    /// Independent copy for speculative changes
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn is_valid(&self) -> bool {
        is_permutation(&self.number_order) && is_permutation(&self.operator_order)
    }

    /// Pack both permutations into one integer, used as the fitness cache key
    pub fn key(&self) -> u64 {
        let numbers = self
            .number_order
            .iter()
            .fold(0u64, |acc, &gene| acc * NUMBER_COUNT as u64 + gene as u64);
        self.operator_order
            .iter()
            .fold(numbers, |acc, &gene| acc * OPERATOR_COUNT as u64 + gene as u64)
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SolverError::InvalidGene { gene: index, len });
    }
    Ok(())
}

fn check_permutation(genes: &[usize]) -> Result<()> {
    match first_violation(genes) {
        Some(gene) => Err(SolverError::InvalidGene {
            gene,
            len: genes.len(),
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |genes: &[usize]| {
            genes
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "[{}] [{}]",
            join(&self.number_order),
            join(&self.operator_order)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_duplicates() {
        assert!(Chromosome::new([0, 0, 2, 3, 4, 5], [0, 1, 2, 3, 4]).is_err());
        assert!(Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 9]).is_err());
    }

    #[test]
    fn test_swap_keeps_permutation() {
        let mut chromosome = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        chromosome.swap_number_genes(0, 5).unwrap();
        chromosome.swap_operator_genes(3, 3).unwrap();
        assert_eq!(chromosome.number_order(), &[5, 1, 2, 3, 4, 0]);
        assert_eq!(chromosome.operator_order(), &[0, 1, 2, 3, 4]);
        assert!(chromosome.is_valid());
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut chromosome = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        assert!(chromosome.swap_operator_genes(0, 5).is_err());
        assert_eq!(chromosome.operator_order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        let mut copy = original.duplicate();
        copy.swap_number_genes(1, 2).unwrap();
        assert_ne!(original, copy);
        assert_eq!(original.number_gene(1), Some(1));
    }

    #[test]
    fn test_setters_reject_invalid_sequences() {
        let mut chromosome = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        let err = chromosome.set_number_order([1, 1, 3, 5, 5, 4]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidGene { gene: 1, len: 6 }));
        assert!(chromosome.set_operator_order([0, 1, 2, 3, 7]).is_err());
        assert_eq!(chromosome.number_order(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(chromosome.operator_order(), &[0, 1, 2, 3, 4]);

        chromosome.set_number_order([1, 0, 3, 5, 2, 4]).unwrap();
        chromosome.set_operator_order([4, 3, 2, 1, 0]).unwrap();
        assert_eq!(chromosome.number_order(), &[1, 0, 3, 5, 2, 4]);
        assert_eq!(chromosome.operator_order(), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_keys_are_distinct() {
        let a = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        let b = Chromosome::new([0, 1, 2, 3, 4, 5], [0, 1, 2, 4, 3]).unwrap();
        let c = Chromosome::new([1, 0, 2, 3, 4, 5], [0, 1, 2, 3, 4]).unwrap();
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }
}

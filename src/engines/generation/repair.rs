use crate::error::{Result, SolverError};

/// Restore a gene sequence over `0..genes.len()` to a permutation.
///
/// Scans left to right. A value already seen is replaced with the
/// smallest value not yet used. Recombination of two permutations can
/// only produce duplicates, never values outside the range; an
/// out-of-range value is reported as an error and leaves the prefix
/// before it already rewritten.
///
/// ```text
/// recombined: 1 1 3 5 5 4
/// repaired:   1 0 3 5 2 4
/// ```
pub fn repair(genes: &mut [usize]) -> Result<()> {
    let len = genes.len();
    let mut used = vec![false; len];

    for i in 0..len {
        let gene = genes[i];
        if gene >= len {
            return Err(SolverError::InvalidGene { gene, len });
        }

        if used[gene] {
            genes[i] = smallest_unused(&used).ok_or(SolverError::InvalidGene { gene, len })?;
        }

        used[genes[i]] = true;
    }

    Ok(())
}

fn smallest_unused(used: &[bool]) -> Option<usize> {
    used.iter().position(|&taken| !taken)
}

/// True when `genes` holds every value of `0..genes.len()` exactly once
pub fn is_permutation(genes: &[usize]) -> bool {
    first_violation(genes).is_none()
}

/// First gene that is out of range or repeats an earlier one
pub fn first_violation(genes: &[usize]) -> Option<usize> {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        match seen.get_mut(gene) {
            Some(slot) if !*slot => *slot = true,
            _ => return Some(gene),
        }
    }
    None
}

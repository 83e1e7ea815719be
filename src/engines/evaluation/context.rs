use crate::{
    data::FitnessCache,
    engines::evaluation::expression::Expression,
    engines::generation::chromosome::Chromosome,
    error::{EvaluationError, Result, SolverError},
    types::{NUMBER_COUNT, OPERATOR_COUNT, UNREACHABLE_FITNESS},
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Every distinct chromosome fits: 6! * 5!
const CACHE_CAPACITY: usize = 720 * 120;

/// Per-run state shared by every fitness query and random draw: the input
/// numbers, the target, the random source and the fitness memo.
pub struct NumberContext {
    numbers: [i64; NUMBER_COUNT],
    target: i64,
    rng: StdRng,
    cache: FitnessCache,
}

impl NumberContext {
    pub fn new(numbers: [i64; NUMBER_COUNT], target: i64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            numbers,
            target,
            rng,
            cache: FitnessCache::new(CACHE_CAPACITY),
        }
    }

    /// Build from an arbitrary slice, rejecting anything but six numbers
    pub fn from_slice(numbers: &[i64], target: i64, seed: Option<u64>) -> Result<Self> {
        let numbers: [i64; NUMBER_COUNT] = numbers.try_into().map_err(|_| {
            SolverError::InvalidPuzzle(format!(
                "expected {} numbers, got {}",
                NUMBER_COUNT,
                numbers.len()
            ))
        })?;
        Ok(Self::new(numbers, target, seed))
    }

    /// Start a new run with different inputs. The random stream continues.
    pub fn reset(&mut self, numbers: [i64; NUMBER_COUNT], target: i64) {
        self.numbers = numbers;
        self.target = target;
        self.cache.clear();
    }

    pub fn numbers(&self) -> &[i64; NUMBER_COUNT] {
        &self.numbers
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn random_number_order(&mut self) -> [usize; NUMBER_COUNT] {
        let mut genes = [0, 1, 2, 3, 4, 5];
        genes.shuffle(&mut self.rng);
        genes
    }

    pub fn random_operator_order(&mut self) -> [usize; OPERATOR_COUNT] {
        let mut genes = [0, 1, 2, 3, 4];
        genes.shuffle(&mut self.rng);
        genes
    }

    /// Uniform float in `[0, 1)`
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform integer in `[0, bound)`
    pub fn bounded(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    pub fn decode(&self, chromosome: &Chromosome) -> Expression {
        Expression::decode(chromosome, &self.numbers)
    }

    pub fn evaluate(&self, chromosome: &Chromosome) -> std::result::Result<i64, EvaluationError> {
        self.decode(chromosome).evaluate()
    }

    /// Distance between the decoded expression and the target, or
    /// `UNREACHABLE_FITNESS` when the expression has no integer value
    pub fn fitness_of(&self, chromosome: &Chromosome) -> u64 {
        self.cache.get_or_insert_with(chromosome.key(), || {
            self.decode(chromosome)
                .distance(self.target)
                .unwrap_or(UNREACHABLE_FITNESS)
        })
    }

    pub fn is_exact(&self, chromosome: &Chromosome) -> bool {
        self.fitness_of(chromosome) == 0
    }

    /// Expression text with its value, e.g. `((((1 + 2) - 3) * 4) / 5) + 6 = 6`
    pub fn describe(&self, chromosome: &Chromosome) -> String {
        let expression = self.decode(chromosome);
        match expression.evaluate() {
            Ok(value) => format!("{} = {}", expression, value),
            Err(e) => format!("{} ({})", expression, e),
        }
    }

    pub fn cached_evaluations(&self) -> usize {
        self.cache.len()
    }
}

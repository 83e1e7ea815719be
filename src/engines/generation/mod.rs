pub mod chromosome;
pub mod evolution_engine;
pub mod operators;
pub mod progress;
pub mod repair;

pub use chromosome::Chromosome;
pub use evolution_engine::{
    solve, solve_with, EvolutionEngine, GenerationReport, NoProgress, ProgressCallback,
    SolveOutcome,
};
pub use operators::MutationOutcome;
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
pub use repair::{is_permutation, repair};

use anyhow::{bail, Context};
use birislem::config::{ConfigManager, PuzzleConfig};
use birislem::engines::generation::{solve_with, ConsoleProgressCallback};
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "birislem")]
#[command(author, version, about = "Numbers game solver using a genetic algorithm")]
struct Args {
    /// The six numbers; may be omitted when the config file has a [puzzle] section
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,
    /// Target value
    #[arg(short, long, allow_negative_numbers = true)]
    target: Option<i64>,
    /// TOML config file with [evolution] and [puzzle] sections
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Individuals per generation
    #[arg(long)]
    population: Option<usize>,
    /// Generation cap
    #[arg(long)]
    generations: Option<usize>,
    /// Print progress every N generations, 0 is silent
    #[arg(long, default_value_t = 0)]
    progress: usize,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let manager = ConfigManager::new();
    if let Some(path) = &args.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    manager.update(|config| {
        if let Some(seed) = args.seed {
            config.evolution.seed = Some(seed);
        }
        if let Some(population) = args.population {
            config.evolution.population_size = population;
        }
        if let Some(generations) = args.generations {
            config.evolution.generations = generations;
        }
    })?;
    let config = manager.get();

    let puzzle = match (args.numbers.is_empty(), args.target, config.puzzle) {
        (false, Some(target), _) => PuzzleConfig {
            numbers: args.numbers,
            target,
        },
        (true, target, Some(puzzle)) => PuzzleConfig {
            target: target.unwrap_or(puzzle.target),
            ..puzzle
        },
        (false, None, _) => bail!("--target is required with numbers"),
        (true, _, None) => bail!("no numbers given and no [puzzle] section in the config"),
    };

    let outcome = solve_with(
        &puzzle.numbers,
        puzzle.target,
        config.evolution,
        ConsoleProgressCallback::new(args.progress),
    )?;

    if args.json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{}", outcome);
    }

    Ok(())
}

use birislem::config::{ConfigManager, ConfigSection, EvolutionConfig, PuzzleConfig};
use birislem::SolverError;
use std::sync::{Mutex, MutexGuard};

// Every load reads the process environment, so loads and env edits take turns
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn test_load_from_toml() {
    let _env = env_guard();
    let manager = ConfigManager::new();
    manager
        .load_from_str(
            r#"
            [evolution]
            population_size = 250
            crossover_rate = 0.75
            seed = 42

            [puzzle]
            numbers = [1, 2, 3, 4, 5, 6]
            target = 21
            "#,
        )
        .unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 250);
    assert_eq!(config.evolution.crossover_rate, 0.75);
    assert_eq!(config.evolution.seed, Some(42));
    // Unset fields keep their defaults
    assert_eq!(config.evolution.operator_mutation_rate, 0.1);
    assert_eq!(
        config.puzzle,
        Some(PuzzleConfig {
            numbers: vec![1, 2, 3, 4, 5, 6],
            target: 21
        })
    );
}

#[test]
fn test_invalid_file_keeps_previous_config() {
    let _env = env_guard();
    let manager = ConfigManager::new();
    let result = manager.load_from_str(
        r#"
        [puzzle]
        numbers = [1, 2, 3]
        target = 6
        "#,
    );

    assert!(result.is_err());
    assert_eq!(manager.get().puzzle, None);
}

#[test]
fn test_update_validates() {
    let manager = ConfigManager::new();
    assert!(manager
        .update(|config| config.evolution.number_mutation_rate = -0.5)
        .is_err());
    assert_eq!(manager.get().evolution.number_mutation_rate, 0.2);

    manager
        .update(|config| config.evolution.population_size = 64)
        .unwrap();
    assert_eq!(manager.get().evolution.population_size, 64);
}

#[test]
fn test_save_and_reload() {
    let _env = env_guard();
    let path = std::env::temp_dir().join(format!("birislem-config-{}.toml", std::process::id()));

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.evolution.seed = Some(7);
            config.evolution.population_size = 300;
            config.puzzle = Some(PuzzleConfig::default());
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let config = reloaded.get();
    assert_eq!(config.evolution.seed, Some(7));
    assert_eq!(config.evolution.population_size, 300);
    assert_eq!(config.puzzle, Some(PuzzleConfig::default()));
}

#[test]
fn test_missing_file_is_io_error() {
    let _env = env_guard();
    let manager = ConfigManager::new();
    let err = manager
        .load_from_file("/nonexistent/birislem.toml")
        .unwrap_err();
    match err {
        SolverError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an IO error, got {other:?}"),
    }
    assert!(manager.get().puzzle.is_none());
}

#[test]
fn test_environment_overrides_file() {
    let _env = env_guard();
    std::env::set_var("BIRISLEM__EVOLUTION__GENERATIONS", "77");
    let manager = ConfigManager::new();
    let result = manager.load_from_str("[evolution]\ngenerations = 5\n");
    std::env::remove_var("BIRISLEM__EVOLUTION__GENERATIONS");

    result.unwrap();
    assert_eq!(manager.get().evolution.generations, 77);

    // Removed again before the lock is released
    let fresh = ConfigManager::new();
    fresh.load_from_str("[evolution]\ngenerations = 5\n").unwrap();
    assert_eq!(fresh.get().evolution.generations, 5);
}

#[test]
fn test_section_names() {
    assert_eq!(EvolutionConfig::section_name(), "evolution");
    assert_eq!(PuzzleConfig::section_name(), "puzzle");
    assert!(PuzzleConfig::default().validate().is_ok());
}

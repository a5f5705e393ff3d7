// Builds a model file from training data.
// Run with: cargo run --bin train -- <training.json> [config.json] [models.bin]
use declensor_core::config::TrainingConfig;
use declensor_core::logging::init_tracing;
use declensor_core::persistence::save_to_disk;
use declensor_core::training::{TrainingEngine, TrainingSet};
use declensor_core::Result;
use std::env;
use std::path::Path;
use tracing::{error, info};

const MODELS_PATH: &str = "models.bin";

fn main() {
    init_tracing("info");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(training_path) = args.first() else {
        eprintln!("usage: train <training.json> [config.json] [{}]", MODELS_PATH);
        std::process::exit(2);
    };
    let config_path = args.get(1);
    let models_path = args.get(2).map(String::as_str).unwrap_or(MODELS_PATH);

    if let Err(e) = run(training_path, config_path.map(String::as_str), models_path) {
        error!("training failed: {}", e);
        std::process::exit(1);
    }
}

fn run(training_path: &str, config_path: Option<&str>, models_path: &str) -> Result<()> {
    let config = match config_path {
        Some(path) => TrainingConfig::load(Path::new(path))?,
        None => TrainingConfig::ukrainian(),
    };
    let set = TrainingSet::load(Path::new(training_path))?;

    let models = TrainingEngine::new(config).train(&set)?;
    save_to_disk(&models, Path::new(models_path))?;

    info!(path = models_path, models = models.len(), "model file written");
    Ok(())
}

use std::path::{Path, PathBuf};

use symptom_synth::GenerationConfig;

use crate::GenerateArgs;

/// Output directory used when neither the flag nor the environment names one.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Environment override for the output directory.
pub const OUT_DIR_ENV: &str = "SYMPTOM_OUT_DIR";

/// Everything one `generate` run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub generation: GenerationConfig,
    pub out_dir: PathBuf,
}

/// Read a JSON generation config from disk, migrating older versions.
pub fn load_config(path: &Path) -> eyre::Result<GenerationConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let config = GenerationConfig::from_json(json)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Layer flag overrides on top of the file config (or defaults).
pub fn resolve(args: &GenerateArgs) -> eyre::Result<RunConfig> {
    let mut generation = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(seed) = args.seed {
        generation.seed = seed;
    }
    if let Some(rows) = args.rows {
        generation.row_count = rows;
    }
    if let Some(min_valid) = args.min_valid {
        generation.min_valid_rows = min_valid;
    }
    if let Some(noise) = args.noise {
        generation.noise_probability = noise;
    }
    if let Some(date) = args.date {
        generation.created_at = Some(date);
    }
    generation.validate()?;

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| std::env::var_os(OUT_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    Ok(RunConfig {
        generation,
        out_dir,
    })
}

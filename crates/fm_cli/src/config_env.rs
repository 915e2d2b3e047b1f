use anyhow::{Context, Result};
use fm_core::SimConfig;
use std::path::Path;
use std::{env, fs};

pub const SIM_CONFIG_PATH_ENV: &str = "FM_SIM_CONFIG_PATH";

/// Config from `--config`, else `FM_SIM_CONFIG_PATH`, else defaults.
pub fn load_sim_config(cli_path: Option<&Path>) -> Result<SimConfig> {
    let from_env = env::var(SIM_CONFIG_PATH_ENV).ok();
    let path = match (cli_path, from_env.as_deref().map(str::trim)) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if !path.is_empty() => path.to_string(),
        _ => {
            log::debug!("no simulation config given, using defaults");
            return Ok(SimConfig::default());
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read simulation config '{path}'"))?;
    let config = SimConfig::from_json(&content)
        .with_context(|| format!("failed to parse simulation config '{path}'"))?;
    config
        .validate()
        .with_context(|| format!("invalid simulation config '{path}'"))?;
    log::info!("loaded simulation config from {}", path);
    Ok(config)
}

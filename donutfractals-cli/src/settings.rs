//! Settings file loading.
//!
//! A missing or malformed file is not fatal: the defaults are used and a
//! warning says why.

use donutfractals_core::EngineConfig;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub fn load_config(path: &Path) -> EngineConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Config file {} not found, using defaults", path.display());
            return EngineConfig::default();
        }
        Err(e) => {
            log::warn!("Could not read {}: {e}, using defaults", path.display());
            return EngineConfig::default();
        }
    };

    match EngineConfig::from_json_str(&text) {
        Ok(config) => {
            log::info!("Configuration loaded from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Error parsing {}: {e}, using defaults", path.display());
            EngineConfig::default()
        }
    }
}

pub fn save_config(config: &EngineConfig, path: &Path) -> std::io::Result<()> {
    let json = config
        .to_json_pretty()
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)?;
    log::info!("Configuration saved to {}", path.display());
    Ok(())
}

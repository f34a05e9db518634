//! Subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod scan;

use std::path::{Path, PathBuf};

use cardscan_core::CardscanConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardscan")
        .join("config.json")
}

/// Load the configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardscanConfig> {
    if let Some(path) = config_path {
        return Ok(CardscanConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        Ok(CardscanConfig::from_file(&path)?)
    } else {
        Ok(CardscanConfig::default())
    }
}

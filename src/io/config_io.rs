use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config.toml: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read `<data-dir>/config.toml`. A missing file yields the defaults;
/// a malformed file is an error (a silent fallback would mask typos).
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

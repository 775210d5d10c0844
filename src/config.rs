//! Runtime configuration.
//!
//! Loaded from `<config dir>/tapcalc/config.toml`. A missing file yields
//! the defaults; a malformed file is a startup error.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configurable behavior of the calculator.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// After equals, disable every key except clear until the next clear.
    pub lock_after_equals: bool,
}

impl Config {
    /// The default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tapcalc").join("config.toml"))
    }

    /// Load the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.lock_after_equals);
    }

    #[test]
    fn test_parse_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.lock_after_equals);
    }

    #[test]
    fn test_parse_lock_flag() {
        let config: Config = toml::from_str("lock_after_equals = true").unwrap();
        assert!(config.lock_after_equals);
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let config: Config = toml::from_str("does_not_exist = 1").unwrap();
        assert!(!config.lock_after_equals);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/tapcalc/config.toml")).unwrap();
        assert!(!config.lock_after_equals);
    }
}

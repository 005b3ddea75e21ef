//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `BARBIERE_*` environment variables
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Where the tenant state file lives (unless `--data` overrides it).
    pub data_file: PathBuf,
    /// Default currency for new services.
    pub currency: String,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file (if any), then
    /// environment variables.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("data_file", Self::default_data_path().to_string_lossy().as_ref())?
            .set_default("currency", "EUR")?;

        let file = config_file.cloned().or_else(Self::default_config_path);
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(config::Environment::with_prefix("BARBIERE"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Platform data location for the tenant file, falling back to the
    /// working directory.
    fn default_data_path() -> PathBuf {
        directories::ProjectDirs::from("it", "barbiere", "barbiere")
            .map(|dirs| dirs.data_dir().join("tenant.json"))
            .unwrap_or_else(|| PathBuf::from("barbiere.json"))
    }

    /// Platform config location, `None` when no home directory exists.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("it", "barbiere", "barbiere")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_present() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.currency.len(), 3);
        assert!(!cfg.data_file.as_os_str().is_empty());
    }

    #[test]
    fn missing_config_file_is_fine() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_ok());
    }
}

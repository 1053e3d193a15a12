//! Configuration for WikiMap tools.
//!
//! Configuration is read from a TOML file. Resolution order for the path:
//!
//! 1. An explicit path (e.g. `--config`)
//! 2. The `WIKIMAP_CONFIG` environment variable
//! 3. `<config dir>/wikimap/config.toml` (via `dirs::config_dir`)
//!
//! A missing file is not an error; defaults are used instead.
//!
//! ```toml
//! log_level = "info"
//!
//! [cleaner]
//! skip_prefixes = ["File:", "Image:"]
//! ```

use crate::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "WIKIMAP_CONFIG";

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "wikimap";

/// Field-name cleaner settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Literal prefixes whose fields are passed through untouched.
    pub skip_prefixes: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            skip_prefixes: vec!["File:".to_string()],
        }
    }
}

/// Top-level WikiMap configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikimapConfig {
    /// Default log level when neither `-v` nor `RUST_LOG` is given.
    pub log_level: String,
    /// Cleaner settings.
    pub cleaner: CleanerConfig,
}

impl Default for WikimapConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            cleaner: CleanerConfig::default(),
        }
    }
}

impl WikimapConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path from an explicit path, the environment,
    /// or the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(PathBuf::from(p));
        }
        if let Ok(p) = std::env::var(CONFIG_ENV_VAR)
            && !p.is_empty()
        {
            return Some(PathBuf::from(p));
        }
        Self::default_config_path()
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                debug!("No config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WikimapConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.cleaner.skip_prefixes, vec!["File:"]);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = WikimapConfig::from_toml_str("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cleaner, CleanerConfig::default());
    }

    #[test]
    fn test_from_toml_cleaner_section() {
        let toml = "[cleaner]\nskip_prefixes = [\"File:\", \"Image:\"]\n";
        let config = WikimapConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.cleaner.skip_prefixes, vec!["File:", "Image:"]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = WikimapConfig::from_toml_str("log_level = [1, 2");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = WikimapConfig::default();
        let toml = config.to_toml_string().unwrap();
        let parsed = WikimapConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_explicit_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = WikimapConfig::load(path.to_str()).unwrap();
        assert_eq!(config, WikimapConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"info\"\n").unwrap();

        let config = WikimapConfig::load(path.to_str()).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file_bad_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cleaner = 5\n").unwrap();

        let err = WikimapConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_resolve_explicit_wins() {
        let path = WikimapConfig::resolve_config_path(Some("/etc/wikimap.toml"));
        assert_eq!(path, Some(PathBuf::from("/etc/wikimap.toml")));
    }
}

//! Configuration file loading for esquisse.
//!
//! Reads `esquisse.config.json` from the current working directory, or the path
//! given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::TranspileOptions;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "esquisse.config.json";

/// Top-level esquisse configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EsquisseConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Transpile options, at the top level of the file.
    #[serde(flatten)]
    pub options: TranspileOptions,
}

/// Errors reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the configuration file.
///
/// `path` wins when given; otherwise `esquisse.config.json` in `dir` (or CWD if
/// None). A missing file yields defaults. A file that can't be read or parsed is
/// reported as a warning and defaults are used.
pub fn load_config(path: Option<&Path>, dir: Option<&Path>) -> EsquisseConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
            .join(CONFIG_FILE_NAME),
    };

    if !config_path.exists() {
        if path.is_some() {
            tracing::warn!("Config file {} not found, using defaults", config_path.display());
        }
        return EsquisseConfig::default();
    }

    match read_config(&config_path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            EsquisseConfig::default()
        }
    }
}

fn read_config(config_path: &Path) -> Result<EsquisseConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("esquisse-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let config = load_config(None, Some(&dir));
        assert_eq!(config.options, TranspileOptions::default());
    }

    #[test]
    fn test_loads_from_dir() {
        let dir = scratch_dir("dir");
        std::fs::write(
            dir.join(CONFIG_FILE_NAME),
            r#"{ "$schema": "./schema.json", "package": "h", "binding": "page" }"#,
        )
        .unwrap();

        let config = load_config(None, Some(&dir));
        assert_eq!(config.schema.as_deref(), Some("./schema.json"));
        assert_eq!(config.options.package.as_deref(), Some("h"));
        assert_eq!(config.options.binding, "page");
        assert!(!config.options.children_only);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = scratch_dir("explicit");
        let path = dir.join("custom.json");
        std::fs::write(&path, r#"{ "childrenOnly": true }"#).unwrap();

        let config = load_config(Some(&path), Some(&dir));
        assert!(config.options.children_only);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = scratch_dir("malformed");
        std::fs::write(dir.join(CONFIG_FILE_NAME), "{ package: ").unwrap();

        let config = load_config(None, Some(&dir));
        assert_eq!(config.options, TranspileOptions::default());
    }

    #[test]
    fn test_read_errors_are_typed() {
        let dir = scratch_dir("typed");
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path: p, .. } if p == &path));
        assert!(err.to_string().starts_with("Failed to parse "));

        let missing = dir.join("absent.json");
        assert!(matches!(read_config(&missing), Err(ConfigError::Read { .. })));
    }
}

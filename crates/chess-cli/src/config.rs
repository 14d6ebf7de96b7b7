//! Configuration file loading for the chess CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Defaults applied when a command-line flag is not given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Position used when `--fen` is absent.
    #[serde(default = "default_fen")]
    pub fen: String,
    /// Depth used by `perft` when `--depth` is absent.
    #[serde(default = "default_perft_depth")]
    pub perft_depth: u32,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_fen() -> String {
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w".to_string()
}

fn default_perft_depth() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            fen: default_fen(),
            perft_depth: default_perft_depth(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `chess.toml` in the
    /// current directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses a configuration from TOML text, filling in missing keys.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.perft_depth, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_file_overrides_keys() {
        let config = CliConfig::from_toml(
            r#"
perft_depth = 5
fen = "8/8/8/8/4R3/8/8/8 w"
"#,
        )
        .unwrap();
        assert_eq!(config.perft_depth, 5);
        assert_eq!(config.fen, "8/8/8/8/4R3/8/8/8 w");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = CliConfig::from_toml("perft_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_explicit_path_is_read_error() {
        let err = CliConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("exist.toml"));
    }
}

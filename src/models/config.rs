//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::uri;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Resolution behavior settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Batch input handling settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if let Some(base) = &self.resolver.default_base {
            if !uri::is_absolute(base) {
                return Err(AppError::validation(
                    "resolver.default_base must be an absolute URI",
                ));
            }
        }
        if let Some(prefix) = &self.batch.comment_prefix {
            if prefix.is_empty() {
                return Err(AppError::validation(
                    "batch.comment_prefix must not be empty",
                ));
            }
        }
        Ok(())
    }
}

/// Resolution behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Base URI used when none is given on the command line
    #[serde(default)]
    pub default_base: Option<String>,
}

/// Batch input handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Skip lines that are empty or whitespace-only
    #[serde(default = "defaults::skip_blank_lines")]
    pub skip_blank_lines: bool,

    /// Skip lines starting with this prefix. Off by default: a line like
    /// "#section" is a valid fragment-only reference.
    #[serde(default)]
    pub comment_prefix: Option<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: defaults::skip_blank_lines(),
            comment_prefix: None,
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    pub fn skip_blank_lines() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.resolver.default_base.is_none());
        assert!(config.batch.skip_blank_lines);
        assert!(config.batch.comment_prefix.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [resolver]
            default_base = "http://a/b/c/d;p?q"

            [batch]
            skip_blank_lines = false
            comment_prefix = ";"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.resolver.default_base.as_deref(),
            Some("http://a/b/c/d;p?q")
        );
        assert!(!config.batch.skip_blank_lines);
        assert_eq!(config.batch.comment_prefix.as_deref(), Some(";"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_default_base() {
        let config = Config {
            resolver: ResolverConfig {
                default_base: Some("b/c/d".to_string()),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_comment_prefix() {
        let config = Config {
            batch: BatchConfig {
                comment_prefix: Some(String::new()),
                ..BatchConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

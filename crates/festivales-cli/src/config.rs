use anyhow::{Context, Result};
use confyg::{env, Confygery};
use festivales_core::OnMalformed;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for festivales.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (FEST_* prefix)
/// 2. Config file (~/.config/festivales/config.toml)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Festival catalog to load instead of the bundled one.
    ///
    /// Can be set via:
    /// - ENV: FEST_DATA_FILE
    /// - Config: data_file = "/path/to/festivales.csv"
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Skip malformed catalog lines with a warning instead of aborting.
    ///
    /// Can be set via:
    /// - ENV: FEST_SKIP_MALFORMED
    /// - Config: skip_malformed = true
    /// - Default: false
    #[serde(default)]
    pub skip_malformed: bool,

    /// Default log filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            skip_malformed: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/festivales/config.toml
    /// Reads environment variables with FEST_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("fest");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Loader policy for malformed lines.
    pub fn on_malformed(&self) -> OnMalformed {
        if self.skip_malformed {
            OnMalformed::Skip
        } else {
            OnMalformed::Abort
        }
    }
}

fn default_log_level() -> String {
    String::from("warn")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/festivales/config.toml
/// - macOS: ~/Library/Application Support/festivales/config.toml
/// - Windows: %APPDATA%\festivales\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("festivales")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_file.is_none());
        assert!(!config.skip_malformed);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.on_malformed(), OnMalformed::Abort);
    }

    #[test]
    fn test_skip_malformed_policy() {
        let config = Config {
            skip_malformed: true,
            ..Config::default()
        };
        assert_eq!(config.on_malformed(), OnMalformed::Skip);
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("festivales/config.toml"));
    }
}

use markdown_lockstep_engine::sync::{SyncAccuracy, SyncMode, SyncOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration, one TOML file.
///
/// ```toml
/// mode = "semantic"
/// accuracy = "balanced"
/// cooldown-ms = 100
/// header-offset = 80.0
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub mode: SyncMode,
    pub accuracy: SyncAccuracy,
    /// Re-entrancy guard window in milliseconds.
    pub cooldown_ms: u64,
    /// Fixed preview chrome allowance in pixels.
    pub header_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        let options = SyncOptions::default();
        Self {
            mode: options.mode,
            accuracy: options.accuracy,
            cooldown_ms: options.cooldown.as_millis() as u64,
            header_offset: options.header_offset,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-lockstep");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The engine options this configuration describes.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            mode: self.mode,
            accuracy: self.accuracy,
            cooldown: Duration::from_millis(self.cooldown_ms),
            header_offset: self.header_offset,
        }
    }
}

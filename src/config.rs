use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_copy_ack_ms() -> u64 {
    1000
}

/// UI preferences. Form values are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event polling timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long the copy acknowledgement icon stays visible, in milliseconds
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            copy_ack_ms: default_copy_ack_ms(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".pseudocode-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Load the config, writing a default file on first run
    pub fn load_or_init() -> Config {
        if let Some(config) = Self::load() {
            config
        } else {
            let config = Config::default();
            if let Err(e) = config.save() {
                tracing::warn!("could not write default config: {}", e);
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.copy_ack_ms, 1000);
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            tick_rate_ms: 50,
            copy_ack_ms: 2000,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tick_rate_ms, 50);
        assert_eq!(back.copy_ack_ms, 2000);
    }
}

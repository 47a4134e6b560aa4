use crate::error::{CardzError, Result};
use crate::model::{CARD_SIZES, DEFAULT_SIZE};
use crate::store::persistence::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cardz, stored in `config.json` next to the card data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    /// Key the card collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Size given to new cards when none is asked for
    #[serde(default = "default_size")]
    pub default_size: u32,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_size: default_size(),
        }
    }
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardzError::Io)?;
        let config: CardzConfig =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardzError::Serialization)?;
        fs::write(config_path, content).map_err(CardzError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["storage-key", "default-size"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "default-size" => Some(self.default_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(format!("Invalid storage key: {}", value));
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            "default-size" => {
                let size: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Size must be a number, got {}", value))?;
                if !CARD_SIZES.contains(&size) {
                    return Err(format!("Size must be one of {:?}", CARD_SIZES));
                }
                self.default_size = size;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

use crate::common::types::EmitterConfig;
use crate::utils::error::{EmitterError, Result};
use std::fs;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EmitterConfig> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| EmitterError::Config("File has no extension".to_string()))?;

        let config_str = fs::read_to_string(path_ref)?;

        let config: EmitterConfig = match extension {
            "json" => serde_json::from_str(&config_str)?,
            "yaml" | "yml" => serde_yaml::from_str(&config_str)?,
            _ => {
                return Err(EmitterError::Config(format!(
                    "Unsupported file extension: {}",
                    extension
                )))
            }
        };

        Self::validate_config(&config)?;

        log::debug!(
            "Loaded emitter config '{}' from {}",
            config.label(),
            path_ref.display()
        );

        Ok(config)
    }

    fn validate_config(config: &EmitterConfig) -> Result<()> {
        if let Some(name) = &config.name {
            if name.trim().is_empty() {
                return Err(EmitterError::Config(
                    "Emitter name must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

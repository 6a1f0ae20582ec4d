use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed world and tempo settings. Read once at startup, never mutated
/// while the simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifeConfig {
    pub world_width: u32,  // Canvas width in pixels.
    pub world_height: u32, // Canvas height in pixels.
    pub cell_size: u32,    // Side of one square cell in pixels.
    pub target_fps: u64,
    pub initial_period: u32, // Frames between steps while playing.
    pub tempo_step: u32,     // Period change per tempo key press.
    pub save_path: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            world_width: 800,
            world_height: 800,
            cell_size: 20,
            target_fps: 60,
            initial_period: 15,
            tempo_step: 5,
            save_path: PathBuf::from("board.life"),
        }
    }
}

impl LifeConfig {
    pub fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let config_serialized = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        let config: Self = serde_json::from_slice(&config_serialized)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".to_owned()));
        }

        if self.cell_size > self.world_width || self.cell_size > self.world_height {
            return Err(ConfigError::Invalid(format!(
                "cell_size {} does not fit a {}x{} world",
                self.cell_size, self.world_width, self.world_height
            )));
        }

        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be positive".to_owned()));
        }

        Ok(())
    }

    pub fn columns(&self) -> usize {
        (self.world_width / self.cell_size) as usize
    }

    pub fn rows(&self) -> usize {
        (self.world_height / self.cell_size) as usize
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't deserialize config")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world_is_forty_by_forty() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 40);
        assert_eq!(config.rows(), 40);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: LifeConfig =
            serde_json::from_str(r#"{ "world_width": 400, "cell_size": 10 }"#).unwrap();
        assert_eq!(config.columns(), 40);
        assert_eq!(config.rows(), 80);
        assert_eq!(config.initial_period, 15);
    }

    #[test]
    fn rejects_zero_and_oversized_cells() {
        let zero = LifeConfig {
            cell_size: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let oversized = LifeConfig {
            cell_size: 1000,
            ..LifeConfig::default()
        };
        assert!(matches!(oversized.validate(), Err(ConfigError::Invalid(_))));
    }
}

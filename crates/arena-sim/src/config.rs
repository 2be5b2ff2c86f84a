//! Simulation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use arena_core::constants::*;

/// Configuration for starting a new simulation. Missing JSON fields fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    /// Countdown before the first wave of a session (seconds).
    pub first_wave_delay_secs: f64,
    /// Inclusive range the session's max-wave count is drawn from.
    pub min_waves: u32,
    pub max_waves: u32,
    /// Host loop rate (Hz). The engine itself takes measured deltas.
    pub tick_rate: u32,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("World must be larger than the spawn margin on both axes, got {width}x{height}")]
    InvalidWorldSize { width: f64, height: f64 },

    #[error("Invalid wave range {min}..={max}")]
    InvalidWaveRange { min: u32, max: u32 },

    #[error("Tick rate must be positive")]
    InvalidTickRate,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            first_wave_delay_secs: FIRST_WAVE_DELAY_SECS,
            min_waves: MIN_WAVES,
            max_waves: MAX_WAVES,
            tick_rate: TICK_RATE,
        }
    }
}

impl SimConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        if let Err(err) = config.validate() {
            warn!(%err, "rejected simulation config");
            return Err(err);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_extent = 2.0 * SPAWN_EDGE_MARGIN;
        let sized = |v: f64| v.is_finite() && v > min_extent;
        if !sized(self.world_width) || !sized(self.world_height) {
            return Err(ConfigError::InvalidWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.min_waves == 0 || self.min_waves > self.max_waves {
            return Err(ConfigError::InvalidWaveRange {
                min: self.min_waves,
                max: self.max_waves,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }
}

//! World configuration.
//!
//! ```
//! use tussle_core::config::WorldConfig;
//!
//! let config = WorldConfig::from_json(r#"{ "width": 640, "height": 480, "seed": 7 }"#).unwrap();
//! assert_eq!(config.width, 640);
//! assert_eq!(config.roam_interval_ms, 2000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default world width.
pub const DEFAULT_WORLD_WIDTH: i32 = 1920;
/// Default world height.
pub const DEFAULT_WORLD_HEIGHT: i32 = 1080;
/// Default fixed tick delta in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 16;
/// Default interval between roaming axis picks.
pub const DEFAULT_ROAM_INTERVAL_MS: u32 = 2000;
/// Default velocity cap for roaming acceleration.
pub const DEFAULT_ROAM_SPEED_CAP: f32 = 2.0;

/// Simulation parameters.
///
/// Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width; boxes are clamped to `[0, width]`
    pub width: i32,
    /// World height; boxes are clamped to `[0, height]`
    pub height: i32,
    /// Fixed time advanced per tick
    pub tick_ms: u32,
    /// Time between roaming axis picks
    pub roam_interval_ms: u32,
    /// Velocity magnitude cap for roaming agents
    pub roam_speed_cap: f32,
    /// Seed for the simulation RNG
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            roam_interval_ms: DEFAULT_ROAM_INTERVAL_MS,
            roam_speed_cap: DEFAULT_ROAM_SPEED_CAP,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Default configuration with the given world bounds.
    #[must_use]
    pub fn with_bounds(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the other
    /// variants when [`validate`](Self::validate) fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that bounds and intervals are usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "tick_ms" });
        }
        if self.roam_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "roam_interval_ms",
            });
        }
        if !self.roam_speed_cap.is_finite() || self.roam_speed_cap < 0.0 {
            return Err(ConfigError::InvalidSpeedCap(self.roam_speed_cap));
        }
        Ok(())
    }
}

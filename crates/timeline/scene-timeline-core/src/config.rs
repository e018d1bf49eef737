//! Engine configuration: defaults for new timelines and editing conveniences.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name given to timelines created without one.
    pub default_name: String,
    /// Duration (seconds) of newly created timelines.
    pub default_duration: f64,
    pub default_playback_rate: f64,
    pub default_loop: bool,

    /// Snap inserted keyframe times to multiples of `grid_size`.
    pub snap_to_grid: bool,
    /// Grid spacing in seconds.
    pub grid_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_name: "New Animation".to_string(),
            default_duration: 10.0,
            default_playback_rate: 1.0,
            default_loop: false,
            snap_to_grid: false,
            grid_size: 1.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), TimelineError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.default_duration) {
            return Err(TimelineError::InvalidConfig {
                reason: format!("default_duration must be > 0, got {}", self.default_duration),
            });
        }
        if !positive(self.default_playback_rate) {
            return Err(TimelineError::InvalidConfig {
                reason: format!(
                    "default_playback_rate must be > 0, got {}",
                    self.default_playback_rate
                ),
            });
        }
        if self.snap_to_grid && !positive(self.grid_size) {
            return Err(TimelineError::InvalidConfig {
                reason: format!("grid_size must be > 0 when snapping, got {}", self.grid_size),
            });
        }
        Ok(())
    }
}

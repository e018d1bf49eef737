//! Output contracts from the engine.
//!
//! Each `Engine::update` produces the playback position, the sampled scene
//! and the discrete events raised while applying inputs and ticking. The
//! host applies the scene to its own objects.

use serde::{Deserialize, Serialize};

use crate::playback::PlaybackStatus;
use crate::scene::SceneState;

/// Discrete signals emitted while applying commands and ticking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum EngineEvent {
    PlaybackStarted { time: f64 },
    PlaybackPaused { time: f64 },
    PlaybackStopped,
    /// Reached the end without looping; playback paused at `time`.
    PlaybackEnded { time: f64 },
    /// Wrapped past the end; `time` is the position after wrapping.
    PlaybackLooped { time: f64 },
    TimeChanged { old_time: f64, new_time: f64 },
    /// A command was rejected.
    Error { message: String },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outputs {
    pub time: f64,
    pub status: PlaybackStatus,
    #[serde(default)]
    pub scene: SceneState,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            time: 0.0,
            status: PlaybackStatus::Stopped,
            scene: SceneState::new(),
            events: Vec::new(),
        }
    }
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.scene.clear();
        self.events.clear();
    }
}

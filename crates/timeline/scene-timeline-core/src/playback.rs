//! Playback controller: a small state machine advanced once per frame.
//!
//! States: Stopped (time reset to 0), Paused (time held), Playing (time
//! advances by `delta * rate`). Every transition consumes `self` and
//! returns the next value so callers can publish it as a new snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{check_rate, TimelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    Stopped,
    Paused,
    Playing,
}

impl PlaybackStatus {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Paused => "paused",
            Self::Playing => "playing",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; nothing changed.
    Idle,
    /// Time moved forward inside the timeline.
    Advanced,
    /// Time passed the end and wrapped around.
    Looped,
    /// Time reached the end without looping; playback is now paused.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playback {
    pub status: PlaybackStatus,
    pub current_time: f64,
    pub playback_rate: f64,
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current_time: 0.0,
            playback_rate: 1.0,
            looping: false,
        }
    }
}

/// Clamp a time into `[0, duration]`. NaN maps to 0.
#[inline]
pub fn clamp_time(time: f64, duration: f64) -> f64 {
    if time.is_nan() {
        return 0.0;
    }
    time.clamp(0.0, duration)
}

impl Playback {
    /// Stopped player at time 0.
    pub fn new(playback_rate: f64, looping: bool) -> Result<Self, TimelineError> {
        Ok(Self {
            playback_rate: check_rate(playback_rate)?,
            looping,
            ..Self::default()
        })
    }

    /// Paused/Stopped → Playing, keeping the current time.
    #[inline]
    pub fn play(self) -> Self {
        Self {
            status: PlaybackStatus::Playing,
            ..self
        }
    }

    /// Playing → Paused at the current time. Other states are unchanged.
    #[inline]
    pub fn pause(self) -> Self {
        if self.status.is_playing() {
            Self {
                status: PlaybackStatus::Paused,
                ..self
            }
        } else {
            self
        }
    }

    /// Any state → Stopped at time 0.
    #[inline]
    pub fn stop(self) -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current_time: 0.0,
            ..self
        }
    }

    /// Move to `time` clamped into `[0, duration]`; status is untouched.
    #[inline]
    pub fn seek(self, time: f64, duration: f64) -> Self {
        Self {
            current_time: clamp_time(time, duration),
            ..self
        }
    }

    pub fn with_rate(self, playback_rate: f64) -> Result<Self, TimelineError> {
        Ok(Self {
            playback_rate: check_rate(playback_rate)?,
            ..self
        })
    }

    #[inline]
    pub fn with_loop(self, looping: bool) -> Self {
        Self { looping, ..self }
    }

    /// Advance by `delta_seconds * playback_rate` if playing.
    ///
    /// Past the end the time either wraps (`looping`) or clamps to
    /// `duration` and the player pauses there. Negative or non-finite
    /// deltas count as zero.
    pub fn tick(self, delta_seconds: f64, duration: f64) -> (Self, Tick) {
        if !self.status.is_playing() {
            return (self, Tick::Idle);
        }
        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        let new_time = self.current_time + delta * self.playback_rate;

        if new_time < duration {
            let next = Self {
                current_time: new_time.max(0.0),
                ..self
            };
            return (next, Tick::Advanced);
        }

        if self.looping {
            let next = Self {
                current_time: new_time % duration,
                ..self
            };
            (next, Tick::Looped)
        } else {
            let next = Self {
                status: PlaybackStatus::Paused,
                current_time: duration,
                ..self
            };
            (next, Tick::Ended)
        }
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        check_rate(self.playback_rate).map(|_| ())
    }
}

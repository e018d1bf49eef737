//! Error types for the timeline engine.
//!
//! Nearly every operation is total (unknown ids are no-ops, times clamp).
//! What remains here are caller mistakes that should fail fast.

use crate::ids::TrackId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimelineError {
    /// Timeline duration must be strictly positive and finite.
    #[error("Invalid timeline duration: {duration} (must be > 0)")]
    InvalidDuration { duration: f64 },

    /// Playback rate must be strictly positive and finite.
    #[error("Invalid playback rate: {rate} (must be > 0)")]
    InvalidPlaybackRate { rate: f64 },

    /// A track's keyframes are not in non-decreasing time order.
    #[error("Keyframes of track {track_id} are not time-ordered")]
    UnsortedKeyframes { track_id: TrackId },

    /// A string could not be parsed as an id of the given kind.
    #[error("Invalid {kind} id: {id}")]
    InvalidId { kind: &'static str, id: String },

    /// Configuration values out of range.
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl TimelineError {
    /// Short category name for log lines.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } | Self::InvalidPlaybackRate { .. } => "playback",
            Self::UnsortedKeyframes { .. } => "track",
            Self::InvalidId { .. } => "id",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

/// Reject non-positive or non-finite durations.
pub(crate) fn check_duration(duration: f64) -> Result<f64, TimelineError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(TimelineError::InvalidDuration { duration })
    }
}

/// Reject non-positive or non-finite playback rates.
pub(crate) fn check_rate(rate: f64) -> Result<f64, TimelineError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(TimelineError::InvalidPlaybackRate { rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_rate_checks() {
        assert_eq!(check_duration(10.0), Ok(10.0));
        assert!(check_duration(0.0).is_err());
        assert!(check_duration(f64::NAN).is_err());
        assert_eq!(check_rate(0.5), Ok(0.5));
        assert_eq!(
            check_rate(-1.0),
            Err(TimelineError::InvalidPlaybackRate { rate: -1.0 })
        );
    }

    #[test]
    fn error_categories() {
        let e = TimelineError::UnsortedKeyframes {
            track_id: TrackId::new(),
        };
        assert_eq!(e.category(), "track");
        assert_eq!(
            TimelineError::InvalidDuration { duration: 0.0 }.category(),
            "playback"
        );
    }
}

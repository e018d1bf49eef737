//! Track evaluation.
//!
//! Model:
//! - A track's keyframes are sorted by time (ties keep insertion order).
//! - Before the first keyframe and after the last one the boundary value is
//!   held; there is no extrapolation.
//! - In between, the bracketing pair is found and handed to `interpolate`.
//! - When several keyframes share a time, the last inserted one wins.
//!
//! API:
//! - evaluate(&Track, t) where t is in seconds.

use crate::data::{Keyframe, Track};
use crate::interp::{interpolate, InterpolationResult};

/// Where a query time falls relative to a sorted keyframe list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// Hold the keyframe at this index.
    Hold(usize),
    /// Interpolate between these two indices (left time < right time).
    Between(usize, usize),
}

/// Index of the last keyframe sharing `keyframes[i].time`.
#[inline]
fn tie_winner(keyframes: &[Keyframe], i: usize) -> usize {
    let time = keyframes[i].time;
    i + keyframes[i..].partition_point(|k| k.time <= time) - 1
}

/// Binary search for the bracket containing `t`. `keyframes` must be
/// non-empty and time-ordered.
pub fn find_bracket(keyframes: &[Keyframe], t: f64) -> Bracket {
    let n = keyframes.len();
    // Number of keyframes at or before t.
    let upper = keyframes.partition_point(|k| k.time <= t);
    if upper == 0 {
        Bracket::Hold(tie_winner(keyframes, 0))
    } else if upper == n {
        Bracket::Hold(n - 1)
    } else {
        Bracket::Between(upper - 1, tie_winner(keyframes, upper))
    }
}

/// Linear-scan counterpart of [`find_bracket`]; same result for every input.
pub fn find_bracket_linear(keyframes: &[Keyframe], t: f64) -> Bracket {
    let n = keyframes.len();
    if t.is_nan() || t < keyframes[0].time {
        return Bracket::Hold(tie_winner(keyframes, 0));
    }
    if t >= keyframes[n - 1].time {
        return Bracket::Hold(n - 1);
    }
    for i in 0..(n - 1) {
        if keyframes[i].time <= t && t < keyframes[i + 1].time {
            return Bracket::Between(i, tie_winner(keyframes, i + 1));
        }
    }
    Bracket::Hold(n - 1)
}

/// Evaluate a track at time `t` (seconds). Empty tracks yield `None`.
///
/// # Panics
///
/// In debug builds, panics if the track's keyframes are not time-ordered.
/// Edits made through the timeline keep them sorted; hand-built tracks can
/// be checked with [`Track::validate`].
pub fn evaluate(track: &Track, t: f64) -> Option<InterpolationResult> {
    let keyframes = &track.keyframes;
    if keyframes.is_empty() {
        return None;
    }
    debug_assert!(
        track.is_time_ordered(),
        "keyframes of track {} are not time-ordered",
        track.id
    );

    let result = match find_bracket(keyframes, t) {
        Bracket::Hold(i) => {
            let k = &keyframes[i];
            InterpolationResult::exact(k.value.clone(), k.id)
        }
        Bracket::Between(left, right) => interpolate(&keyframes[left], &keyframes[right], t),
    };
    Some(result)
}

impl Track {
    /// See [`evaluate`].
    #[inline]
    pub fn value_at(&self, t: f64) -> Option<InterpolationResult> {
        evaluate(self, t)
    }
}

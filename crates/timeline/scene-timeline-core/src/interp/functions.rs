//! Interpolation helpers:
//! - lerp_f64 / lerp_vec2 (component-wise)
//! - step_value (hold-left until halfway, then right)
//! - blend_value (dispatch on value kinds)
//! - interpolate (keyframe pair → InterpolationResult, with snap-to-exact)

use crate::data::Keyframe;
use crate::interp::InterpolationResult;
use crate::value::{KeyframeValue, Vec2};

/// Queries within this many seconds of a keyframe return its authored value.
pub const SNAP_EPSILON: f64 = 0.001;

/// Eased progress at which categorical values switch to the right keyframe.
const STEP_THRESHOLD: f64 = 0.5;

#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2 {
        x: lerp_f64(a.x, b.x, t),
        y: lerp_f64(a.y, b.y, t),
    }
}

/// Step interpolation: left value below the threshold, right value from it on.
#[inline]
pub fn step_value(a: &KeyframeValue, b: &KeyframeValue, eased: f64) -> KeyframeValue {
    if eased < STEP_THRESHOLD {
        a.clone()
    } else {
        b.clone()
    }
}

/// Blend two values at eased progress `eased`.
/// Mismatched kinds fall back to step behavior, like text.
pub fn blend_value(a: &KeyframeValue, b: &KeyframeValue, eased: f64) -> KeyframeValue {
    match (a, b) {
        (KeyframeValue::Scalar(va), KeyframeValue::Scalar(vb)) => {
            KeyframeValue::Scalar(lerp_f64(*va, *vb, eased))
        }
        (KeyframeValue::Vec2(va), KeyframeValue::Vec2(vb)) => {
            KeyframeValue::Vec2(lerp_vec2(*va, *vb, eased))
        }
        _ => step_value(a, b, eased),
    }
}

/// Value between keyframes `a` and `b` at time `t` (expects `a.time <= t <= b.time`).
///
/// The easing of `a` shapes the segment. A zero-length segment resolves to
/// `b`. Within [`SNAP_EPSILON`] of either end the raw keyframe value is
/// returned so landing on a keyframe reproduces it exactly.
pub fn interpolate(a: &Keyframe, b: &Keyframe, t: f64) -> InterpolationResult {
    let span = b.time - a.time;
    if span == 0.0 {
        return InterpolationResult::exact(b.value.clone(), b.id);
    }

    if (t - a.time).abs() < SNAP_EPSILON {
        return InterpolationResult::exact(a.value.clone(), a.id);
    }
    if (t - b.time).abs() < SNAP_EPSILON {
        return InterpolationResult::exact(b.value.clone(), b.id);
    }

    let progress = (t - a.time) / span;
    let eased = a.easing_or_default().apply(progress);
    InterpolationResult::blended(blend_value(&a.value, &b.value, eased))
}

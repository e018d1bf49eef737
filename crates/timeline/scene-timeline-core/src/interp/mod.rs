//! Interpolation between two keyframes.
//!
//! Scalars and vectors blend linearly on eased progress; strings switch
//! from the left to the right value once eased progress reaches 0.5.

pub mod easing;
pub mod functions;

use serde::{Deserialize, Serialize};

use crate::ids::KeyframeId;
use crate::value::KeyframeValue;

pub use easing::Easing;
pub use functions::{interpolate, SNAP_EPSILON};

/// Value at a point in time, flagged when it is an authored keyframe value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationResult {
    pub value: KeyframeValue,
    pub is_keyframe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframe_id: Option<KeyframeId>,
}

impl InterpolationResult {
    #[inline]
    pub fn exact(value: KeyframeValue, keyframe_id: KeyframeId) -> Self {
        Self {
            value,
            is_keyframe: true,
            keyframe_id: Some(keyframe_id),
        }
    }

    #[inline]
    pub fn blended(value: KeyframeValue) -> Self {
        Self {
            value,
            is_keyframe: false,
            keyframe_id: None,
        }
    }
}

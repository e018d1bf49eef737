//! Keyframe value kinds.
//!
//! Values use the host's JSON shapes: a bare number, an `{x, y}` object,
//! or an opaque string token (colors). Strings never blend.

use serde::{Deserialize, Serialize};

/// 2D vector for position and scale values.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Vec2,
    Text,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum KeyframeValue {
    Scalar(f64),
    Vec2(Vec2),
    /// Step-only categorical value (e.g. "#ff0000", "transparent").
    Text(String),
}

impl KeyframeValue {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            KeyframeValue::Scalar(_) => ValueKind::Scalar,
            KeyframeValue::Vec2(_) => ValueKind::Vec2,
            KeyframeValue::Text(_) => ValueKind::Text,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            KeyframeValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            KeyframeValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            KeyframeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for KeyframeValue {
    fn from(v: f64) -> Self {
        KeyframeValue::Scalar(v)
    }
}

impl From<Vec2> for KeyframeValue {
    fn from(v: Vec2) -> Self {
        KeyframeValue::Vec2(v)
    }
}

impl From<&str> for KeyframeValue {
    fn from(s: &str) -> Self {
        KeyframeValue::Text(s.to_string())
    }
}

impl From<String> for KeyframeValue {
    fn from(s: String) -> Self {
        KeyframeValue::Text(s)
    }
}

//! Timeline data model: timeline → tracks → keyframes.
//!
//! Tracks are held behind `Arc` so a cloned timeline snapshot shares every
//! track it did not touch. Edits live in `edit.rs` and always build a new
//! value instead of mutating a published one.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{check_duration, TimelineError};
use crate::ids::{KeyframeId, ObjectId, TimelineId, TrackId};
use crate::interp::Easing;
use crate::playback::Playback;
use crate::value::{KeyframeValue, ValueKind};

/// What a track animates. Closed set; determines the expected value shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Position,
    Rotation,
    Scale,
    Opacity,
    StrokeColor,
    #[serde(rename = "backgroundColor", alias = "fillColor")]
    FillColor,
    StrokeWidth,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Position,
        Property::Rotation,
        Property::Scale,
        Property::Opacity,
        Property::StrokeColor,
        Property::FillColor,
        Property::StrokeWidth,
    ];

    #[inline]
    pub fn expected_kind(&self) -> ValueKind {
        match self {
            Property::Position | Property::Scale => ValueKind::Vec2,
            Property::Rotation | Property::Opacity | Property::StrokeWidth => ValueKind::Scalar,
            Property::StrokeColor | Property::FillColor => ValueKind::Text,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Property::Position => "position",
            Property::Rotation => "rotation",
            Property::Scale => "scale",
            Property::Opacity => "opacity",
            Property::StrokeColor => "strokeColor",
            Property::FillColor => "backgroundColor",
            Property::StrokeWidth => "strokeWidth",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An authored value of one property of one object at one time (seconds).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub id: KeyframeId,
    pub time: f64,
    pub object_id: ObjectId,
    pub property: Property,
    pub value: KeyframeValue,
    /// Easing of the segment starting at this keyframe. `None` means linear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Keyframe {
    #[inline]
    pub fn easing_or_default(&self) -> Easing {
        self.easing.unwrap_or_default()
    }
}

/// A keyframe that has not been inserted yet. Object and property come
/// from the track it is added to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyframeDraft {
    pub time: f64,
    pub value: KeyframeValue,
    #[serde(default)]
    pub easing: Option<Easing>,
}

impl KeyframeDraft {
    pub fn new(time: f64, value: impl Into<KeyframeValue>) -> Self {
        Self {
            time,
            value: value.into(),
            easing: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Partial keyframe update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyframePatch {
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub value: Option<KeyframeValue>,
    #[serde(default)]
    pub easing: Option<Easing>,
}

impl KeyframePatch {
    pub fn time(time: f64) -> Self {
        Self {
            time: Some(time),
            ..Default::default()
        }
    }

    pub fn value(value: impl Into<KeyframeValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn easing(easing: Easing) -> Self {
        Self {
            easing: Some(easing),
            ..Default::default()
        }
    }
}

/// Keyframes for a single (object, property) pair, kept in time order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub object_id: ObjectId,
    pub property: Property,
    pub keyframes: Vec<Keyframe>,
    pub visible: bool,
    pub locked: bool,
}

impl Track {
    pub fn new(object_id: impl Into<ObjectId>, property: Property) -> Self {
        Self {
            id: TrackId::new(),
            object_id: object_id.into(),
            property,
            keyframes: Vec::new(),
            visible: true,
            locked: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    pub fn keyframe(&self, id: KeyframeId) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| k.id == id)
    }

    /// True when keyframe times are non-decreasing.
    pub fn is_time_ordered(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Times of the first and last keyframe.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.is_time_ordered() {
            Ok(())
        } else {
            Err(TimelineError::UnsortedKeyframes { track_id: self.id })
        }
    }

    /// Stable sort by time; equal times keep insertion order.
    pub(crate) fn sort_keyframes(&mut self) {
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
    }
}

/// The aggregate of all tracks plus playback state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub id: TimelineId,
    pub name: String,
    duration: f64,
    tracks: IndexMap<TrackId, Arc<Track>>,
    playback: Playback,
}

/// Duration of a timeline created without explicit configuration.
pub const DEFAULT_DURATION: f64 = 10.0;

impl Timeline {
    /// Empty 10s timeline, stopped at 0, no loop, rate 1.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            id: TimelineId::new(),
            name: name.into(),
            duration: DEFAULT_DURATION,
            tracks: IndexMap::new(),
            playback: Playback::default(),
        }
    }

    /// Empty timeline with the given duration and a stopped player at 0.
    pub fn new(
        name: impl Into<String>,
        duration: f64,
        playback: Playback,
    ) -> Result<Self, TimelineError> {
        let duration = check_duration(duration)?;
        Ok(Self {
            id: TimelineId::new(),
            name: name.into(),
            duration,
            tracks: IndexMap::new(),
            playback: playback.seek(playback.current_time, duration),
        })
    }

    /// Total length in seconds. Always > 0.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.playback.current_time
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playback.status.is_playing()
    }

    #[inline]
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id).map(Arc::as_ref)
    }

    /// Tracks in insertion order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values().map(Arc::as_ref)
    }

    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks_for_object<'a>(
        &'a self,
        object_id: &'a str,
    ) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks().filter(move |t| t.object_id.as_str() == object_id)
    }

    /// First track animating `property` of `object_id`.
    pub fn find_track(&self, object_id: &str, property: Property) -> Option<&Track> {
        self.tracks()
            .find(|t| t.object_id.as_str() == object_id && t.property == property)
    }

    /// Track owning the given keyframe.
    pub fn track_of_keyframe(&self, id: KeyframeId) -> Option<&Track> {
        self.tracks().find(|t| t.keyframe(id).is_some())
    }

    /// Check duration, playback rate and keyframe order of every track.
    pub fn validate(&self) -> Result<(), TimelineError> {
        check_duration(self.duration)?;
        self.playback.validate()?;
        self.tracks().try_for_each(Track::validate)
    }

    pub(crate) fn set_duration_unchecked(&mut self, duration: f64) {
        self.duration = duration;
        self.playback = self.playback.seek(self.playback.current_time, duration);
    }

    pub(crate) fn set_playback(&mut self, playback: Playback) {
        self.playback = playback;
    }

    pub(crate) fn tracks_mut(&mut self) -> &mut IndexMap<TrackId, Arc<Track>> {
        &mut self.tracks
    }
}

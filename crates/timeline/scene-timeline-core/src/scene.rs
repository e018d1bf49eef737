//! Scene sampling: resolve every animated object's state at one time.
//!
//! Each object starts from neutral defaults; each of its tracks that
//! evaluates to a value overwrites the matching property. Two tracks on
//! the same (object, property) are tolerated: the later track wins.

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::data::{Property, Timeline, Track};
use crate::ids::ObjectId;
use crate::sampling::evaluate;
use crate::value::{KeyframeValue, Vec2};

pub const DEFAULT_STROKE_COLOR: &str = "#000000";
pub const DEFAULT_FILL_COLOR: &str = "transparent";

/// Resolved visual state of one object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectAnimationState {
    pub object_id: ObjectId,
    pub position: Vec2,
    pub rotation: f64,
    pub scale: Vec2,
    pub opacity: f64,
    pub stroke_color: String,
    #[serde(rename = "backgroundColor")]
    pub fill_color: String,
    pub stroke_width: f64,
}

impl ObjectAnimationState {
    /// Neutral state: origin, unrotated, unit scale, opaque, black stroke,
    /// transparent fill, stroke width 1.
    pub fn neutral(object_id: ObjectId) -> Self {
        Self {
            object_id,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            opacity: 1.0,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            stroke_width: 1.0,
        }
    }

    /// Write `value` into `property`. A value whose shape does not fit the
    /// property leaves the state untouched and returns `false`.
    pub fn set(&mut self, property: Property, value: KeyframeValue) -> bool {
        match (property, value) {
            (Property::Position, KeyframeValue::Vec2(v)) => self.position = v,
            (Property::Scale, KeyframeValue::Vec2(v)) => self.scale = v,
            (Property::Rotation, KeyframeValue::Scalar(v)) => self.rotation = v,
            (Property::Opacity, KeyframeValue::Scalar(v)) => self.opacity = v,
            (Property::StrokeWidth, KeyframeValue::Scalar(v)) => self.stroke_width = v,
            (Property::StrokeColor, KeyframeValue::Text(s)) => self.stroke_color = s,
            (Property::FillColor, KeyframeValue::Text(s)) => self.fill_color = s,
            _ => return false,
        }
        true
    }
}

/// Sampled states keyed by object, in order of first appearance.
pub type SceneState = IndexMap<ObjectId, ObjectAnimationState>;

fn apply_track(state: &mut ObjectAnimationState, track: &Track, t: f64) {
    let Some(result) = evaluate(track, t) else {
        return;
    };
    let kind = result.value.kind();
    if !state.set(track.property, result.value) {
        warn!(
            "track {} holds {:?} values for {}; keeping previous value",
            track.id, kind, track.property
        );
    }
}

/// Resolve every object referenced by any track at time `t`.
///
/// Hidden and locked tracks are sampled like any other. An empty timeline
/// yields an empty map.
pub fn sample_all(timeline: &Timeline, t: f64) -> SceneState {
    let mut scene = SceneState::new();
    for track in timeline.tracks() {
        let state = scene
            .entry(track.object_id.clone())
            .or_insert_with(|| ObjectAnimationState::neutral(track.object_id.clone()));
        apply_track(state, track, t);
    }
    scene
}

/// State of a single object at time `t`, or `None` if no track references it.
pub fn sample_object(
    timeline: &Timeline,
    object_id: &str,
    t: f64,
) -> Option<ObjectAnimationState> {
    let mut state: Option<ObjectAnimationState> = None;
    for track in timeline.tracks_for_object(object_id) {
        let state = state
            .get_or_insert_with(|| ObjectAnimationState::neutral(track.object_id.clone()));
        apply_track(state, track, t);
    }
    state
}

impl Timeline {
    /// Scene at the timeline's current playback time.
    #[inline]
    pub fn sample_current(&self) -> SceneState {
        sample_all(self, self.current_time())
    }
}

/// Host-side object that can receive sampled state.
///
/// The engine never writes host fields itself; implementors decide how a
/// state maps onto their own representation.
pub trait AnimatedObject {
    fn object_id(&self) -> &str;
    fn apply_animation(&mut self, state: &ObjectAnimationState);
}

/// Hand each object its sampled state. Returns how many objects were updated;
/// objects with no tracks are left alone.
pub fn apply_scene<T: AnimatedObject>(objects: &mut [T], scene: &SceneState) -> usize {
    let mut applied = 0;
    for object in objects.iter_mut() {
        if let Some(state) = scene.get(object.object_id()) {
            object.apply_animation(state);
            applied += 1;
        }
    }
    applied
}

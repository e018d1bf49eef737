//! Scene Timeline Core (host-agnostic)
//!
//! Keyframe timelines for 2D scene objects: tracks of keyframes per
//! (object, property), eased interpolation between keyframes, whole-scene
//! sampling at a point in time, and a playback clock driven by host frames.
//! Timelines are immutable snapshots; every edit returns a new one that
//! shares untouched tracks with its predecessor.

pub mod config;
pub mod data;
pub mod edit;
pub mod engine;
pub mod error;
pub mod frame;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod outputs;
pub mod playback;
pub mod sampling;
pub mod scene;
pub mod time;
pub mod value;

// Re-exports for hosts
pub use config::Config;
pub use data::{
    Keyframe, KeyframeDraft, KeyframePatch, Property, Timeline, Track, DEFAULT_DURATION,
};
pub use edit::{
    add_keyframe, create_timeline, create_timeline_with, create_track, insert_keyframe,
    remove_keyframe, update_keyframe,
};
pub use engine::Engine;
pub use error::TimelineError;
pub use frame::{CancelToken, FrameDriver, FrameScheduler, ManualFrames};
pub use ids::{KeyframeId, ObjectId, TimelineId, TrackId};
pub use inputs::{Command, Inputs};
pub use interp::{interpolate, Easing, InterpolationResult, SNAP_EPSILON};
pub use outputs::{EngineEvent, Outputs};
pub use playback::{Playback, PlaybackStatus, Tick};
pub use sampling::evaluate;
pub use scene::{
    apply_scene, sample_all, sample_object, AnimatedObject, ObjectAnimationState, SceneState,
};
pub use time::{format_time, parse_time, snap_time};
pub use value::{KeyframeValue, ValueKind, Vec2};

pub type Result<T> = std::result::Result<T, TimelineError>;

//! Input contracts for the engine.
//!
//! The editing UI expresses every change as a `Command`. Hosts either apply
//! commands one at a time (`Engine::apply`) or batch them into `Inputs`
//! for the next `Engine::update`.

use serde::{Deserialize, Serialize};

use crate::data::{KeyframeDraft, KeyframePatch, Property, Timeline, Track};
use crate::ids::{KeyframeId, ObjectId, TrackId};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied in order before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Inputs {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    #[inline]
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Replace the whole timeline.
    SetTimeline {
        timeline: Timeline,
    },
    SetCurrentTime {
        time: f64,
    },
    Play,
    Pause,
    Stop,
    SetPlaybackRate {
        rate: f64,
    },
    SetLoop {
        looping: bool,
    },
    SetDuration {
        duration: f64,
    },
    Rename {
        name: String,
    },
    AddTrack {
        object_id: ObjectId,
        property: Property,
    },
    RemoveTrack {
        track_id: TrackId,
    },
    UpdateTrack {
        track: Track,
    },
    SetTrackVisible {
        track_id: TrackId,
        visible: bool,
    },
    SetTrackLocked {
        track_id: TrackId,
        locked: bool,
    },
    AddKeyframe {
        track_id: TrackId,
        keyframe: KeyframeDraft,
    },
    RemoveKeyframe {
        keyframe_id: KeyframeId,
    },
    UpdateKeyframe {
        keyframe_id: KeyframeId,
        patch: KeyframePatch,
    },
}

impl Command {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetTimeline { .. } => "set_timeline",
            Command::SetCurrentTime { .. } => "set_current_time",
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Stop => "stop",
            Command::SetPlaybackRate { .. } => "set_playback_rate",
            Command::SetLoop { .. } => "set_loop",
            Command::SetDuration { .. } => "set_duration",
            Command::Rename { .. } => "rename",
            Command::AddTrack { .. } => "add_track",
            Command::RemoveTrack { .. } => "remove_track",
            Command::UpdateTrack { .. } => "update_track",
            Command::SetTrackVisible { .. } => "set_track_visible",
            Command::SetTrackLocked { .. } => "set_track_locked",
            Command::AddKeyframe { .. } => "add_keyframe",
            Command::RemoveKeyframe { .. } => "remove_keyframe",
            Command::UpdateKeyframe { .. } => "update_keyframe",
        }
    }
}

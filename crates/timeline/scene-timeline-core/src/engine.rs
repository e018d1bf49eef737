//! Engine: owns the current timeline snapshot and the per-step outputs.
//!
//! The engine is the single writer. Every command builds a new `Timeline`
//! and swaps the `Arc`, so anything holding an older snapshot keeps a
//! complete, consistent view.
//!
//! Methods:
//! - new / with_timeline, apply (one command), update (commands → tick → sample)

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::config::Config;
use crate::data::{KeyframeDraft, KeyframePatch, Property, Timeline};
use crate::edit::create_timeline_with;
use crate::error::TimelineError;
use crate::ids::{KeyframeId, ObjectId, TrackId};
use crate::inputs::{Command, Inputs};
use crate::outputs::{EngineEvent, Outputs};
use crate::playback::{Playback, PlaybackStatus, Tick};
use crate::scene::{sample_all, SceneState};
use crate::time::snap_time;

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    current: Arc<Timeline>,
    /// Events raised by `apply` since the last `update`.
    pending: Vec<EngineEvent>,
    outputs: Outputs,
}

impl Engine {
    /// Engine with an empty timeline built from the config defaults.
    pub fn new(cfg: Config) -> Result<Self, TimelineError> {
        let timeline = create_timeline_with(&cfg)?;
        Ok(Self::from_parts(cfg, timeline))
    }

    /// Engine around an existing timeline. Both inputs are validated and the
    /// timeline is normalized (see [`Timeline::normalized`]).
    pub fn with_timeline(cfg: Config, timeline: Timeline) -> Result<Self, TimelineError> {
        cfg.validate()?;
        timeline.validate()?;
        Ok(Self::from_parts(cfg, timeline.normalized()))
    }

    fn from_parts(cfg: Config, timeline: Timeline) -> Self {
        let mut outputs = Outputs::default();
        outputs.time = timeline.current_time();
        outputs.status = timeline.playback().status;
        Self {
            cfg,
            current: Arc::new(timeline),
            pending: Vec::new(),
            outputs,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The current timeline snapshot. Cheap to clone and safe to hold
    /// across later edits.
    #[inline]
    pub fn snapshot(&self) -> Arc<Timeline> {
        Arc::clone(&self.current)
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.current
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current.current_time()
    }

    #[inline]
    pub fn status(&self) -> PlaybackStatus {
        self.current.playback().status
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.current.is_playing()
    }

    /// Outputs of the most recent `update`.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Sample the current snapshot at an arbitrary time.
    #[inline]
    pub fn sample_at(&self, t: f64) -> SceneState {
        sample_all(&self.current, t)
    }

    /// Add a track and return its id.
    pub fn add_track(&mut self, object_id: impl Into<ObjectId>, property: Property) -> TrackId {
        let (next, id) = self.current.add_track(object_id, property);
        self.publish(next);
        id
    }

    /// Add a keyframe and return its id, or `None` if the track is unknown.
    pub fn add_keyframe(&mut self, track_id: TrackId, draft: KeyframeDraft) -> Option<KeyframeId> {
        let draft = self.snap_draft(draft);
        let (next, id) = self.current.with_keyframe(track_id, draft);
        if id.is_some() {
            self.publish(next);
        }
        id
    }

    /// Apply one command. Rejected commands leave the timeline unchanged.
    pub fn apply(&mut self, command: Command) -> Result<(), TimelineError> {
        let name = command.name();
        let tl = &self.current;
        let next = match command {
            Command::SetTimeline { timeline } => {
                timeline.validate()?;
                timeline.normalized()
            }
            Command::SetCurrentTime { time } => tl.seek(time),
            Command::Play => tl.play(),
            Command::Pause => tl.pause(),
            Command::Stop => tl.stop(),
            Command::SetPlaybackRate { rate } => tl.with_playback_rate(rate)?,
            Command::SetLoop { looping } => tl.with_loop(looping),
            Command::SetDuration { duration } => tl.with_duration(duration)?,
            Command::Rename { name } => tl.with_name(name),
            Command::AddTrack {
                object_id,
                property,
            } => tl.add_track(object_id, property).0,
            Command::RemoveTrack { track_id } => tl.without_track(track_id),
            Command::UpdateTrack { track } => tl.with_track_updated(track),
            Command::SetTrackVisible { track_id, visible } => {
                tl.with_track_visible(track_id, visible)
            }
            Command::SetTrackLocked { track_id, locked } => tl.with_track_locked(track_id, locked),
            Command::AddKeyframe { track_id, keyframe } => {
                let draft = self.snap_draft(keyframe);
                tl.with_keyframe(track_id, draft).0
            }
            Command::RemoveKeyframe { keyframe_id } => tl.without_keyframe(keyframe_id),
            Command::UpdateKeyframe { keyframe_id, patch } => {
                let patch = self.snap_patch(patch);
                tl.with_keyframe_updated(keyframe_id, &patch)
            }
        };
        debug!("timeline {}: applied {}", next.id, name);
        self.publish(next);
        Ok(())
    }

    /// Step once: apply `inputs`, advance playback by `dt` seconds, sample
    /// the scene at the resulting time.
    pub fn update(&mut self, dt: f64, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        for command in inputs.commands {
            let name = command.name();
            if let Err(err) = self.apply(command) {
                warn!("rejected {} command: {} ({})", name, err, err.category());
                self.pending.push(EngineEvent::Error {
                    message: err.to_string(),
                });
            }
        }

        self.advance(dt);

        self.outputs.events.append(&mut self.pending);
        self.outputs.time = self.current.current_time();
        self.outputs.status = self.current.playback().status;
        self.outputs.scene = sample_all(&self.current, self.outputs.time);
        &self.outputs
    }

    fn advance(&mut self, dt: f64) {
        let (next, tick) = self.current.tick(dt);
        let time = next.current_time();
        match tick {
            Tick::Idle => return,
            Tick::Advanced => {}
            Tick::Looped => {
                debug!("timeline {}: looped to {:.3}s", next.id, time);
                self.pending.push(EngineEvent::PlaybackLooped { time });
            }
            Tick::Ended => {
                debug!("timeline {}: reached end at {:.3}s", next.id, time);
                self.pending.push(EngineEvent::PlaybackEnded { time });
            }
        }
        trace!("tick dt={dt:.4}s -> t={time:.4}s");
        self.current = Arc::new(next);
    }

    /// Swap in a new snapshot and record any playback transitions it implies.
    fn publish(&mut self, next: Timeline) {
        let before = *self.current.playback();
        let after = *next.playback();
        self.pending.extend(transition_events(&before, &after));
        self.current = Arc::new(next);
    }

    fn snap_draft(&self, mut draft: KeyframeDraft) -> KeyframeDraft {
        if self.cfg.snap_to_grid {
            draft.time = snap_time(draft.time, self.cfg.grid_size);
        }
        draft
    }

    fn snap_patch(&self, mut patch: KeyframePatch) -> KeyframePatch {
        if self.cfg.snap_to_grid {
            patch.time = patch.time.map(|t| snap_time(t, self.cfg.grid_size));
        }
        patch
    }
}

/// Events implied by a command-driven playback change (ticks report their own).
fn transition_events(before: &Playback, after: &Playback) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    if before.status != after.status {
        debug!(
            "playback {} -> {} at {:.3}s",
            before.status.name(),
            after.status.name(),
            after.current_time
        );
        events.push(match after.status {
            PlaybackStatus::Playing => EngineEvent::PlaybackStarted {
                time: after.current_time,
            },
            PlaybackStatus::Paused => EngineEvent::PlaybackPaused {
                time: after.current_time,
            },
            PlaybackStatus::Stopped => EngineEvent::PlaybackStopped,
        });
    }
    if before.current_time != after.current_time {
        events.push(EngineEvent::TimeChanged {
            old_time: before.current_time,
            new_time: after.current_time,
        });
    }
    events
}

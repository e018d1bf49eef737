//! Structural edits on tracks and timelines.
//!
//! Every function takes the current value by reference and returns a new
//! one. Timelines share unchanged tracks with their predecessor (`Arc`),
//! so an edit only copies the track it touches.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::Config;
use crate::data::{Keyframe, KeyframeDraft, KeyframePatch, Property, Timeline, Track};
use crate::error::{check_duration, TimelineError};
use crate::ids::{KeyframeId, ObjectId, TrackId};
use crate::playback::{Playback, Tick};

/// Keyframe times are seconds ≥ 0; anything else is pulled back to that range.
#[inline]
fn sanitize_time(time: f64) -> f64 {
    if time.is_finite() {
        time.max(0.0)
    } else {
        0.0
    }
}

fn warn_on_shape(track: &Track, value: &crate::value::KeyframeValue) {
    let expected = track.property.expected_kind();
    if value.kind() != expected {
        warn!(
            "keyframe value {:?} does not match {} track {} (expects {:?})",
            value.kind(),
            track.property,
            track.id,
            expected
        );
    }
}

/// Empty track for `(object_id, property)` with a fresh id, visible and unlocked.
pub fn create_track(object_id: impl Into<ObjectId>, property: Property) -> Track {
    Track::new(object_id, property)
}

/// Empty timeline: 10s, stopped at 0, no loop, rate 1.
pub fn create_timeline(name: impl Into<String>) -> Timeline {
    Timeline::with_defaults(name)
}

/// Empty timeline using the defaults from `cfg`.
pub fn create_timeline_with(cfg: &Config) -> Result<Timeline, TimelineError> {
    cfg.validate()?;
    let playback = Playback::new(cfg.default_playback_rate, cfg.default_loop)?;
    Timeline::new(cfg.default_name.clone(), cfg.default_duration, playback)
}

/// Insert a keyframe and return the new track together with the fresh id.
/// Duplicate times are allowed; the later insertion wins on evaluation.
pub fn insert_keyframe(track: &Track, draft: KeyframeDraft) -> (Track, KeyframeId) {
    warn_on_shape(track, &draft.value);
    let id = KeyframeId::new();
    let mut next = track.clone();
    next.keyframes.push(Keyframe {
        id,
        time: sanitize_time(draft.time),
        object_id: track.object_id.clone(),
        property: track.property,
        value: draft.value,
        easing: draft.easing,
    });
    next.sort_keyframes();
    (next, id)
}

/// Insert a keyframe (fresh id) keeping the track time-ordered.
pub fn add_keyframe(track: &Track, draft: KeyframeDraft) -> Track {
    insert_keyframe(track, draft).0
}

/// Drop the keyframe with `id`. Unknown ids leave the track unchanged.
pub fn remove_keyframe(track: &Track, id: KeyframeId) -> Track {
    let mut next = track.clone();
    next.keyframes.retain(|k| k.id != id);
    next
}

/// Merge `patch` into the keyframe with `id`.
///
/// The track is not re-sorted here; a time change may leave it out of
/// order. [`Timeline::with_keyframe_updated`] re-sorts and is the path to
/// use before evaluating.
pub fn update_keyframe(track: &Track, id: KeyframeId, patch: &KeyframePatch) -> Track {
    let mut next = track.clone();
    if let Some(k) = next.keyframes.iter_mut().find(|k| k.id == id) {
        apply_patch(k, patch);
    }
    next
}

fn apply_patch(keyframe: &mut Keyframe, patch: &KeyframePatch) {
    if let Some(time) = patch.time {
        keyframe.time = sanitize_time(time);
    }
    if let Some(value) = &patch.value {
        keyframe.value = value.clone();
    }
    if let Some(easing) = patch.easing {
        keyframe.easing = Some(easing);
    }
}

/// Bring a caller-supplied track in line with the track invariants:
/// keyframes inherit the track's object/property, times are clamped and sorted.
fn normalize_track(mut track: Track) -> Track {
    for k in &mut track.keyframes {
        if k.object_id != track.object_id || k.property != track.property {
            warn!(
                "keyframe {} re-homed to track {} ({}/{})",
                k.id, track.id, track.object_id, track.property
            );
            k.object_id = track.object_id.clone();
            k.property = track.property;
        }
        k.time = sanitize_time(k.time);
    }
    track.sort_keyframes();
    track
}

/// True when `track` would be changed by [`normalize_track`].
fn needs_normalizing(track: &Track) -> bool {
    !track.is_time_ordered()
        || track.keyframes.iter().any(|k| {
            k.object_id != track.object_id
                || k.property != track.property
                || sanitize_time(k.time) != k.time
        })
}

impl Timeline {
    /// Bring a timeline built outside the edit functions (e.g. deserialized
    /// from the host) in line with the model: current time clamped into
    /// `[0, duration]`, keyframes re-homed onto their track and sorted.
    /// Tracks that already conform stay shared.
    pub fn normalized(mut self) -> Timeline {
        let duration = self.duration();
        let playback = *self.playback();
        let clamped = playback.seek(playback.current_time, duration);
        if clamped.current_time != playback.current_time {
            warn!(
                "timeline {}: current time {} outside [0, {}]; clamped to {}",
                self.id, playback.current_time, duration, clamped.current_time
            );
        }
        self.set_playback(clamped);

        for track in self.tracks_mut().values_mut() {
            if needs_normalizing(track) {
                *track = Arc::new(normalize_track(Track::clone(track)));
            }
        }
        self
    }

    pub fn with_name(&self, name: impl Into<String>) -> Timeline {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Change the duration; the current time is clamped into the new range.
    pub fn with_duration(&self, duration: f64) -> Result<Timeline, TimelineError> {
        let duration = check_duration(duration)?;
        let mut next = self.clone();
        next.set_duration_unchecked(duration);
        Ok(next)
    }

    /// Insert `track`, or replace the track with the same id in place.
    pub fn with_track(&self, track: Track) -> Timeline {
        if self.track(track.id).is_none() {
            if let Some(existing) = self.find_track(track.object_id.as_str(), track.property) {
                warn!(
                    "track {} duplicates {} of object {} (track {}); last applied wins",
                    track.id, track.property, track.object_id, existing.id
                );
            }
        }
        let mut next = self.clone();
        let track = normalize_track(track);
        debug!("timeline {}: upsert track {}", self.id, track.id);
        next.tracks_mut().insert(track.id, Arc::new(track));
        next
    }

    /// Create an empty track for `(object_id, property)` and append it.
    pub fn add_track(
        &self,
        object_id: impl Into<ObjectId>,
        property: Property,
    ) -> (Timeline, TrackId) {
        let track = create_track(object_id, property);
        let id = track.id;
        (self.with_track(track), id)
    }

    /// Remove a track. Unknown ids are a no-op.
    pub fn without_track(&self, id: TrackId) -> Timeline {
        let mut next = self.clone();
        if next.tracks_mut().shift_remove(&id).is_some() {
            debug!("timeline {}: removed track {}", self.id, id);
        }
        next
    }

    /// Replace an existing track (matched by id). Unknown ids are a no-op.
    pub fn with_track_updated(&self, track: Track) -> Timeline {
        if self.track(track.id).is_none() {
            warn!("timeline {}: update for unknown track {}", self.id, track.id);
            return self.clone();
        }
        self.with_track(track)
    }

    pub fn with_track_visible(&self, id: TrackId, visible: bool) -> Timeline {
        self.map_track(id, |t| t.visible = visible)
    }

    pub fn with_track_locked(&self, id: TrackId, locked: bool) -> Timeline {
        self.map_track(id, |t| t.locked = locked)
    }

    /// Add a keyframe to a track. Returns the new id, or `None` when the
    /// track does not exist (the timeline is then unchanged).
    pub fn with_keyframe(
        &self,
        track_id: TrackId,
        draft: KeyframeDraft,
    ) -> (Timeline, Option<KeyframeId>) {
        let Some(track) = self.track(track_id) else {
            warn!("timeline {}: keyframe for unknown track {}", self.id, track_id);
            return (self.clone(), None);
        };
        let (track, id) = insert_keyframe(track, draft);
        let mut next = self.clone();
        next.tracks_mut().insert(track_id, Arc::new(track));
        (next, Some(id))
    }

    /// Remove a keyframe from whichever track holds it.
    pub fn without_keyframe(&self, id: KeyframeId) -> Timeline {
        match self.track_of_keyframe(id) {
            Some(track) => {
                let track_id = track.id;
                self.map_track(track_id, |t| t.keyframes.retain(|k| k.id != id))
            }
            None => self.clone(),
        }
    }

    /// Merge `patch` into a keyframe and re-sort its track.
    pub fn with_keyframe_updated(&self, id: KeyframeId, patch: &KeyframePatch) -> Timeline {
        let Some(track) = self.track_of_keyframe(id) else {
            return self.clone();
        };
        if let Some(value) = &patch.value {
            warn_on_shape(track, value);
        }
        let track_id = track.id;
        self.map_track(track_id, |t| {
            if let Some(k) = t.keyframes.iter_mut().find(|k| k.id == id) {
                apply_patch(k, patch);
            }
            t.sort_keyframes();
        })
    }

    pub fn play(&self) -> Timeline {
        self.map_playback(Playback::play)
    }

    pub fn pause(&self) -> Timeline {
        self.map_playback(Playback::pause)
    }

    pub fn stop(&self) -> Timeline {
        self.map_playback(Playback::stop)
    }

    /// Set the current time, clamped to `[0, duration]`.
    pub fn seek(&self, time: f64) -> Timeline {
        let duration = self.duration();
        self.map_playback(|p| p.seek(time, duration))
    }

    pub fn with_playback_rate(&self, rate: f64) -> Result<Timeline, TimelineError> {
        let playback = self.playback().with_rate(rate)?;
        Ok(self.map_playback(|_| playback))
    }

    pub fn with_loop(&self, looping: bool) -> Timeline {
        self.map_playback(|p| p.with_loop(looping))
    }

    /// Advance playback by one frame.
    pub fn tick(&self, delta_seconds: f64) -> (Timeline, Tick) {
        let (playback, tick) = self.playback().tick(delta_seconds, self.duration());
        (self.map_playback(|_| playback), tick)
    }

    fn map_playback(&self, f: impl FnOnce(Playback) -> Playback) -> Timeline {
        let mut next = self.clone();
        next.set_playback(f(*self.playback()));
        next
    }

    /// Copy-on-write edit of a single track.
    fn map_track(&self, id: TrackId, f: impl FnOnce(&mut Track)) -> Timeline {
        let mut next = self.clone();
        if let Some(track) = next.tracks_mut().get_mut(&id) {
            f(Arc::make_mut(track));
        }
        next
    }
}

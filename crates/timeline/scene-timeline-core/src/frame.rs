//! Frame driver: turns host frame callbacks into engine steps.
//!
//! The host owns the clock. It supplies a [`FrameScheduler`] (a display
//! refresh hook, a timer, or [`ManualFrames`] in tests) and forwards each
//! fired frame to [`FrameDriver::on_frame`] with a millisecond timestamp.
//! The driver keeps at most one frame requested while the engine is playing
//! and none otherwise.

use log::trace;

use crate::engine::Engine;
use crate::inputs::Inputs;
use crate::outputs::Outputs;

/// Handle for a requested frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CancelToken(pub u64);

/// Host hook that fires a callback at the next display refresh.
pub trait FrameScheduler {
    /// Request one frame. The host later calls `FrameDriver::on_frame`.
    fn request_frame(&mut self) -> CancelToken;
    /// Cancel a request that has not fired yet.
    fn cancel_frame(&mut self, token: CancelToken);
}

/// Scheduler that only records requests. Frames fire when the caller says so.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pending: Vec<CancelToken>,
    pub requested: usize,
    pub cancelled: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding (requested, not fired or cancelled) frames.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Consume the oldest pending request, as if the frame had fired.
    pub fn fire(&mut self) -> Option<CancelToken> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> CancelToken {
        self.next += 1;
        let token = CancelToken(self.next);
        self.pending.push(token);
        self.requested += 1;
        token
    }

    fn cancel_frame(&mut self, token: CancelToken) {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[derive(Debug)]
pub struct FrameDriver<S: FrameScheduler> {
    scheduler: S,
    requested: Option<CancelToken>,
    last_timestamp: Option<f64>,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            requested: None,
            last_timestamp: None,
        }
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.requested.is_some()
    }

    /// Reconcile the frame request with the engine's playing flag. Call after
    /// any command that may start or stop playback.
    pub fn sync(&mut self, engine: &Engine) {
        if engine.is_playing() {
            if self.requested.is_none() {
                self.requested = Some(self.scheduler.request_frame());
            }
        } else {
            if let Some(token) = self.requested.take() {
                self.scheduler.cancel_frame(token);
            }
            // Next start measures from its own first frame.
            self.last_timestamp = None;
        }
    }

    /// Handle a fired frame at `timestamp_ms`. The first frame after a start
    /// advances by zero; later frames by the elapsed time. Returns the
    /// engine outputs, or `None` if no frame was expected.
    pub fn on_frame<'e>(
        &mut self,
        timestamp_ms: f64,
        engine: &'e mut Engine,
    ) -> Option<&'e Outputs> {
        self.requested.take()?;
        let delta = match self.last_timestamp {
            Some(last) if timestamp_ms.is_finite() => ((timestamp_ms - last) / 1000.0).max(0.0),
            _ => 0.0,
        };
        if timestamp_ms.is_finite() {
            self.last_timestamp = Some(timestamp_ms);
        }
        trace!("frame at {timestamp_ms:.1}ms, delta {delta:.4}s");
        engine.update(delta, Inputs::default());
        self.sync(engine);
        Some(engine.outputs())
    }

    /// Cancel any outstanding request.
    pub fn shutdown(&mut self) {
        if let Some(token) = self.requested.take() {
            self.scheduler.cancel_frame(token);
        }
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_frames_track_requests_and_cancels() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        assert_ne!(a, b);
        frames.cancel_frame(a);
        frames.cancel_frame(a);
        assert_eq!(frames.pending(), 1);
        assert_eq!(frames.cancelled, 1);
        assert_eq!(frames.fire(), Some(b));
        assert_eq!(frames.fire(), None);
    }
}

use crate::types::view_model::ScrubberGeometry;

/// How far the skip buttons jump, in seconds.
pub const SKIP_SECONDS: f64 = 15.0;

/// Interval between simulated playback ticks, in seconds.
pub const TICK_INTERVAL: f64 = 0.1;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("total duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),
}

/// Where the scrubber currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Paused somewhere before the end, no drag in progress.
    Idle,
    /// Tick schedule active, playhead advancing.
    Playing,
    /// Handle held by the pointer; playback is suspended for the duration of the drag.
    Scrubbing,
    /// Playhead reached the end; play/pause is a no-op until the user seeks back.
    Finished,
}

/// Result of delivering one tick to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Playhead advanced, keep ticking.
    Advanced,
    /// Playhead reached the end of the clip; the caller must drop its schedule.
    Finished,
    /// Stale tick delivered while paused; the caller must drop its schedule.
    Stopped,
}

/// All mutable state behind the scrubber/timer control.
///
/// Three things compete to move the playhead: the periodic tick, drag
/// gestures on the handle, and the skip buttons. Every one of them goes
/// through a handler on this struct, and the handlers clamp, so
/// `0 <= current_second <= total_seconds` holds at all times. Rendering
/// reads derived values only (see `view_model`).
#[derive(Debug, Clone)]
pub struct PlaybackState {
    total_seconds: f64,
    current_second: f64,
    is_playing: bool,
    was_playing_before_scrub: bool,
    is_scrubbing: bool,
}

impl PlaybackState {
    pub fn new(total_seconds: f64) -> Result<Self, PlaybackError> {
        if !total_seconds.is_finite() || total_seconds <= 0.0 {
            return Err(PlaybackError::InvalidDuration(total_seconds));
        }
        Ok(Self {
            total_seconds,
            current_second: 0.0,
            is_playing: false,
            was_playing_before_scrub: false,
            is_scrubbing: false,
        })
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn current_second(&self) -> f64 {
        self.current_second
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Elapsed time as a fraction of the total, always in `[0, 1]`.
    pub fn fraction_complete(&self) -> f64 {
        self.current_second / self.total_seconds
    }

    pub fn phase(&self) -> Phase {
        if self.is_scrubbing {
            Phase::Scrubbing
        } else if self.is_playing {
            Phase::Playing
        } else if self.current_second >= self.total_seconds {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    /// Advances the playhead by one tick of `interval` seconds.
    ///
    /// Never overshoots the end: the last tick advances by whatever remains
    /// and clamps to the total exactly. A tick that arrives while paused is
    /// a stale event from a schedule that should already be gone; it is
    /// suppressed and reported as `Stopped` so the caller can cancel.
    pub fn tick(&mut self, interval: f64) -> TickOutcome {
        if !self.is_playing {
            return TickOutcome::Stopped;
        }

        self.current_second += interval.min(self.total_seconds - self.current_second);

        if self.current_second + interval >= self.total_seconds {
            self.current_second = self.total_seconds;
            self.is_playing = false;
            return TickOutcome::Finished;
        }
        TickOutcome::Advanced
    }

    /// Handles one pointer move of an in-progress drag on the handle.
    ///
    /// `pointer_x` is the pointer position relative to the left edge of the
    /// track. The handle centers under the finger, so the attempted offset
    /// is half a handle-diameter to the left of the pointer, clamped to the
    /// usable track. Out-of-range positions are expected, not errors.
    pub fn on_drag_changed(&mut self, pointer_x: f64, geometry: &ScrubberGeometry) {
        if !self.is_scrubbing {
            self.was_playing_before_scrub = self.is_playing;
            self.is_scrubbing = true;
        }
        // Dragging always pauses playback for the duration of the drag.
        self.is_playing = false;

        let attempted_offset = pointer_x - geometry.handle_diameter / 2.0;
        let max_offset = geometry.max_offset();
        let offset = attempted_offset.clamp(0.0, max_offset);
        let fraction = if max_offset > 0.0 {
            offset / max_offset
        } else {
            0.0
        };
        self.current_second = fraction * self.total_seconds;
    }

    /// Ends a drag, resuming playback if it was playing when the drag began.
    pub fn on_drag_ended(&mut self) {
        self.is_playing = self.was_playing_before_scrub;
        self.was_playing_before_scrub = false;
        self.is_scrubbing = false;
    }

    /// Flips between playing and paused. No-op once the clip has finished;
    /// the user has to seek backwards first.
    pub fn toggle_play_pause(&mut self) {
        if self.current_second >= self.total_seconds {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    /// Jumps back 15 seconds, clamped to the start. Play state is untouched.
    pub fn skip_back(&mut self) {
        self.current_second = (self.current_second - SKIP_SECONDS).max(0.0);
    }

    /// Jumps forward 15 seconds, clamped to the end. Play state is untouched.
    pub fn skip_forward(&mut self) {
        self.current_second = (self.current_second + SKIP_SECONDS).min(self.total_seconds);
    }
}

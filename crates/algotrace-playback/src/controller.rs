//! Playback controller state machine.
//!
//! The controller holds a cursor into a trace it knows only by length, and
//! never sleeps. Auto-advance is a token protocol: starting playback arms a
//! [`TickToken`], the driver waits [`PlaybackController::tick_delay`] and
//! hands the token back to [`PlaybackController::on_tick`]. Any operation
//! that cancels playback disarms the token, so a tick that was already in
//! flight comes back [`TickOutcome::Stale`] and changes nothing.
//!
//! State transitions:
//! `Paused -> Playing` on [`toggle_play`](PlaybackController::toggle_play);
//! `Playing -> Paused` on toggle, reset, load, or reaching the last step.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use algotrace_core::Timeline;

use crate::config::PlaybackConfig;
use crate::speed::Speed;

/// What the presentation layer renders: which step, and whether it moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub speed: Speed,
}

/// Identifies one scheduled tick. Only the most recently armed token is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

impl TickToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved to `index`; `next` is armed for the following tick.
    Advanced { index: usize, next: TickToken },
    /// The cursor reached the last step and playback stopped.
    Finished { index: usize },
    /// The token was cancelled or superseded; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    len: usize,
    state: PlaybackState,
    config: PlaybackConfig,
    generation: u64,
    armed: Option<TickToken>,
}

impl PlaybackController {
    pub fn new(timeline: &impl Timeline) -> Self {
        Self::with_config(timeline, PlaybackConfig::default())
    }

    pub fn with_config(timeline: &impl Timeline, config: PlaybackConfig) -> Self {
        PlaybackController {
            len: timeline.len(),
            state: PlaybackState::default(),
            config,
            generation: 0,
            armed: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.state.speed
    }

    /// Number of steps in the loaded trace.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn is_at_start(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.current_index == self.last_index()
    }

    /// Position as a fraction of the trace, in `[0, 1]`. A one-step trace is
    /// always complete.
    pub fn progress(&self) -> f64 {
        match self.last_index() {
            0 => 1.0,
            last => self.state.current_index as f64 / last as f64,
        }
    }

    /// The live token, if a tick is scheduled.
    pub fn armed(&self) -> Option<TickToken> {
        self.armed
    }

    /// How long the driver should wait before delivering the armed token.
    ///
    /// Read when a tick is scheduled, so a speed change applies from the
    /// next tick on.
    pub fn tick_delay(&self) -> Duration {
        self.state.speed.scale(self.config.base_interval)
    }

    /// Moves one step forward, stopping at the last step.
    ///
    /// Reaching the last step while playing stops playback.
    pub fn step_forward(&mut self) -> usize {
        if self.state.current_index < self.last_index() {
            self.state.current_index += 1;
        }
        self.stop_if_at_end();
        self.state.current_index
    }

    /// Moves one step back, stopping at 0.
    pub fn step_backward(&mut self) -> usize {
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.state.current_index
    }

    /// Jumps to `index`, clamped to the trace.
    pub fn seek(&mut self, index: usize) -> usize {
        self.state.current_index = index.min(self.last_index());
        self.stop_if_at_end();
        self.state.current_index
    }

    /// Returns to the first step and stops playback.
    pub fn reset(&mut self) {
        self.state.current_index = 0;
        self.pause();
    }

    /// Starts or stops auto-advance.
    ///
    /// Starting from the last step rewinds to the first. Returns the armed
    /// token when playback started; a one-step trace never starts.
    pub fn toggle_play(&mut self) -> Option<TickToken> {
        if self.state.is_playing {
            self.pause();
            return None;
        }
        if self.is_at_end() {
            self.state.current_index = 0;
        }
        if self.is_at_end() {
            return None;
        }
        self.state.is_playing = true;
        Some(self.arm())
    }

    /// Changes the playback rate. A tick already scheduled keeps its delay.
    pub fn set_speed(&mut self, speed: Speed) {
        self.state.speed = speed;
    }

    /// Replaces the trace: back to the first step, paused, tick cancelled.
    /// Speed is kept.
    pub fn load(&mut self, timeline: &impl Timeline) {
        self.len = timeline.len();
        self.reset();
    }

    /// Delivers a scheduled tick.
    pub fn on_tick(&mut self, token: TickToken) -> TickOutcome {
        if self.armed != Some(token) || !self.state.is_playing {
            tracing::trace!(generation = token.0, "stale tick ignored");
            return TickOutcome::Stale;
        }
        self.armed = None;

        self.state.current_index = (self.state.current_index + 1).min(self.last_index());
        let index = self.state.current_index;
        if self.is_at_end() {
            self.state.is_playing = false;
            tracing::debug!(index, "playback finished");
            return TickOutcome::Finished { index };
        }
        TickOutcome::Advanced {
            index,
            next: self.arm(),
        }
    }

    fn arm(&mut self) -> TickToken {
        self.generation += 1;
        let token = TickToken(self.generation);
        self.armed = Some(token);
        token
    }

    fn pause(&mut self) {
        if let Some(token) = self.armed.take() {
            tracing::debug!(generation = token.0, "tick cancelled");
        }
        self.state.is_playing = false;
    }

    fn stop_if_at_end(&mut self) {
        if self.state.is_playing && self.is_at_end() {
            self.pause();
        }
    }
}

//! Playback over step traces.
//!
//! [`PlaybackController`] is the synchronous state machine: a clamped cursor,
//! a play flag and a speed. It issues [`TickToken`]s instead of sleeping.
//! [`AutoPlayer`] drives a controller from tokio timers.

pub mod config;
pub mod controller;
pub mod player;
pub mod speed;

pub use config::PlaybackConfig;
pub use controller::{PlaybackController, PlaybackState, TickOutcome, TickToken};
pub use player::AutoPlayer;
pub use speed::{Speed, UnknownSpeed};

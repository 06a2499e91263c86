//! Playback speed multipliers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the supported playback rates.
///
/// Serialized as its multiplier (`0.5`, `1`, `2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsupported speed '{0}': expected 0.5, 1 or 2")]
pub struct UnknownSpeed(pub String);

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
        }
    }

    /// Delay between ticks at this speed: `base / multiplier`.
    pub fn scale(self, base: Duration) -> Duration {
        match self {
            Speed::Half => base * 2,
            Speed::Normal => base,
            Speed::Double => base / 2,
        }
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> f64 {
        speed.multiplier()
    }
}

impl TryFrom<f64> for Speed {
    type Error = UnknownSpeed;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Speed::ALL
            .into_iter()
            .find(|s| s.multiplier() == value)
            .ok_or_else(|| UnknownSpeed(value.to_string()))
    }
}

impl FromStr for Speed {
    type Err = UnknownSpeed;

    /// Accepts `0.5`, `1`, `2`, with or without a trailing `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(|v| Speed::try_from(v).ok())
            .ok_or_else(|| UnknownSpeed(s.to_string()))
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

//! Overall wellness score.
//!
//! # Responsibility
//! - Combine energy, focus and inverted stress into one 0-10 score.
//!
//! # Invariants
//! - `overall = round_half_up((energy + focus + (10 - stress)) / 3, 1 decimal)`.
//! - Arithmetic runs on integer tenths, so equal inputs always give equal
//!   scores and band comparisons are exact.
//! - Non-decreasing in energy and focus, non-increasing in stress.

use crate::model::pulse::{Pulse, RATING_MAX};
use std::fmt::{Display, Formatter};

/// One-decimal overall score, stored as tenths (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    tenths: u8,
}

impl Score {
    /// Scores a pulse. Ratings are clamped first.
    pub fn of(pulse: &Pulse) -> Self {
        let pulse = pulse.clamped();
        let sum = u32::from(pulse.energy)
            + u32::from(pulse.focus)
            + u32::from(RATING_MAX - pulse.stress);
        // round(sum * 10 / 3): remainder 1 rounds down, remainder 2 rounds up.
        let tenths = (sum * 10 + 1) / 3;
        Self {
            tenths: tenths as u8,
        }
    }

    /// Rebuilds a score from a persisted one-decimal value.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let tenths = (value * 10.0).round().clamp(0.0, 100.0);
        Some(Self {
            tenths: tenths as u8,
        })
    }

    /// Score on the 0-10 scale with one decimal.
    pub fn value(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn tenths(self) -> u8 {
        self.tenths
    }

    /// Score on the 0-100 badge scale.
    pub fn badge(self) -> u8 {
        self.tenths
    }

    /// Score rounded half up to a whole number on the 0-10 scale.
    pub fn whole(self) -> u8 {
        (self.tenths + 5) / 10
    }

    pub(crate) fn at_least(self, whole_points: u8) -> bool {
        self.tenths >= whole_points * 10
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Scores three raw ratings. Out-of-range ratings are clamped.
pub fn score(energy: i64, focus: i64, stress: i64) -> Score {
    Score::of(&Pulse::new(energy, focus, stress))
}

//! Meter classification for rating bars.
//!
//! Energy and focus read "higher is better"; stress is inverted.

use crate::model::pulse::{clamp_rating, Pulse};
use serde::{Deserialize, Serialize};

/// Which rating a meter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Energy,
    Focus,
    Stress,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Focus => "Focus",
            Self::Stress => "Stress",
        }
    }

    fn is_inverted(self) -> bool {
        matches!(self, Self::Stress)
    }
}

/// Color tone of a meter fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeterTone {
    Good,
    Warn,
    Bad,
}

impl MeterTone {
    /// Tone for a rating of the given metric.
    pub fn for_rating(metric: Metric, rating: u8) -> Self {
        if metric.is_inverted() {
            match rating {
                0..=3 => Self::Good,
                4..=6 => Self::Warn,
                _ => Self::Bad,
            }
        } else {
            match rating {
                0..=3 => Self::Bad,
                4..=6 => Self::Warn,
                _ => Self::Good,
            }
        }
    }
}

/// Display-ready reading of one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeterReading {
    pub metric: Metric,
    pub rating: u8,
    /// Fill width, `rating * 10`.
    pub percent: u8,
    pub tone: MeterTone,
    /// Plain level word: `Low`, `Moderate` or `High`.
    pub level: &'static str,
}

impl MeterReading {
    pub fn new(metric: Metric, rating: u8) -> Self {
        let rating = clamp_rating(i64::from(rating));
        Self {
            metric,
            rating,
            percent: rating * 10,
            tone: MeterTone::for_rating(metric, rating),
            level: level_word(rating),
        }
    }
}

/// Readings for energy, focus and stress, in that order.
pub fn readings(pulse: &Pulse) -> [MeterReading; 3] {
    let pulse = pulse.clamped();
    [
        MeterReading::new(Metric::Energy, pulse.energy),
        MeterReading::new(Metric::Focus, pulse.focus),
        MeterReading::new(Metric::Stress, pulse.stress),
    ]
}

fn level_word(rating: u8) -> &'static str {
    match rating {
        0..=3 => "Low",
        4..=6 => "Moderate",
        _ => "High",
    }
}

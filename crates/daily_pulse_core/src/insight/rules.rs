//! Insight decision table.
//!
//! # Responsibility
//! - Classify a pulse into exactly one `InsightCategory`.
//! - Map every category to one static, pre-authored message.
//!
//! # Invariants
//! - Bands are checked top-down on the overall score and the first matching
//!   branch wins; later branches are never evaluated.
//! - The table is total over the clamped cube `[0,10]^3`.
//! - Messages never interpolate rating values.
//!
//! # Threshold table
//!
//! | band   | overall | branches, in priority order                                  |
//! |--------|---------|--------------------------------------------------------------|
//! | peak   | >= 8.0  | stress <= 2, stress <= 4, otherwise                          |
//! | steady | >= 6.0  | stress >= 7, energy <= 4, focus <= 4, otherwise              |
//! | mixed  | >= 4.0  | energy <= 4 && stress >= 7, focus <= 4, stress >= 7, energy <= 4, otherwise |
//! | low    | < 4.0   | stress >= 8, energy <= 3 && focus <= 3, energy <= 3, otherwise |
//!
//! A peak score needs `energy + focus >= 14 + stress`, so stress never
//! exceeds 6 inside the peak band; its edges split `0..=6` into thirds.

use crate::insight::score::Score;
use crate::model::pulse::Pulse;
use serde::{Deserialize, Serialize};

const PEAK_BAND_MIN: u8 = 8;
const STEADY_BAND_MIN: u8 = 6;
const MIXED_BAND_MIN: u8 = 4;

const PEAK_LOW_STRESS_MAX: u8 = 2;
const PEAK_MODERATE_STRESS_MAX: u8 = 4;
const ELEVATED_STRESS_MIN: u8 = 7;
const OVERWHELMING_STRESS_MIN: u8 = 8;
const LOW_RATING_MAX: u8 = 4;
const VERY_LOW_RATING_MAX: u8 = 3;

/// Score band used as the primary key into the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Peak,
    Steady,
    Mixed,
    Low,
}

impl ScoreBand {
    pub fn of(score: Score) -> Self {
        if score.at_least(PEAK_BAND_MIN) {
            Self::Peak
        } else if score.at_least(STEADY_BAND_MIN) {
            Self::Steady
        } else if score.at_least(MIXED_BAND_MIN) {
            Self::Mixed
        } else {
            Self::Low
        }
    }
}

/// Leaf of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    PeakLowStress,
    PeakModerateStress,
    PeakHighStress,
    SteadyRunningHot,
    SteadyLowEnergy,
    SteadyScattered,
    SteadySolid,
    MixedDrainedAndStressed,
    MixedScattered,
    MixedStressed,
    MixedLowEnergy,
    MixedMiddleGround,
    LowOverwhelmed,
    LowEverythingHard,
    LowDrained,
    LowToughDay,
}

impl InsightCategory {
    /// Every leaf, in table order.
    pub const ALL: [InsightCategory; 16] = [
        Self::PeakLowStress,
        Self::PeakModerateStress,
        Self::PeakHighStress,
        Self::SteadyRunningHot,
        Self::SteadyLowEnergy,
        Self::SteadyScattered,
        Self::SteadySolid,
        Self::MixedDrainedAndStressed,
        Self::MixedScattered,
        Self::MixedStressed,
        Self::MixedLowEnergy,
        Self::MixedMiddleGround,
        Self::LowOverwhelmed,
        Self::LowEverythingHard,
        Self::LowDrained,
        Self::LowToughDay,
    ];

    pub fn band(self) -> ScoreBand {
        match self {
            Self::PeakLowStress | Self::PeakModerateStress | Self::PeakHighStress => {
                ScoreBand::Peak
            }
            Self::SteadyRunningHot
            | Self::SteadyLowEnergy
            | Self::SteadyScattered
            | Self::SteadySolid => ScoreBand::Steady,
            Self::MixedDrainedAndStressed
            | Self::MixedScattered
            | Self::MixedStressed
            | Self::MixedLowEnergy
            | Self::MixedMiddleGround => ScoreBand::Mixed,
            Self::LowOverwhelmed
            | Self::LowEverythingHard
            | Self::LowDrained
            | Self::LowToughDay => ScoreBand::Low,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PeakLowStress => "You're in the zone. High energy, strong focus, and low stress: this is your sweet spot. Tackle your biggest challenges today.",
            Self::PeakModerateStress => "You're performing well despite some stress. Channel that energy into focused work, but remember to take breaks.",
            Self::PeakHighStress => "You're pushing hard and it shows. Your energy and focus are high, but watch that stress level. Consider what you can delegate or defer.",
            Self::SteadyRunningHot => "Good energy and focus, but stress is creeping up. You're productive but running hot. Consider a short break before it catches up with you.",
            Self::SteadyLowEnergy => "Your focus is solid but energy is lagging. You might be running on willpower. A walk, snack, or quick reset could help sustain this.",
            Self::SteadyScattered => "You've got the energy but your mind is scattered. Try closing some tabs, literally and mentally. One thing at a time.",
            Self::SteadySolid => "Solid day. You're in a good working state. Not your absolute peak, but steady and sustainable. Keep the momentum going.",
            Self::MixedDrainedAndStressed => "Low energy plus high stress is a tough combo. This might be a day for lighter tasks and self-care. Tomorrow is another chance.",
            Self::MixedScattered => "Your mind might be scattered today. Try time-boxing small tasks or taking a walk to reset. You don't need to force it.",
            Self::MixedStressed => "The stress is real today. Focus on what truly matters and let go of the rest. You're doing better than you think.",
            Self::MixedLowEnergy => "Energy is low but stress is manageable. This might be a good day for planning, thinking, or catching up on easier tasks.",
            Self::MixedMiddleGround => "You're in the middle ground: not bad, not great. Pick one meaningful thing to accomplish and call it a win.",
            Self::LowOverwhelmed => "The stress is overwhelming right now. Please take a step back. Talk to someone, take a break, or tackle just one small thing. You matter more than the work.",
            Self::LowEverythingHard => "Everything feels hard today, and that's okay. Rest if you can. When you're ready, start with the tiniest step forward.",
            Self::LowDrained => "Your battery is drained. If possible, rest. If not, go easy on yourself and focus on just showing up. That's enough for today.",
            Self::LowToughDay => "Today is tough, but you're still here. Be kind to yourself, do what you can, and remember: tomorrow is a fresh start.",
        }
    }
}

/// Result of running the decision table on one pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub category: InsightCategory,
    pub score: Score,
    pub message: &'static str,
}

/// Classifies a pulse. Ratings are clamped first.
pub fn classify(pulse: &Pulse) -> InsightCategory {
    let pulse = pulse.clamped();
    classify_scored(&pulse, Score::of(&pulse))
}

fn classify_scored(pulse: &Pulse, score: Score) -> InsightCategory {
    let Pulse {
        energy,
        focus,
        stress,
    } = *pulse;

    match ScoreBand::of(score) {
        ScoreBand::Peak => {
            if stress <= PEAK_LOW_STRESS_MAX {
                InsightCategory::PeakLowStress
            } else if stress <= PEAK_MODERATE_STRESS_MAX {
                InsightCategory::PeakModerateStress
            } else {
                InsightCategory::PeakHighStress
            }
        }
        ScoreBand::Steady => {
            if stress >= ELEVATED_STRESS_MIN {
                InsightCategory::SteadyRunningHot
            } else if energy <= LOW_RATING_MAX {
                InsightCategory::SteadyLowEnergy
            } else if focus <= LOW_RATING_MAX {
                InsightCategory::SteadyScattered
            } else {
                InsightCategory::SteadySolid
            }
        }
        ScoreBand::Mixed => {
            if energy <= LOW_RATING_MAX && stress >= ELEVATED_STRESS_MIN {
                InsightCategory::MixedDrainedAndStressed
            } else if focus <= LOW_RATING_MAX {
                InsightCategory::MixedScattered
            } else if stress >= ELEVATED_STRESS_MIN {
                InsightCategory::MixedStressed
            } else if energy <= LOW_RATING_MAX {
                InsightCategory::MixedLowEnergy
            } else {
                InsightCategory::MixedMiddleGround
            }
        }
        ScoreBand::Low => {
            if stress >= OVERWHELMING_STRESS_MIN {
                InsightCategory::LowOverwhelmed
            } else if energy <= VERY_LOW_RATING_MAX && focus <= VERY_LOW_RATING_MAX {
                InsightCategory::LowEverythingHard
            } else if energy <= VERY_LOW_RATING_MAX {
                InsightCategory::LowDrained
            } else {
                InsightCategory::LowToughDay
            }
        }
    }
}

/// Runs the decision table and returns category, score and message.
pub fn select_insight(pulse: &Pulse) -> Insight {
    let pulse = pulse.clamped();
    let score = Score::of(&pulse);
    let category = classify_scored(&pulse, score);
    Insight {
        category,
        score,
        message: category.message(),
    }
}

/// Returns the insight message for three raw ratings.
pub fn insight(energy: i64, focus: i64, stress: i64) -> &'static str {
    select_insight(&Pulse::new(energy, focus, stress)).message
}

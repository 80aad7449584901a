//! Pulse domain model.
//!
//! # Responsibility
//! - Define the energy/focus/stress triple recorded by one check-in.
//! - Define the persisted shapes (`StoredPulse`, `HistoryRecord`).
//!
//! # Invariants
//! - Every rating is within `RATING_MIN..=RATING_MAX`; constructors clamp,
//!   they never reject.
//! - `StoredPulse::saved_at` is an RFC 3339 UTC timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Lowest accepted rating.
pub const RATING_MIN: u8 = 0;
/// Highest accepted rating. Also the stress inversion constant of the scorer.
pub const RATING_MAX: u8 = 10;
/// Rating used for a fresh or reset check-in.
pub const DEFAULT_RATING: u8 = 5;

/// Clamps an integer rating into the valid range.
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX)) as u8
}

/// Clamps a rating read from storage.
///
/// Returns `None` for non-finite input. Fractional values are rounded to the
/// nearest integer after clamping.
pub fn clamp_stored_rating(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    let clamped = value.clamp(f64::from(RATING_MIN), f64::from(RATING_MAX));
    Some(clamped.round() as u8)
}

/// One check-in: three ratings on the `0..=10` scale.
///
/// Energy and focus count towards wellness; stress counts against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pulse {
    pub energy: u8,
    pub focus: u8,
    pub stress: u8,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            energy: DEFAULT_RATING,
            focus: DEFAULT_RATING,
            stress: DEFAULT_RATING,
        }
    }
}

impl Pulse {
    /// Creates a pulse, clamping every rating into range.
    pub fn new(energy: i64, focus: i64, stress: i64) -> Self {
        Self {
            energy: clamp_rating(energy),
            focus: clamp_rating(focus),
            stress: clamp_rating(stress),
        }
    }

    /// Returns a copy with all fields forced into range.
    ///
    /// Public fields allow out-of-range literals; every scoring path calls
    /// this first.
    pub fn clamped(self) -> Self {
        Self::new(
            i64::from(self.energy),
            i64::from(self.focus),
            i64::from(self.stress),
        )
    }

    pub fn set_energy(&mut self, value: i64) {
        self.energy = clamp_rating(value);
    }

    pub fn set_focus(&mut self, value: i64) {
        self.focus = clamp_rating(value);
    }

    pub fn set_stress(&mut self, value: i64) {
        self.stress = clamp_rating(value);
    }
}

/// A pulse persisted under a day-key.
///
/// Serialized flat as `{energy, focus, stress, savedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredPulse {
    #[serde(flatten)]
    pub pulse: Pulse,
    /// RFC 3339 UTC timestamp with millisecond precision.
    #[serde(rename = "savedAt")]
    pub saved_at: String,
}

impl StoredPulse {
    pub fn new(pulse: Pulse, saved_at: DateTime<Utc>) -> Self {
        Self {
            pulse: pulse.clamped(),
            saved_at: format_timestamp(saved_at),
        }
    }

    /// Parses `saved_at` back into a UTC timestamp.
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.saved_at)
    }
}

/// One entry of the bounded check-in log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    /// RFC 3339 UTC timestamp of the save.
    pub date: String,
    pub energy: u8,
    pub focus: u8,
    pub stress: u8,
    /// One-decimal overall score at save time.
    pub overall: f64,
}

impl HistoryRecord {
    pub fn pulse(&self) -> Pulse {
        Pulse::new(
            i64::from(self.energy),
            i64::from(self.focus),
            i64::from(self.stress),
        )
    }
}

/// Formats a timestamp the way every persisted record stores it.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_clamps_out_of_range_ratings() {
        let pulse = Pulse::new(-3, 42, 7);
        assert_eq!(pulse, Pulse { energy: 0, focus: 10, stress: 7 });
    }

    #[test]
    fn clamped_repairs_public_field_writes() {
        let pulse = Pulse { energy: 200, focus: 3, stress: 11 }.clamped();
        assert_eq!(pulse, Pulse { energy: 10, focus: 3, stress: 10 });
    }

    #[test]
    fn stored_rating_rounds_and_clamps() {
        assert_eq!(clamp_stored_rating(6.6), Some(7));
        assert_eq!(clamp_stored_rating(-1.0), Some(0));
        assert_eq!(clamp_stored_rating(99.5), Some(10));
        assert_eq!(clamp_stored_rating(f64::NAN), None);
    }

    #[test]
    fn stored_pulse_serializes_flat_with_saved_at() {
        let saved_at = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
        let stored = StoredPulse::new(Pulse::new(6, 7, 3), saved_at);

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["energy"], 6);
        assert_eq!(json["focus"], 7);
        assert_eq!(json["stress"], 3);
        assert_eq!(json["savedAt"], "2026-02-13T10:00:00.000Z");
        assert_eq!(stored.saved_at_utc(), Some(saved_at));
    }
}

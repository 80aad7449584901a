//! Check-in session use-case service.
//!
//! # Responsibility
//! - Hold the in-progress pulse explicitly instead of in UI globals.
//! - Evaluate score, insight and meters on demand.
//! - Orchestrate save/clear across the day slot and the history log.
//!
//! # Invariants
//! - The current pulse is always clamped.
//! - `saved` mirrors what storage holds for today after every save/clear
//!   made through this session, including failed ones.
//! - A save writes the day slot and the history entry together or not at all.
//! - `reset` never touches storage.

use crate::insight::{readings, select_insight, Insight, MeterReading, Score};
use crate::model::pulse::{HistoryRecord, Pulse, StoredPulse};
use crate::repo::history_repo::HistoryRepository;
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use crate::repo::pulse_repo::PulseRepository;
use chrono::{DateTime, Local, TimeZone, Utc};
use log::info;

/// Everything a presentation layer renders for one pulse.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInSummary {
    pub pulse: Pulse,
    pub score: Score,
    pub insight: Insight,
    /// Energy, focus and stress meters, in that order.
    pub meters: [MeterReading; 3],
}

impl CheckInSummary {
    pub fn of(pulse: &Pulse) -> Self {
        let pulse = pulse.clamped();
        let insight = select_insight(&pulse);
        Self {
            pulse,
            score: insight.score,
            insight,
            meters: readings(&pulse),
        }
    }
}

/// Explicit state of one check-in session.
pub struct CheckInSession<S: KeyValueStore> {
    store: S,
    pulse: Pulse,
    saved: Option<StoredPulse>,
    submitted: bool,
}

impl<S: KeyValueStore> CheckInSession<S> {
    /// Opens a session for today, restoring today's saved pulse when present.
    pub fn open(store: S) -> RepoResult<Self> {
        Self::open_at(store, Local::now())
    }

    /// Opens a session for the local date of `now`.
    pub fn open_at<Tz: TimeZone>(store: S, now: DateTime<Tz>) -> RepoResult<Self> {
        let saved = PulseRepository::new(&store).load(now.date_naive())?;
        info!(
            "event=session_open module=service status=ok restored={}",
            saved.is_some()
        );
        Ok(Self {
            pulse: saved
                .as_ref()
                .map(|stored| stored.pulse)
                .unwrap_or_default(),
            store,
            saved,
            submitted: false,
        })
    }

    pub fn pulse(&self) -> Pulse {
        self.pulse
    }

    /// The value last saved for today, if any.
    pub fn saved(&self) -> Option<&StoredPulse> {
        self.saved.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_pulse(&mut self, pulse: Pulse) {
        self.pulse = pulse.clamped();
    }

    pub fn set_energy(&mut self, value: i64) {
        self.pulse.set_energy(value);
    }

    pub fn set_focus(&mut self, value: i64) {
        self.pulse.set_focus(value);
    }

    pub fn set_stress(&mut self, value: i64) {
        self.pulse.set_stress(value);
    }

    /// Evaluates the current pulse without changing session state.
    pub fn summary(&self) -> CheckInSummary {
        CheckInSummary::of(&self.pulse)
    }

    /// Marks the check-in as submitted and evaluates it.
    pub fn submit(&mut self) -> CheckInSummary {
        self.submitted = true;
        self.summary()
    }

    /// Saves the current pulse for today and appends it to the history log.
    pub fn save(&mut self) -> RepoResult<StoredPulse> {
        self.save_at(Local::now())
    }

    /// Writes the day slot and the history entry as one atomic unit.
    pub fn save_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> RepoResult<StoredPulse> {
        let date = now.date_naive();
        let stored = StoredPulse::new(self.pulse, now.with_timezone(&Utc));
        let record = HistoryRecord {
            date: stored.saved_at.clone(),
            energy: stored.pulse.energy,
            focus: stored.pulse.focus,
            stress: stored.pulse.stress,
            overall: Score::of(&stored.pulse).value(),
        };

        let store = &self.store;
        store.atomically(&mut || {
            PulseRepository::new(store).put(date, &stored)?;
            HistoryRepository::new(store).append(record.clone())?;
            Ok(())
        })?;

        self.saved = Some(stored.clone());
        Ok(stored)
    }

    /// Removes today's saved pulse. The history log is kept.
    pub fn clear(&mut self) -> RepoResult<()> {
        self.clear_at(Local::now())
    }

    pub fn clear_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> RepoResult<()> {
        PulseRepository::new(&self.store).clear(now.date_naive())?;
        self.saved = None;
        Ok(())
    }

    /// Restores the default pulse and leaves the submitted view.
    pub fn reset(&mut self) {
        self.pulse = Pulse::default();
        self.submitted = false;
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

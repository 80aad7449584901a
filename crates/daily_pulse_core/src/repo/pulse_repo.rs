//! Day-scoped pulse persistence.
//!
//! # Responsibility
//! - Map calendar days to storage keys.
//! - Save, load and clear the single `StoredPulse` of a day.
//!
//! # Invariants
//! - Key format is `daily-pulse:YYYY-MM-DD` in local time; one key per day.
//! - Reads validate the stored payload and treat anything malformed as
//!   absent. Parse failures never propagate.
//! - Stored ratings are clamped on read, never rejected for range.

use crate::model::pulse::{clamp_stored_rating, parse_timestamp, Pulse, StoredPulse};
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Prefix shared by every day-scoped key.
pub const DAY_KEY_PREFIX: &str = "daily-pulse:";

static DAY_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^daily-pulse:(\d{4})-(\d{2})-(\d{2})$").expect("valid day-key regex")
});

/// Returns the storage key for a calendar day.
pub fn key_for(date: NaiveDate) -> String {
    format!("{DAY_KEY_PREFIX}{}", date.format("%Y-%m-%d"))
}

/// Parses a day-key back into its date.
///
/// Returns `None` for keys that merely share the prefix.
pub fn date_from_key(key: &str) -> Option<NaiveDate> {
    let caps = DAY_KEY_RE.captures(key)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validates a raw stored payload.
///
/// Returns `None` when the payload is missing, is not a JSON object, lacks a
/// numeric `energy`/`focus`/`stress`, or lacks an RFC 3339 `savedAt`.
pub fn parse_stored(raw: Option<&str>) -> Option<StoredPulse> {
    let value: Value = serde_json::from_str(raw?).ok()?;
    let obj = value.as_object()?;

    let energy = rating_field(obj, "energy")?;
    let focus = rating_field(obj, "focus")?;
    let stress = rating_field(obj, "stress")?;
    let saved_at = obj.get("savedAt")?.as_str()?;
    parse_timestamp(saved_at)?;

    Some(StoredPulse {
        pulse: Pulse {
            energy,
            focus,
            stress,
        },
        saved_at: saved_at.to_string(),
    })
}

pub(crate) fn rating_field(obj: &Map<String, Value>, name: &str) -> Option<u8> {
    obj.get(name)?.as_f64().and_then(clamp_stored_rating)
}

/// Persistence adapter for one pulse per calendar day.
pub struct PulseRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PulseRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves `pulse` under today's key, overwriting any earlier save today.
    pub fn save(&self, pulse: &Pulse) -> RepoResult<StoredPulse> {
        self.save_at(pulse, Local::now())
    }

    /// Saves `pulse` under the key of `now`'s local date.
    pub fn save_at<Tz: TimeZone>(
        &self,
        pulse: &Pulse,
        now: DateTime<Tz>,
    ) -> RepoResult<StoredPulse> {
        let stored = StoredPulse::new(*pulse, now.with_timezone(&Utc));
        self.put(now.date_naive(), &stored)?;
        Ok(stored)
    }

    /// Writes an already stamped pulse into the slot of `date`.
    pub fn put(&self, date: NaiveDate, stored: &StoredPulse) -> RepoResult<()> {
        let key = key_for(date);
        let payload = serde_json::to_string(stored)?;
        self.store.set(&key, &payload)?;
        info!("event=pulse_save module=repo status=ok key={key}");
        Ok(())
    }

    /// Loads the pulse saved for `date`.
    ///
    /// Missing and malformed values both yield `Ok(None)`.
    pub fn load(&self, date: NaiveDate) -> RepoResult<Option<StoredPulse>> {
        let key = key_for(date);
        let raw = self.store.get(&key)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let parsed = parse_stored(Some(raw.as_str()));
        if parsed.is_none() {
            warn!("event=pulse_load module=repo status=malformed key={key}");
        }
        Ok(parsed)
    }

    /// Loads the pulse saved for the current local day.
    pub fn load_today(&self) -> RepoResult<Option<StoredPulse>> {
        self.load(Local::now().date_naive())
    }

    /// Removes the pulse saved for `date`. Clearing an empty day is a no-op.
    pub fn clear(&self, date: NaiveDate) -> RepoResult<()> {
        let key = key_for(date);
        self.store.remove(&key)?;
        info!("event=pulse_clear module=repo status=ok key={key}");
        Ok(())
    }

    /// Lists days with a stored pulse, oldest first.
    pub fn saved_days(&self) -> RepoResult<Vec<NaiveDate>> {
        let mut days = self
            .store
            .keys_with_prefix(DAY_KEY_PREFIX)?
            .iter()
            .filter_map(|key| date_from_key(key))
            .collect::<Vec<_>>();
        days.sort_unstable();
        Ok(days)
    }
}

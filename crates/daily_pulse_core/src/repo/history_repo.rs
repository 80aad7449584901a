//! Bounded check-in history log.
//!
//! # Responsibility
//! - Keep the most recent check-ins under one fixed key.
//!
//! # Invariants
//! - The log holds at most `HISTORY_CAPACITY` records, oldest first.
//! - Appending past capacity evicts from the front.
//! - A missing or malformed log reads as empty; malformed entries are
//!   skipped individually.

use crate::model::pulse::{parse_timestamp, HistoryRecord};
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use crate::repo::pulse_repo::rating_field;
use log::{info, warn};
use serde_json::Value;
use std::collections::VecDeque;

/// Fixed key of the history log.
pub const HISTORY_KEY: &str = "dailyPulseHistory";
/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 30;

/// Validates a raw stored history log.
pub fn parse_history(raw: Option<&str>) -> Option<Vec<HistoryRecord>> {
    let value: Value = serde_json::from_str(raw?).ok()?;
    let entries = value.as_array()?;
    Some(entries.iter().filter_map(parse_record).collect())
}

fn parse_record(value: &Value) -> Option<HistoryRecord> {
    let obj = value.as_object()?;
    let date = obj.get("date")?.as_str()?;
    parse_timestamp(date)?;
    let overall = obj.get("overall")?.as_f64().filter(|v| v.is_finite())?;

    Some(HistoryRecord {
        date: date.to_string(),
        energy: rating_field(obj, "energy")?,
        focus: rating_field(obj, "focus")?,
        stress: rating_field(obj, "stress")?,
        overall: overall.clamp(0.0, 10.0),
    })
}

/// Persistence adapter for the bounded history log.
pub struct HistoryRepository<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the log, oldest first.
    pub fn load(&self) -> RepoResult<Vec<HistoryRecord>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match parse_history(Some(raw.as_str())) {
            Some(records) => Ok(records),
            None => {
                warn!("event=history_load module=repo status=malformed key={HISTORY_KEY}");
                Ok(Vec::new())
            }
        }
    }

    /// Appends one record, evicting the oldest past capacity.
    ///
    /// Returns the log as written.
    pub fn append(&self, record: HistoryRecord) -> RepoResult<Vec<HistoryRecord>> {
        let mut log = VecDeque::from(self.load()?);
        log.push_back(record);
        let mut evicted = 0usize;
        while log.len() > HISTORY_CAPACITY {
            log.pop_front();
            evicted += 1;
        }

        let log = Vec::from(log);
        self.store.set(HISTORY_KEY, &serde_json::to_string(&log)?)?;
        info!(
            "event=history_append module=repo status=ok len={} evicted={evicted}",
            log.len()
        );
        Ok(log)
    }

    pub fn clear(&self) -> RepoResult<()> {
        self.store.remove(HISTORY_KEY)
    }
}

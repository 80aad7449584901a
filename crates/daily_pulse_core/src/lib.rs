//! Core domain logic for Daily Pulse check-ins.
//! This crate is the single source of truth for scoring, insight rules and
//! local persistence.

pub mod config;
pub mod db;
pub mod insight;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use insight::{
    classify, insight, readings, score, select_insight, Insight, InsightCategory, MeterReading,
    MeterTone, Metric, Score, ScoreBand,
};
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use model::pulse::{HistoryRecord, Pulse, StoredPulse};
pub use repo::history_repo::{HistoryRepository, HISTORY_CAPACITY, HISTORY_KEY};
pub use repo::kv_store::{KeyValueStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
pub use repo::pulse_repo::{key_for, PulseRepository};
pub use service::checkin_service::{CheckInSession, CheckInSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Pure scoring and insight selection.
//!
//! # Responsibility
//! - Derive the overall score from a pulse.
//! - Select the one canned insight for a pulse via the ordered decision table.
//! - Classify ratings for meter rendering.
//!
//! # Invariants
//! - Everything here is pure: no storage, no clock, no logging.
//! - Inputs are clamped before evaluation, so every function is total.

pub mod meter;
pub mod rules;
pub mod score;

pub use meter::{readings, Metric, MeterReading, MeterTone};
pub use rules::{classify, insight, select_insight, Insight, InsightCategory, ScoreBand};
pub use score::{score, Score};

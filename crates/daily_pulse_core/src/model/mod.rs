//! Check-in domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by scoring and persistence.
//!
//! # Invariants
//! - Ratings are always clamped into `0..=10`.
//! - At most one `StoredPulse` exists per calendar day.

pub mod pulse;

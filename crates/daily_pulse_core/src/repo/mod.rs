//! Persistence adapter over local key-value storage.
//!
//! # Responsibility
//! - Define the key-value store contract and its SQLite/in-memory backends.
//! - Persist day-scoped pulses and the bounded history log as JSON text.
//!
//! # Invariants
//! - Store transport failures surface as `RepoError`.
//! - Malformed stored data is never an error; it reads as absent.

pub mod history_repo;
pub mod kv_store;
pub mod pulse_repo;

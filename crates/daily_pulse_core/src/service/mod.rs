//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate scoring and repository calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod checkin_service;

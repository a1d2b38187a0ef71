//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate snapshot, engine and repository calls into use-case
//!   level APIs.
//! - Keep UI layers decoupled from storage and engine details.

pub mod schedule_service;

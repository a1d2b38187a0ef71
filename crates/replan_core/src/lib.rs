//! Core domain logic for the intervention planner.
//! This crate is the single source of truth for scheduling invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{NodeId, NodeKind, NodeValidationError, PlanNode};
pub use repo::node_repo::{NodeRepository, RepoError, RepoResult, SqliteNodeRepository};
pub use schedule::{
    calculate_suggested_date, format_date_for_picker, generate_bulk_assignment,
    next_available_date, ordered_session_nodes, standardize_date, suggested_date_from,
    unavailable_dates_except, validate_date_order, BulkAssignment, BulkParams, OrderCheck,
    SuggestParams,
};
pub use service::schedule_service::ScheduleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

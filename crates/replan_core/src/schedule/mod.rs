//! Date assignment engine for ordered session nodes.
//!
//! # Responsibility
//! - Compute, validate and preview calendar dates for session nodes under
//!   ordering, spacing and availability constraints.
//! - Stay pure: callers own the node snapshot; no function here mutates
//!   state, performs I/O, or keeps hidden caches.
//!
//! # Invariants
//! - Every function is total: unusable input yields `None`, an empty
//!   sequence, or a passing check, never a panic.
//! - Identical inputs always produce identical outputs.
//! - Only session nodes with a defined order participate in sequencing.

pub mod bulk;
pub mod dates;
pub mod select;
pub mod suggest;
pub mod validate;

pub use bulk::{generate_bulk_assignment, BulkAssignment, BulkParams};
pub use dates::{format_date_for_picker, standardize_date};
pub use select::{ordered_session_nodes, unavailable_dates_except};
pub use suggest::{
    calculate_suggested_date, next_available_date, suggested_date_from, SuggestParams,
};
pub use validate::{validate_date_order, OrderCheck};

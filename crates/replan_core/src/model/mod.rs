//! Domain model for intervention plan nodes.
//!
//! # Responsibility
//! - Define canonical data structures used by core scheduling logic.
//! - Keep one node shape shared by the flow-graph UI and persistence.
//!
//! # Invariants
//! - Every plan node is identified by a stable `NodeId`.
//! - Node shape is validated at the boundary, never silently fixed.

pub mod node;

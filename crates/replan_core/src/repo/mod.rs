//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for plan nodes.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `PlanNode::validate()` before
//!   persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   DB transport errors.

pub mod node_repo;

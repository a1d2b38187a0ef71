//! Node selection and availability computation.
//!
//! # Responsibility
//! - Narrow a plan snapshot down to schedulable session nodes in sequence.
//! - Collect calendar days already claimed by other session nodes.
//!
//! # Invariants
//! - Ordering is stable: nodes with equal `order` keep input position.
//! - The excluded node's own date never appears in the unavailable set,
//!   even when another node shares the same date.

use crate::model::node::{NodeId, NodeKind, PlanNode};
use crate::schedule::dates::format_date_for_picker;
use std::collections::BTreeSet;

/// Returns schedulable session nodes sorted ascending by `order`.
///
/// Nodes without an order, and non-session nodes, are excluded. The sort
/// is stable, so equal orders preserve their snapshot position.
pub fn ordered_session_nodes(nodes: &[PlanNode]) -> Vec<&PlanNode> {
    let mut ordered: Vec<&PlanNode> = nodes.iter().filter(|node| node.is_schedulable()).collect();
    ordered.sort_by_key(|node| node.order);
    ordered
}

/// Collects the `YYYY-MM-DD` dates already assigned to session nodes,
/// excluding the node identified by `exclude`.
///
/// Used to disable calendar days in the UI and to steer the suggestion
/// search away from taken days.
pub fn unavailable_dates_except(
    nodes: &[PlanNode],
    exclude: Option<&NodeId>,
) -> BTreeSet<String> {
    nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Session)
        .filter(|node| exclude != Some(&node.uuid))
        .filter_map(|node| node.date.map(|date| format_date_for_picker(Some(date))))
        .collect()
}

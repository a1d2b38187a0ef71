//! Order-conflict validation for proposed session dates.
//!
//! # Responsibility
//! - Check a proposed date against the dates of neighboring ordered nodes.
//! - Report conflicts as advisory values; never block an assignment.
//!
//! # Invariants
//! - Lower-order neighbors are checked before higher-order neighbors, so
//!   the reported conflict is deterministic for a given snapshot.
//! - Missing order, missing proposed date, or an empty neighborhood all
//!   validate trivially.

use crate::model::node::PlanNode;
use crate::schedule::dates::format_date_for_picker;
use chrono::NaiveDate;

/// Advisory result of checking one proposed date against the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCheck {
    pub valid: bool,
    /// Human-readable conflict description; `None` when valid.
    pub message: Option<String>,
}

impl OrderCheck {
    /// A passing check with no message.
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn conflict(message: String) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Validates a proposed date for `node` against all other ordered, dated
/// session nodes in the snapshot.
///
/// A date conflicts when it falls strictly before a lower-order node's
/// date, or strictly after a higher-order node's date. The first conflict
/// found wins, scanning all lower-order neighbors before higher-order
/// ones. Conflicts are informational: callers surface them as warnings
/// and may still apply the date.
pub fn validate_date_order(
    node: &PlanNode,
    proposed: Option<NaiveDate>,
    all_nodes: &[PlanNode],
) -> OrderCheck {
    let (Some(order), Some(proposed)) = (node.order, proposed) else {
        return OrderCheck::ok();
    };

    let neighbors: Vec<(u32, NaiveDate)> = all_nodes
        .iter()
        .filter(|other| other.uuid != node.uuid && other.is_schedulable())
        .filter_map(|other| match (other.order, other.date) {
            (Some(other_order), Some(other_date)) => Some((other_order, other_date)),
            _ => None,
        })
        .collect();

    for (other_order, other_date) in neighbors.iter().filter(|(o, _)| *o < order) {
        if *other_date > proposed {
            return OrderCheck::conflict(format!(
                "This date is earlier than node #{other_order} ({})",
                format_date_for_picker(Some(*other_date))
            ));
        }
    }

    for (other_order, other_date) in neighbors.iter().filter(|(o, _)| *o > order) {
        if *other_date < proposed {
            return OrderCheck::conflict(format!(
                "This date is later than node #{other_order} ({})",
                format_date_for_picker(Some(*other_date))
            ));
        }
    }

    OrderCheck::ok()
}

//! Bulk sequential date assignment.
//!
//! # Responsibility
//! - Generate a full date sequence for selected ordered session nodes in
//!   one deterministic pass.
//! - Attach per-row order validation against the pre-bulk snapshot.
//!
//! # Invariants
//! - Produced dates are strictly increasing along ascending order.
//! - No node is skipped: validation is informational, never a gate.
//! - Weekend skipping is applied after every single-day cursor step, not
//!   as one lookahead at the interval end.

use crate::model::node::{NodeId, PlanNode};
use crate::schedule::dates::format_date_for_picker;
use crate::schedule::select::ordered_session_nodes;
use crate::schedule::validate::{validate_date_order, OrderCheck};
use chrono::{Datelike, NaiveDate, Weekday};

/// Parameters for one bulk assignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkParams {
    /// Date assigned to the first node; `None` yields an empty result.
    pub start_date: Option<NaiveDate>,
    /// Calendar days between consecutive nodes; values below 1 are
    /// treated as 1.
    pub interval_days: u32,
    /// Push assignments forward past Saturdays and Sundays.
    pub skip_weekends: bool,
}

/// One proposed row of a bulk assignment preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAssignment {
    pub node_id: NodeId,
    pub order: u32,
    pub name: String,
    pub date: NaiveDate,
    /// Canonical `YYYY-MM-DD` form of `date` for the UI/store boundary.
    pub formatted_date: String,
    /// Advisory check against the pre-bulk snapshot.
    pub check: OrderCheck,
}

/// Generates proposed dates for the selected nodes, spaced by
/// `interval_days` starting at `start_date`.
///
/// Candidates are narrowed to ordered session nodes and walked in
/// ascending order. Each row carries a validation result computed against
/// `all_nodes` as it was before the run; the caller decides whether to
/// apply conflicting rows. Returns an empty sequence when no start date
/// is set.
pub fn generate_bulk_assignment(
    selected: &[PlanNode],
    all_nodes: &[PlanNode],
    params: &BulkParams,
) -> Vec<BulkAssignment> {
    let Some(start_date) = params.start_date else {
        return Vec::new();
    };

    let interval_days = params.interval_days.max(1);
    let mut current = start_date;
    let mut assignments = Vec::new();

    for node in ordered_session_nodes(selected) {
        let Some(order) = node.order else {
            continue;
        };

        assignments.push(BulkAssignment {
            node_id: node.uuid,
            order,
            name: node.display_name(),
            date: current,
            formatted_date: format_date_for_picker(Some(current)),
            check: validate_date_order(node, Some(current), all_nodes),
        });

        for _ in 0..interval_days {
            current = step_one_day(current, params.skip_weekends);
        }
    }

    assignments
}

/// Advances the cursor by one calendar day, then pushes it past the
/// weekend when skipping is enabled: Sunday moves one more day, Saturday
/// two. The check runs per unit step within the interval walk.
fn step_one_day(date: NaiveDate, skip_weekends: bool) -> NaiveDate {
    let mut next = next_day(date);
    if skip_weekends {
        match next.weekday() {
            Weekday::Sun => next = next_day(next),
            Weekday::Sat => next = next_day(next_day(next)),
            _ => {}
        }
    }
    next
}

/// Total successor: saturates at the calendar boundary instead of
/// panicking.
pub(crate) fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

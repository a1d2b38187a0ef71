//! Best-effort single-node date suggestion.
//!
//! # Responsibility
//! - Propose the next sensible date for one session node, respecting
//!   sequence position, taken days and the weekend rule.
//!
//! # Invariants
//! - The forward search is bounded by `search_cap` steps and degrades to
//!   the furthest date reached; it never fails or spins.
//! - Suggestions are advisory: callers may ignore them freely.

use crate::model::node::{NodeKind, PlanNode};
use crate::schedule::bulk::next_day;
use crate::schedule::dates::format_date_for_picker;
use crate::schedule::select::unavailable_dates_except;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Default bound on the forward day-by-day search.
pub const DEFAULT_SEARCH_CAP: u32 = 365;

/// Tuning for the suggestion search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestParams {
    /// Never suggest Saturdays or Sundays.
    pub skip_weekends: bool,
    /// Maximum day steps before the search gives up and returns the
    /// furthest date reached. Exists to guarantee termination against
    /// pathological all-taken ranges.
    pub search_cap: u32,
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            skip_weekends: false,
            search_cap: DEFAULT_SEARCH_CAP,
        }
    }
}

/// Walks forward from `from` one day at a time until a day is neither a
/// skipped weekend day nor present in `unavailable`.
///
/// `from` itself is a candidate. After `search_cap` steps the last date
/// reached is returned as-is.
pub fn next_available_date(
    from: NaiveDate,
    unavailable: &BTreeSet<String>,
    params: &SuggestParams,
) -> NaiveDate {
    let mut current = from;
    for _ in 0..params.search_cap {
        let weekend = matches!(current.weekday(), Weekday::Sat | Weekday::Sun);
        let taken = unavailable.contains(&format_date_for_picker(Some(current)));
        if !(params.skip_weekends && weekend) && !taken {
            return current;
        }
        current = next_day(current);
    }
    current
}

/// Deterministic core of [`calculate_suggested_date`], with the caller's
/// notion of "today" injected.
///
/// Returns `None` for nodes the engine does not schedule (non-session or
/// unordered). The first node in sequence, or any node while no other
/// session has a date yet, is suggested the next available day starting
/// today; later nodes start strictly after the nearest lower-order dated
/// node, falling back to today when none is dated.
pub fn suggested_date_from(
    node: &PlanNode,
    all_nodes: &[PlanNode],
    params: &SuggestParams,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let order = node.order?;
    if node.kind != NodeKind::Session {
        return None;
    }

    let unavailable = unavailable_dates_except(all_nodes, Some(&node.uuid));

    let any_other_dated = all_nodes.iter().any(|other| {
        other.uuid != node.uuid && other.kind == NodeKind::Session && other.date.is_some()
    });
    if order == 1 || !any_other_dated {
        return Some(next_available_date(today, &unavailable, params));
    }

    // Nearest lower-order node that already has a date anchors the search.
    let anchor = all_nodes
        .iter()
        .filter(|other| other.uuid != node.uuid && other.is_schedulable())
        .filter(|other| other.order.is_some_and(|o| o < order))
        .filter(|other| other.date.is_some())
        .max_by_key(|other| other.order);

    let start = match anchor.and_then(|other| other.date) {
        Some(anchor_date) => next_day(anchor_date),
        None => today,
    };

    Some(next_available_date(start, &unavailable, params))
}

/// Suggests a date for `node` relative to the current calendar day.
///
/// Thin wrapper over [`suggested_date_from`] using the local date; tests
/// and deterministic callers should use the injected variant directly.
pub fn calculate_suggested_date(
    node: &PlanNode,
    all_nodes: &[PlanNode],
    params: &SuggestParams,
) -> Option<NaiveDate> {
    suggested_date_from(node, all_nodes, params, Local::now().date_naive())
}

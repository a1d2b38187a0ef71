//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `replan_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use replan_core::{generate_bulk_assignment, BulkParams, PlanNode};

fn main() {
    println!("replan_core version={}", replan_core::core_version());

    // Why: a fixed Friday start makes the weekend-skip behavior visible
    // in the smoke output without depending on the current date.
    let nodes = vec![
        PlanNode::session(Some(1), None),
        PlanNode::session(Some(2), None),
        PlanNode::session(Some(3), None),
    ];
    let params = BulkParams {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        interval_days: 1,
        skip_weekends: true,
    };

    for row in generate_bulk_assignment(&nodes, &nodes, &params) {
        println!(
            "session order={} name={:?} date={}",
            row.order, row.name, row.formatted_date
        );
    }
}

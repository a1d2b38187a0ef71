use chrono::NaiveDate;
use replan_core::{validate_date_order, PlanNode};

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("test date should parse")
}

/// Nodes 1 and 3 are dated; node 2 is the one being edited.
fn three_node_snapshot() -> (PlanNode, Vec<PlanNode>) {
    let first = PlanNode::session(Some(1), Some(date("2024-03-01")));
    let middle = PlanNode::session(Some(2), None);
    let third = PlanNode::session(Some(3), Some(date("2024-03-10")));
    let snapshot = vec![first, middle.clone(), third];
    (middle, snapshot)
}

#[test]
fn date_before_a_lower_order_session_is_flagged() {
    let (middle, snapshot) = three_node_snapshot();

    let check = validate_date_order(&middle, Some(date("2024-02-28")), &snapshot);
    assert!(!check.valid);
    let message = check.message.expect("conflict should carry a message");
    assert!(message.contains("earlier"));
    assert!(message.contains("node #1"));
    assert!(message.contains("2024-03-01"));
}

#[test]
fn date_after_a_higher_order_session_is_flagged() {
    let (middle, snapshot) = three_node_snapshot();

    let check = validate_date_order(&middle, Some(date("2024-03-15")), &snapshot);
    assert!(!check.valid);
    let message = check.message.expect("conflict should carry a message");
    assert!(message.contains("later"));
    assert!(message.contains("node #3"));
    assert!(message.contains("2024-03-10"));
}

#[test]
fn date_between_neighbors_is_valid() {
    let (middle, snapshot) = three_node_snapshot();

    let check = validate_date_order(&middle, Some(date("2024-03-05")), &snapshot);
    assert!(check.valid);
    assert!(check.message.is_none());
}

#[test]
fn boundary_dates_equal_to_neighbors_are_valid() {
    // Dates are non-decreasing along the order, not strictly increasing:
    // sharing a neighbor's day is allowed.
    let (middle, snapshot) = three_node_snapshot();

    assert!(validate_date_order(&middle, Some(date("2024-03-01")), &snapshot).valid);
    assert!(validate_date_order(&middle, Some(date("2024-03-10")), &snapshot).valid);
}

#[test]
fn lower_order_conflicts_win_over_higher_order_ones() {
    // Proposal conflicts with both neighbors; the lower-order one must be
    // the one reported.
    let first = PlanNode::session(Some(1), Some(date("2024-03-20")));
    let middle = PlanNode::session(Some(2), None);
    let third = PlanNode::session(Some(3), Some(date("2024-03-01")));
    let snapshot = vec![first, middle.clone(), third];

    let check = validate_date_order(&middle, Some(date("2024-03-10")), &snapshot);
    let message = check.message.expect("conflict should carry a message");
    assert!(message.contains("node #1"));
}

#[test]
fn undated_and_unordered_neighbors_are_ignored() {
    let middle = PlanNode::session(Some(2), None);
    let snapshot = vec![
        middle.clone(),
        PlanNode::session(Some(1), None),
        PlanNode::session(None, Some(date("2024-03-30"))),
        PlanNode::exercise("rowing"),
    ];

    let check = validate_date_order(&middle, Some(date("2024-01-01")), &snapshot);
    assert!(check.valid);
}

#[test]
fn identical_inputs_validate_identically() {
    let (middle, snapshot) = three_node_snapshot();

    let first = validate_date_order(&middle, Some(date("2024-02-28")), &snapshot);
    let second = validate_date_order(&middle, Some(date("2024-02-28")), &snapshot);
    assert_eq!(first, second);
}

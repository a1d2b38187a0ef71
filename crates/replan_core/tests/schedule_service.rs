use chrono::NaiveDate;
use replan_core::db::open_db_in_memory;
use replan_core::{
    BulkParams, NodeRepository, PlanNode, RepoError, ScheduleService, SqliteNodeRepository,
    SuggestParams,
};
use uuid::Uuid;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("test date should parse")
}

#[test]
fn preview_bulk_only_covers_the_selected_sessions() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteNodeRepository::new(&conn));

    let first = PlanNode::session(Some(1), None);
    let second = PlanNode::session(Some(2), None);
    let third = PlanNode::session(Some(3), None);
    for node in [&first, &second, &third] {
        service.create_node(node).unwrap();
    }

    let params = BulkParams {
        start_date: Some(date("2024-03-04")),
        interval_days: 1,
        skip_weekends: false,
    };
    let rows = service.preview_bulk(&[first.uuid, third.uuid], &params).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].node_id, first.uuid);
    assert_eq!(rows[1].node_id, third.uuid);
    // Preview never persists.
    assert!(service.get_node(second.uuid).unwrap().unwrap().date.is_none());
    assert!(service.get_node(first.uuid).unwrap().unwrap().date.is_none());
}

#[test]
fn apply_assignments_persists_via_update_by_id() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteNodeRepository::new(&conn));

    let first = PlanNode::session(Some(1), None);
    let second = PlanNode::session(Some(2), None);
    service.create_node(&first).unwrap();
    service.create_node(&second).unwrap();

    let params = BulkParams {
        start_date: Some(date("2024-03-01")),
        interval_days: 1,
        skip_weekends: true,
    };
    let rows = service.preview_bulk(&[first.uuid, second.uuid], &params).unwrap();
    let assignments: Vec<_> = rows.iter().map(|row| (row.node_id, row.date)).collect();
    service.apply_assignments(&assignments).unwrap();

    let loaded_first = service.get_node(first.uuid).unwrap().unwrap();
    let loaded_second = service.get_node(second.uuid).unwrap().unwrap();
    assert_eq!(loaded_first.date, Some(date("2024-03-01")));
    assert_eq!(loaded_second.date, Some(date("2024-03-04")));
}

#[test]
fn suggest_date_for_unknown_node_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteNodeRepository::new(&conn));

    let missing = Uuid::new_v4();
    let err = service
        .suggest_date(missing, &SuggestParams::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn unavailable_dates_reflect_stored_assignments() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNodeRepository::new(&conn);

    let first = PlanNode::session(Some(1), Some(date("2024-03-01")));
    let second = PlanNode::session(Some(2), Some(date("2024-03-04")));
    repo.create_node(&first).unwrap();
    repo.create_node(&second).unwrap();

    let service = ScheduleService::new(repo);
    let all = service.unavailable_dates(None).unwrap();
    assert!(all.contains("2024-03-01"));
    assert!(all.contains("2024-03-04"));

    let without_first = service.unavailable_dates(Some(&first.uuid)).unwrap();
    assert!(!without_first.contains("2024-03-01"));
    assert!(without_first.contains("2024-03-04"));
}

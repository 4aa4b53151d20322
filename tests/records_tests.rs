use chrono::NaiveDateTime;
use mjournal::config::Config;
use mjournal::core::event::{EventChanges, EventLogic};
use mjournal::core::records::RecordLogic;
use mjournal::core::summary::SummaryLogic;
use mjournal::db::pool::DbPool;
use mjournal::db::queries::{find_event, links_for_object};
use mjournal::errors::AppError;
use mjournal::utils::date::parse_datetime;

fn dt(s: &str) -> NaiveDateTime {
    parse_datetime(s).expect("valid test date")
}

fn journal() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    let conn = &pool.conn;
    RecordLogic::add_object(conn, "Plant", "", None).unwrap(); // 1
    RecordLogic::add_object(conn, "Line 1", "", Some(1)).unwrap(); // 2
    RecordLogic::add_object(conn, "Press", "hydraulic", Some(2)).unwrap(); // 3
    RecordLogic::add_type(conn, "Lubrication", "", None).unwrap(); // 1
    RecordLogic::add_type(conn, "Filter swap", "", None).unwrap(); // 2
    RecordLogic::add_link(conn, 3, 1, Some(14)).unwrap();
    RecordLogic::add_link(conn, 3, 2, None).unwrap();
    pool
}

#[test]
fn object_with_missing_parent_is_rejected() {
    let pool = journal();
    let err = RecordLogic::add_object(&pool.conn, "Ghost", "", Some(42)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn blank_title_is_rejected() {
    let pool = journal();
    let err = RecordLogic::add_type(&pool.conn, "   ", "", None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn links_are_unique_per_pair() {
    let pool = journal();
    let err = RecordLogic::add_link(&pool.conn, 3, 1, Some(7)).unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists(_)));
}

#[test]
fn periodicity_must_be_positive() {
    let pool = journal();
    for bad in [0, -3] {
        let err = RecordLogic::add_link(&pool.conn, 2, 1, Some(bad)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[test]
fn remove_link_then_remove_again() {
    let pool = journal();
    RecordLogic::remove_link(&pool.conn, 3, 2).unwrap();
    assert_eq!(links_for_object(&pool.conn, 3).unwrap().len(), 1);

    let err = RecordLogic::remove_link(&pool.conn, 3, 2).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn events_need_an_applicable_type() {
    let pool = journal();
    let err = EventLogic::add(&pool.conn, 2, 1, dt("2024-01-01"), "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = EventLogic::add(&pool.conn, 3, 9, dt("2024-01-01"), "").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn unscheduled_link_still_accepts_events() {
    let pool = journal();
    let ev = EventLogic::add(&pool.conn, 3, 2, dt("2024-01-01 10:30"), "spare filter").unwrap();
    assert!(ev.id > 0);
    assert_eq!(ev.date, dt("2024-01-01 10:30"));
}

#[test]
fn edit_changes_only_what_is_given() {
    let pool = journal();
    let ev = EventLogic::add(&pool.conn, 3, 1, dt("2024-01-01"), "greased").unwrap();

    let changes = EventChanges {
        date: Some(dt("2024-01-02 09:00")),
        ..Default::default()
    };
    let edited = EventLogic::edit(&pool.conn, ev.id, &changes).unwrap();

    assert_eq!(edited.date, dt("2024-01-02 09:00"));
    assert_eq!(edited.comment, "greased");
    assert_eq!(edited.type_id, 1);

    let stored = find_event(&pool.conn, ev.id).unwrap().unwrap();
    assert_eq!(stored, edited);
}

#[test]
fn edit_without_changes_or_target_fails() {
    let pool = journal();
    let ev = EventLogic::add(&pool.conn, 3, 1, dt("2024-01-01"), "").unwrap();

    let err = EventLogic::edit(&pool.conn, ev.id, &EventChanges::default()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = EventLogic::edit(&pool.conn, 999, &EventChanges::default()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_removes_the_event() {
    let pool = journal();
    let ev = EventLogic::add(&pool.conn, 3, 1, dt("2024-01-01"), "").unwrap();

    EventLogic::delete(&pool.conn, ev.id).unwrap();
    assert!(find_event(&pool.conn, ev.id).unwrap().is_none());
    assert!(EventLogic::delete(&pool.conn, ev.id).unwrap_err().is_not_found());
}

#[test]
fn summary_collects_subtree_history_and_pending() {
    let pool = journal();
    let conn = &pool.conn;
    EventLogic::add(conn, 3, 1, dt("2024-03-01"), "first").unwrap();
    EventLogic::add(conn, 3, 1, dt("2024-03-15"), "second").unwrap();

    let cfg = Config::default();
    let s = SummaryLogic::object_summary(conn, &cfg, 1, dt("2024-04-01")).unwrap();

    let trail: Vec<&str> = s.breadcrumbs.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(trail, vec!["Plant"]);
    assert_eq!(s.nested.len(), 1);
    assert_eq!(s.nested[0].title, "Line 1");

    // newest first
    let comments: Vec<&str> = s.recent_events.iter().map(|e| e.event.comment.as_str()).collect();
    assert_eq!(comments, vec!["second", "first"]);
    assert_eq!(s.recent_events[0].object_title, "Press");

    assert_eq!(s.pending.len(), 1);
    assert_eq!(s.pending[0].due_date, Some(dt("2024-03-29")));
}

#[test]
fn listing_shows_one_level() {
    let pool = journal();

    let top = SummaryLogic::list_objects(&pool.conn, None).unwrap();
    assert!(top.parent.is_none());
    assert_eq!(top.objects.len(), 1);

    let line = SummaryLogic::list_objects(&pool.conn, Some(2)).unwrap();
    assert_eq!(line.objects.len(), 1);
    assert_eq!(line.objects[0].title, "Press");
    let trail: Vec<i64> = line.breadcrumbs.iter().map(|o| o.id).collect();
    assert_eq!(trail, vec![1, 2]);
}

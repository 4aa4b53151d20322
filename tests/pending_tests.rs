use chrono::{Duration, NaiveDateTime};
use mjournal::config::Config;
use mjournal::core::event::EventLogic;
use mjournal::core::hierarchy::Forest;
use mjournal::core::pending::{PendingEngine, PendingQuery, last_performed, pending};
use mjournal::core::records::RecordLogic;
use mjournal::core::summary::SummaryLogic;
use mjournal::db::pool::DbPool;
use mjournal::errors::AppError;
use mjournal::models::{LinkDetails, MaintenanceLink, MaintenanceObject, MaintenanceType};
use mjournal::utils::date::parse_datetime;

fn dt(s: &str) -> NaiveDateTime {
    parse_datetime(s).expect("valid test date")
}

fn obj(id: i64, title: &str, parent: Option<i64>) -> MaintenanceObject {
    MaintenanceObject::new(id, title, parent)
}

fn link(object: &MaintenanceObject, mtype: &MaintenanceType, every: Option<i64>) -> LinkDetails {
    LinkDetails {
        link: MaintenanceLink::new(object.id, mtype.id, every),
        object: object.clone(),
        maintenance_type: mtype.clone(),
    }
}

fn query(scope: Option<i64>, horizon_days: i64, limit: Option<usize>) -> PendingQuery {
    PendingQuery {
        limit,
        scope,
        horizon_days,
    }
}

#[test]
fn printer_cleaned_last_month_is_overdue() {
    let root = obj(1, "Root", None);
    let printer = obj(2, "Printer", Some(1));
    let cleaning = MaintenanceType::new(1, "Cleaning");

    let forest = Forest::new(vec![root.clone(), printer.clone()]);
    let links = vec![link(&printer, &cleaning, Some(30))];
    let stamps = vec![(2, 1, dt("2024-01-01"))];

    let items = PendingEngine::new(&forest)
        .compute(&query(Some(1), 0, Some(10)), &links, stamps, dt("2024-02-05"))
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].object, printer);
    assert_eq!(items[0].last_performed, Some(dt("2024-01-01")));
    assert_eq!(items[0].due_date, Some(dt("2024-01-31")));
    assert!(items[0].is_overdue(dt("2024-02-05")));
}

#[test]
fn never_done_comes_before_any_due_date() {
    let now = dt("2024-06-01 12:00");
    let boiler = obj(1, "Boiler", None);
    let cleaning = MaintenanceType::new(1, "Cleaning");
    let inspection = MaintenanceType::new(2, "Inspection");

    let forest = Forest::new(vec![boiler.clone()]);
    // Inspection was done so that it falls due 100 days from now
    let links = vec![
        link(&boiler, &inspection, Some(30)),
        link(&boiler, &cleaning, Some(30)),
    ];
    let stamps = vec![(1, 2, now + Duration::days(70))];

    let items = PendingEngine::new(&forest)
        .compute(&query(None, 365, None), &links, stamps, now)
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].maintenance_type, cleaning);
    assert_eq!(items[0].due_date, None);
    assert_eq!(items[1].maintenance_type, inspection);
    assert_eq!(items[1].due_date, Some(now + Duration::days(100)));
}

#[test]
fn horizon_decides_whether_a_future_due_date_shows() {
    let now = dt("2024-03-10 08:00");
    let pump = obj(1, "Pump", None);
    let oil = MaintenanceType::new(1, "Oil change");

    let forest = Forest::new(vec![pump.clone()]);
    let engine = PendingEngine::new(&forest);
    let links = vec![link(&pump, &oil, Some(30))];
    let stamps = || vec![(1, 1, now)];

    let week = engine
        .compute(&query(None, 7, None), &links, stamps(), now)
        .unwrap();
    assert!(week.is_empty());

    let month = engine
        .compute(&query(None, 31, None), &links, stamps(), now)
        .unwrap();
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].due_date, Some(now + Duration::days(30)));
}

#[test]
fn due_exactly_at_threshold_is_excluded() {
    let now = dt("2024-03-10");
    let pump = obj(1, "Pump", None);
    let oil = MaintenanceType::new(1, "Oil change");
    let forest = Forest::new(vec![pump.clone()]);
    let links = vec![link(&pump, &oil, Some(10))];

    // due = now exactly, horizon 0
    let items = PendingEngine::new(&forest)
        .compute(&query(None, 0, None), &links, vec![(1, 1, dt("2024-02-29"))], now)
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn scope_includes_descendants_only() {
    let now = dt("2024-01-15");
    let root = obj(1, "Root", None);
    let child = obj(2, "Child", Some(1));
    let other = obj(3, "Other root", None);
    let check = MaintenanceType::new(1, "Check");

    let forest = Forest::new(vec![root.clone(), child.clone(), other.clone()]);
    let engine = PendingEngine::new(&forest);
    let links = vec![link(&child, &check, Some(7))];
    let stamps = || vec![(2, 1, dt("2024-01-01"))];

    let in_root = engine
        .compute(&query(Some(1), 0, None), &links, stamps(), now)
        .unwrap();
    assert_eq!(in_root.len(), 1);
    assert_eq!(in_root[0].object, child);

    let in_other = engine
        .compute(&query(Some(3), 0, None), &links, stamps(), now)
        .unwrap();
    assert!(in_other.is_empty());
}

#[test]
fn limit_keeps_the_most_urgent() {
    let now = dt("2024-05-01");
    let check = MaintenanceType::new(1, "Check");

    let objects: Vec<MaintenanceObject> = (1..=10)
        .map(|id| obj(id, &format!("Unit {id}"), None))
        .collect();
    let forest = Forest::new(objects.clone());
    let links: Vec<LinkDetails> = objects
        .iter()
        .map(|o| link(o, &check, Some(10)))
        .collect();

    // Units 1..=8 were checked, unit 8 longest ago; 9 and 10 never were
    let stamps: Vec<_> = (1..=8)
        .map(|id| (id, 1, dt("2024-04-01") - Duration::days(id)))
        .collect();

    let items = PendingEngine::new(&forest)
        .compute(&query(None, 0, Some(3)), &links, stamps, now)
        .unwrap();

    let got: Vec<i64> = items.iter().map(|i| i.object.id).collect();
    assert_eq!(got, vec![9, 10, 8]);
}

#[test]
fn unscheduled_links_are_never_pending() {
    let now = dt("2024-05-01");
    let door = obj(1, "Door", None);
    let paint = MaintenanceType::new(1, "Paint");
    let forest = Forest::new(vec![door.clone()]);

    let items = PendingEngine::new(&forest)
        .compute(&query(None, 1000, None), &[link(&door, &paint, None)], vec![], now)
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn last_performed_takes_the_latest_event() {
    let latest = last_performed(vec![
        (1, 1, dt("2024-01-01")),
        (1, 1, dt("2024-03-01")),
        (1, 1, dt("2024-02-01")),
        (1, 2, dt("2023-12-24")),
    ]);

    assert_eq!(latest.len(), 2);
    assert_eq!(latest[&(1, 1)], dt("2024-03-01"));
    assert_eq!(latest[&(1, 2)], dt("2023-12-24"));
}

#[test]
fn huge_periodicity_does_not_overflow() {
    let now = dt("2024-05-01");
    let vault = obj(1, "Vault", None);
    let audit = MaintenanceType::new(1, "Audit");
    let forest = Forest::new(vec![vault.clone()]);

    let items = PendingEngine::new(&forest)
        .compute(
            &query(None, 7, None),
            &[link(&vault, &audit, Some(i64::MAX))],
            vec![(1, 1, now)],
            now,
        )
        .unwrap();
    assert!(items.is_empty());
}

/// Root(1) › Printer(2), Cleaning(1) every 30 days, cleaned 2024-01-01.
fn printer_db() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    RecordLogic::add_object(conn, "Root", "", None).unwrap();
    RecordLogic::add_object(conn, "Printer", "office", Some(1)).unwrap();
    RecordLogic::add_type(conn, "Cleaning", "", None).unwrap();
    RecordLogic::add_link(conn, 2, 1, Some(30)).unwrap();
    EventLogic::add(conn, 2, 1, dt("2023-12-01"), "first").unwrap();
    EventLogic::add(conn, 2, 1, dt("2024-01-01"), "second").unwrap();

    pool
}

#[test]
fn stored_journal_gives_the_same_answer() {
    let pool = printer_db();
    let now = dt("2024-02-05");

    let items = pending(&pool.conn, &query(Some(1), 0, Some(10)), now).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].object.title, "Printer");
    assert_eq!(items[0].maintenance_type.title, "Cleaning");
    assert_eq!(items[0].last_performed, Some(dt("2024-01-01")));
    assert_eq!(items[0].due_date, Some(dt("2024-01-31")));
}

#[test]
fn pending_is_idempotent() {
    let pool = printer_db();
    RecordLogic::add_type(&pool.conn, "Toner", "", None).unwrap();
    RecordLogic::add_link(&pool.conn, 2, 2, Some(90)).unwrap();

    let now = dt("2024-02-05");
    let q = query(None, 7, None);
    let first = pending(&pool.conn, &q, now).unwrap();
    let second = pending(&pool.conn, &q, now).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn unknown_scope_is_not_found() {
    let pool = printer_db();
    let err = pending(&pool.conn, &query(Some(99), 0, None), dt("2024-02-05")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn corrupted_parent_chain_fails_with_cycle() {
    let pool = printer_db();
    pool.conn
        .execute("UPDATE maintenance_objects SET parent_id = 2 WHERE id = 1", [])
        .unwrap();

    let err = pending(&pool.conn, &query(Some(1), 0, None), dt("2024-02-05")).unwrap_err();
    assert!(matches!(err, AppError::Cycle(_)));
}

#[test]
fn configured_defaults_and_overrides() {
    let cfg = Config::default();

    let dash = PendingQuery::resolve(&cfg, None, None, None);
    assert_eq!(dash, PendingQuery::dashboard(&cfg));

    let scoped = PendingQuery::resolve(&cfg, Some(4), Some(2), Some(60));
    assert_eq!(scoped.scope, Some(4));
    assert_eq!(scoped.limit, Some(2));
    assert_eq!(scoped.horizon_days, 60);
}

/// Root(1) with 40 000 direct children (ids 2..=40001), more than SQLite
/// accepts as bound variables in a single statement.
fn wide_db() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    RecordLogic::add_object(conn, "Fleet", "", None).unwrap();
    RecordLogic::add_type(conn, "Inspection", "", None).unwrap();
    conn.execute_batch(
        "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 40000)
         INSERT INTO maintenance_objects (title, parent_id) SELECT 'Unit ' || i, 1 FROM n;",
    )
    .unwrap();

    for (id, date) in [
        (2, "2024-01-10"),
        (30_000, "2024-01-05"),
        (40_001, "2024-01-01"),
    ] {
        RecordLogic::add_link(conn, id, 1, Some(30)).unwrap();
        EventLogic::add(conn, id, 1, dt(date), "").unwrap();
    }

    pool
}

#[test]
fn wide_subtree_is_scoped_in_memory() {
    let pool = wide_db();
    let now = dt("2024-02-05");

    let items = pending(&pool.conn, &query(Some(1), 0, Some(5)), now).unwrap();
    let got: Vec<i64> = items.iter().map(|i| i.object.id).collect();
    assert_eq!(got, vec![40_001, 30_000]);

    // a single unit only sees its own link
    let one = pending(&pool.conn, &query(Some(2), 30, None), now).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].due_date, Some(dt("2024-02-09")));
}

#[test]
fn wide_subtree_history_merges_chunks() {
    let pool = wide_db();

    let history = SummaryLogic::events_for(&pool.conn, 1, Some(2)).unwrap();
    let got: Vec<i64> = history.events.iter().map(|e| e.event.object_id).collect();
    assert_eq!(got, vec![2, 30_000]);

    let all = SummaryLogic::events_for(&pool.conn, 1, None).unwrap();
    assert_eq!(all.events.len(), 3);

    let cfg = Config::default();
    let summary = SummaryLogic::object_summary(&pool.conn, &cfg, 1, dt("2024-02-05")).unwrap();
    assert_eq!(summary.nested.len(), cfg.nested_limit);
    assert_eq!(summary.recent_events.len(), 3);
    assert_eq!(summary.pending.len(), 3);
}

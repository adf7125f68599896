use chrono::{NaiveDate, NaiveTime};
use workhours::db::{EntryStore, EntryUpdate};

mod common;
use common::{fresh_store, setup_test_db};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_init_is_idempotent() {
    let store = fresh_store("store_init_twice");
    store
        .add(d(2024, 3, 11), t(9, 0), t(17, 0), 30, 450)
        .unwrap();

    store.init().unwrap();

    assert_eq!(store.list_by_date(d(2024, 3, 11)).unwrap().len(), 1);
}

#[test]
fn test_init_creates_entries_table_and_date_index() {
    let db_path = setup_test_db("store_schema");
    let store = EntryStore::new(&db_path);
    store.init().unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let table: String = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='entries'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table, "entries");

    let index: String = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='index' AND tbl_name='entries'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(index, "idx_entries_date");
}

#[test]
fn test_add_returns_strictly_increasing_ids() {
    let store = fresh_store("store_ids");

    let mut last = 0;
    for day in 11..=15 {
        let id = store
            .add(d(2024, 3, day), t(9, 0), t(17, 0), 30, 450)
            .unwrap();
        assert!(id > last, "id {id} not greater than {last}");
        last = id;
    }
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = fresh_store("store_ids_after_delete");

    let first = store.add(d(2024, 3, 11), t(9, 0), t(17, 0), 30, 450).unwrap();
    let second = store.add(d(2024, 3, 11), t(18, 0), t(19, 0), 0, 60).unwrap();
    assert_eq!(store.delete(second).unwrap(), 1);

    let third = store.add(d(2024, 3, 11), t(18, 0), t(19, 0), 0, 60).unwrap();
    assert!(third > second);
    assert!(third > first);
}

#[test]
fn test_list_by_date_returns_added_fields() {
    let store = fresh_store("store_list_by_date");

    let id = store.add(d(2024, 3, 15), t(8, 45), t(17, 15), 45, 465).unwrap();
    store.add(d(2024, 3, 16), t(9, 0), t(12, 0), 0, 180).unwrap();

    let entries = store.list_by_date(d(2024, 3, 15)).unwrap();
    assert_eq!(entries.len(), 1);

    let e = &entries[0];
    assert_eq!(e.id, id);
    assert_eq!(e.work_date, d(2024, 3, 15));
    assert_eq!(e.start_time, t(8, 45));
    assert_eq!(e.end_time, t(17, 15));
    assert_eq!(e.lunch_minutes, 45);
    assert_eq!(e.worked_minutes, 465);
}

#[test]
fn test_list_by_date_orders_by_id() {
    let store = fresh_store("store_list_order");

    let a = store.add(d(2024, 3, 15), t(14, 0), t(18, 0), 0, 240).unwrap();
    let b = store.add(d(2024, 3, 15), t(8, 0), t(12, 0), 0, 240).unwrap();

    let ids: Vec<i64> = store
        .list_by_date(d(2024, 3, 15))
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn test_list_between_is_inclusive_and_ordered_by_date_then_id() {
    let store = fresh_store("store_list_between");

    let late = store.add(d(2024, 3, 17), t(9, 0), t(10, 0), 0, 60).unwrap();
    let mid_a = store.add(d(2024, 3, 13), t(9, 0), t(10, 0), 0, 60).unwrap();
    let first = store.add(d(2024, 3, 11), t(9, 0), t(10, 0), 0, 60).unwrap();
    let mid_b = store.add(d(2024, 3, 13), t(11, 0), t(12, 0), 0, 60).unwrap();
    store.add(d(2024, 3, 10), t(9, 0), t(10, 0), 0, 60).unwrap();
    store.add(d(2024, 3, 18), t(9, 0), t(10, 0), 0, 60).unwrap();

    let ids: Vec<i64> = store
        .list_between(d(2024, 3, 11), d(2024, 3, 17))
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first, mid_a, mid_b, late]);
}

#[test]
fn test_list_between_empty_range() {
    let store = fresh_store("store_list_between_empty");
    store.add(d(2024, 3, 11), t(9, 0), t(10, 0), 0, 60).unwrap();

    assert!(store
        .list_between(d(2024, 4, 1), d(2024, 4, 30))
        .unwrap()
        .is_empty());
}

#[test]
fn test_delete_missing_id_returns_zero() {
    let store = fresh_store("store_delete_missing");
    assert_eq!(store.delete(42).unwrap(), 0);
}

#[test]
fn test_delete_existing_id_removes_it() {
    let store = fresh_store("store_delete_existing");

    let keep = store.add(d(2024, 3, 11), t(9, 0), t(12, 0), 0, 180).unwrap();
    let gone = store.add(d(2024, 3, 11), t(13, 0), t(17, 0), 0, 240).unwrap();

    assert_eq!(store.delete(gone).unwrap(), 1);

    let ids: Vec<i64> = store
        .list_by_date(d(2024, 3, 11))
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![keep]);
    assert!(store.get(gone).unwrap().is_none());
}

#[test]
fn test_edit_with_empty_update_is_a_noop() {
    let store = fresh_store("store_edit_empty");
    let id = store.add(d(2024, 3, 11), t(9, 0), t(17, 0), 30, 450).unwrap();
    let before = store.get(id).unwrap().unwrap();

    assert_eq!(store.edit(id, &EntryUpdate::new()).unwrap(), 0);

    assert_eq!(store.get(id).unwrap().unwrap(), before);
}

#[test]
fn test_edit_empty_update_does_not_touch_database() {
    // no file, no schema: an empty update must still succeed
    let store = EntryStore::new(setup_test_db("store_edit_empty_nodb"));
    assert_eq!(store.edit(1, &EntryUpdate::default()).unwrap(), 0);
}

#[test]
fn test_edit_changes_only_supplied_fields() {
    let store = fresh_store("store_edit_partial");
    let id = store.add(d(2024, 3, 11), t(9, 0), t(17, 0), 30, 450).unwrap();

    let update = EntryUpdate::new().end_time(t(18, 0)).worked_minutes(510);
    assert_eq!(store.edit(id, &update).unwrap(), 1);

    let e = store.get(id).unwrap().unwrap();
    assert_eq!(e.work_date, d(2024, 3, 11));
    assert_eq!(e.start_time, t(9, 0));
    assert_eq!(e.end_time, t(18, 0));
    assert_eq!(e.lunch_minutes, 30);
    assert_eq!(e.worked_minutes, 510);
}

#[test]
fn test_edit_can_move_entry_to_another_date() {
    let store = fresh_store("store_edit_date");
    let id = store.add(d(2024, 3, 11), t(9, 0), t(17, 0), 30, 450).unwrap();

    store
        .edit(id, &EntryUpdate::new().work_date(d(2024, 3, 12)))
        .unwrap();

    assert!(store.list_by_date(d(2024, 3, 11)).unwrap().is_empty());
    assert_eq!(store.list_by_date(d(2024, 3, 12)).unwrap()[0].id, id);
}

#[test]
fn test_edit_missing_id_returns_zero() {
    let store = fresh_store("store_edit_missing");
    let update = EntryUpdate::new().lunch_minutes(15);
    assert_eq!(store.edit(99, &update).unwrap(), 0);
}

#[test]
fn test_store_does_not_validate_values() {
    let store = fresh_store("store_no_validation");
    let id = store.add(d(2024, 3, 11), t(17, 0), t(9, 0), 0, -480).unwrap();
    assert_eq!(store.get(id).unwrap().unwrap().worked_minutes, -480);
}

#[test]
fn test_operations_on_uninitialized_db_fail_with_db_error() {
    let store = EntryStore::new(setup_test_db("store_uninitialized"));
    let err = store.list_by_date(d(2024, 3, 11)).unwrap_err();
    assert!(matches!(err, workhours::errors::AppError::Db(_)));
}

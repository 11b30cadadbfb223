use chrono::NaiveDate;
use rusqlite::Connection;
use tagwerk_core::db::open_db_in_memory;
use tagwerk_core::{Employee, LedgerStore, NewEmployee, RepoError, SqliteLedgerStore};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn entry_count(conn: &Connection, employee_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE employee_id = ?1;",
        [employee_id],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn add_and_get_employee_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let id = store
        .add_employee(&NewEmployee::new("Ayse", 150.0))
        .unwrap();

    let loaded = store.get_employee(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Ayse");
    assert_eq!(loaded.rate, 150.0);

    assert_eq!(store.count_employees().unwrap(), 1);
}

#[test]
fn get_unknown_employee_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    assert!(store.get_employee(42).unwrap().is_none());
}

#[test]
fn list_employees_is_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    store.add_employee(&NewEmployee::new("Erste", 100.0)).unwrap();
    store.add_employee(&NewEmployee::new("Zweite", 110.0)).unwrap();
    store.add_employee(&NewEmployee::new("Dritte", 120.0)).unwrap();

    let names: Vec<String> = store
        .list_employees()
        .unwrap()
        .into_iter()
        .map(|employee| employee.name)
        .collect();
    assert_eq!(names, ["Erste", "Zweite", "Dritte"]);
}

#[test]
fn add_employee_rejects_invalid_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let blank = store.add_employee(&NewEmployee::new("  ", 100.0));
    assert!(matches!(blank, Err(RepoError::Employee(_))));

    let negative = store.add_employee(&NewEmployee::new("Ali", -5.0));
    assert!(matches!(negative, Err(RepoError::Employee(_))));

    assert_eq!(store.count_employees().unwrap(), 0);
}

#[test]
fn update_employee_overwrites_the_full_record() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let id = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    store
        .update_employee(&Employee {
            id,
            name: "Ali Demir".to_string(),
            rate: 135.5,
        })
        .unwrap();

    let loaded = store.get_employee(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Ali Demir");
    assert_eq!(loaded.rate, 135.5);
}

#[test]
fn update_and_delete_of_unknown_ids_are_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    store
        .update_employee(&Employee {
            id: 999,
            name: "Niemand".to_string(),
            rate: 1.0,
        })
        .unwrap();
    store.delete_employee(999).unwrap();

    assert_eq!(store.count_employees().unwrap(), 0);
}

#[test]
fn upsert_creates_then_mutates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    let day = date(2026, 2, 3);

    let first = store.upsert_entry(employee, day, true, 0.0).unwrap();
    let second = store.upsert_entry(employee, day, false, 80.0).unwrap();
    let third = store.upsert_entry(employee, day, true, 120.0).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(entry_count(&conn, employee), 1);

    let entry = store.find_entry(employee, day).unwrap().unwrap();
    assert_eq!(entry.id, first);
    assert!(entry.present);
    assert_eq!(entry.payment, 120.0);
}

#[test]
fn upsert_accepts_an_explicitly_recorded_empty_day() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    let day = date(2026, 2, 3);

    store.upsert_entry(employee, day, false, 0.0).unwrap();

    let entry = store.find_entry(employee, day).unwrap().unwrap();
    assert!(!entry.present);
    assert_eq!(entry.payment, 0.0);
}

#[test]
fn upsert_rejects_invalid_payments() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    let day = date(2026, 2, 3);

    assert!(matches!(
        store.upsert_entry(employee, day, true, -20.0),
        Err(RepoError::Entry(_))
    ));
    assert!(matches!(
        store.upsert_entry(employee, day, true, f64::NAN),
        Err(RepoError::Entry(_))
    ));
    assert!(store.find_entry(employee, day).unwrap().is_none());
}

#[test]
fn upsert_for_unknown_employee_fails() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let result = store.upsert_entry(77, date(2026, 2, 3), true, 0.0);
    assert!(matches!(result, Err(RepoError::Db(_))));
}

#[test]
fn find_entry_distinguishes_dates() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    store
        .upsert_entry(employee, date(2026, 2, 3), true, 50.0)
        .unwrap();

    assert!(store.find_entry(employee, date(2026, 2, 3)).unwrap().is_some());
    assert!(store.find_entry(employee, date(2026, 2, 4)).unwrap().is_none());
}

#[test]
fn range_query_is_half_open_and_date_ordered() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    for day in [date(2026, 3, 1), date(2026, 2, 28), date(2026, 2, 1)] {
        store.upsert_entry(employee, day, true, 0.0).unwrap();
    }

    let entries = store
        .entries_in_range(employee, date(2026, 2, 1), date(2026, 3, 1))
        .unwrap();
    let days: Vec<NaiveDate> = entries.into_iter().map(|entry| entry.date).collect();
    assert_eq!(days, [date(2026, 2, 1), date(2026, 2, 28)]);
}

#[test]
fn range_query_only_sees_the_requested_employee() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let first = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    let second = store.add_employee(&NewEmployee::new("Ayse", 150.0)).unwrap();
    store.upsert_entry(first, date(2026, 2, 3), true, 0.0).unwrap();
    store.upsert_entry(second, date(2026, 2, 3), true, 0.0).unwrap();

    let entries = store
        .entries_in_range(first, date(2026, 2, 1), date(2026, 3, 1))
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].employee_id, first);
}

#[test]
fn deleting_an_employee_cascades_to_their_entries() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let doomed = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    let kept = store.add_employee(&NewEmployee::new("Ayse", 150.0)).unwrap();
    store.upsert_entry(doomed, date(2026, 2, 3), true, 50.0).unwrap();
    store.upsert_entry(doomed, date(2026, 2, 4), false, 20.0).unwrap();
    store.upsert_entry(kept, date(2026, 2, 3), true, 0.0).unwrap();

    store.delete_employee(doomed).unwrap();

    assert!(store.get_employee(doomed).unwrap().is_none());
    assert_eq!(entry_count(&conn, doomed), 0);
    assert_eq!(entry_count(&conn, kept), 1);
}

#[test]
fn legacy_rows_with_null_fields_read_as_zero() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteLedgerStore::new(&conn);

    let employee = store.add_employee(&NewEmployee::new("Ali", 120.0)).unwrap();
    conn.execute(
        "INSERT INTO entries (employee_id, date, present, payment)
         VALUES (?1, '2026-02-05', NULL, NULL);",
        [employee],
    )
    .unwrap();

    let entry = store.find_entry(employee, date(2026, 2, 5)).unwrap().unwrap();
    assert!(!entry.present);
    assert_eq!(entry.payment, 0.0);
}

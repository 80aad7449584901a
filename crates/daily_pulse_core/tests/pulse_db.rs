use daily_pulse_core::db::migrations::latest_version;
use daily_pulse_core::db::{open_db, open_db_in_memory, DbError};
use daily_pulse_core::config::DB_PATH_VAR;
use daily_pulse_core::{CheckInSession, CoreConfig, KeyValueStore, Pulse, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn reopening_file_keeps_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daily_pulse.sqlite3");

    let conn_first = open_db(&path).unwrap();
    SqliteKvStore::new(&conn_first)
        .set("daily-pulse:2026-02-13", "{}")
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let value = SqliteKvStore::new(&conn_second)
        .get("daily-pulse:2026-02-13")
        .unwrap();
    assert_eq!(value.as_deref(), Some("{}"));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn configured_db_path_backs_the_session_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pulse.sqlite3");
    let db_path_str = db_path.to_str().unwrap().to_string();
    let config = CoreConfig::from_lookup(|name| {
        (name == DB_PATH_VAR).then(|| db_path_str.clone())
    })
    .unwrap();
    assert_eq!(config.db_path, db_path);

    {
        let conn = open_db(&config.db_path).unwrap();
        let mut session = CheckInSession::open(SqliteKvStore::new(&conn)).unwrap();
        session.set_pulse(Pulse::new(8, 7, 2));
        session.save().unwrap();
    }

    let conn = open_db(&config.db_path).unwrap();
    let session = CheckInSession::open(SqliteKvStore::new(&conn)).unwrap();
    assert_eq!(session.pulse(), Pulse::new(8, 7, 2));
    assert!(session.saved().is_some());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

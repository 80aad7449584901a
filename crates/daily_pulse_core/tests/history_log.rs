use daily_pulse_core::db::open_db_in_memory;
use daily_pulse_core::{
    HistoryRecord, HistoryRepository, KeyValueStore, MemoryKvStore, SqliteKvStore,
    HISTORY_CAPACITY, HISTORY_KEY,
};

fn record(n: u32) -> HistoryRecord {
    HistoryRecord {
        date: format!("2026-01-{:02}T09:00:00.000Z", n % 28 + 1),
        energy: (n % 11) as u8,
        focus: 5,
        stress: 5,
        overall: 5.0,
    }
}

#[test]
fn append_keeps_insertion_order() {
    let repo = HistoryRepository::new(MemoryKvStore::new());

    repo.append(record(1)).unwrap();
    let log = repo.append(record(2)).unwrap();

    assert_eq!(log, vec![record(1), record(2)]);
    assert_eq!(repo.load().unwrap(), log);
}

#[test]
fn thirty_first_append_evicts_the_oldest() {
    let conn = open_db_in_memory().unwrap();
    let repo = HistoryRepository::new(SqliteKvStore::new(&conn));

    for n in 0..HISTORY_CAPACITY as u32 {
        repo.append(record(n)).unwrap();
    }
    assert_eq!(repo.load().unwrap().len(), HISTORY_CAPACITY);

    let log = repo.append(record(30)).unwrap();
    assert_eq!(log.len(), HISTORY_CAPACITY);
    assert_eq!(log[0], record(1));
    assert_eq!(log.last(), Some(&record(30)));
}

#[test]
fn log_never_exceeds_capacity() {
    let repo = HistoryRepository::new(MemoryKvStore::new());
    for n in 0..75 {
        let log = repo.append(record(n)).unwrap();
        assert!(log.len() <= HISTORY_CAPACITY);
    }
    assert_eq!(repo.load().unwrap().first(), Some(&record(45)));
}

#[test]
fn oversized_stored_log_is_trimmed_on_next_append() {
    let store = MemoryKvStore::new();
    let oversized = (0..40).map(record).collect::<Vec<_>>();
    store
        .set(HISTORY_KEY, &serde_json::to_string(&oversized).unwrap())
        .unwrap();

    let log = HistoryRepository::new(&store).append(record(40)).unwrap();
    assert_eq!(log.len(), HISTORY_CAPACITY);
    assert_eq!(log[0], record(11));
}

#[test]
fn malformed_log_reads_as_empty_and_is_replaced() {
    let store = MemoryKvStore::new();
    store.set(HISTORY_KEY, "{not json").unwrap();
    let repo = HistoryRepository::new(&store);

    assert!(repo.load().unwrap().is_empty());
    assert_eq!(repo.append(record(1)).unwrap(), vec![record(1)]);
}

#[test]
fn clear_removes_the_log() {
    let store = MemoryKvStore::new();
    let repo = HistoryRepository::new(&store);
    repo.append(record(1)).unwrap();

    repo.clear().unwrap();

    assert!(store.is_empty());
    assert!(repo.load().unwrap().is_empty());
}

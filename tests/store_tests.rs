// Integration tests for the JSON file store.

use std::fs;
use tempfile::tempdir;
use watchlist_tracker::model::{WatchItem, WatchItemType, WatchStatus, Watchlist};
use watchlist_tracker::store::{Persistence, WatchlistStore, DATA_FILE_NAME};

#[test]
fn save_then_load_preserves_order_and_fields() {
    let dir = tempdir().unwrap();
    let mut store = WatchlistStore::new(dir.path().join(DATA_FILE_NAME));

    let mut dark = WatchItem::new("Dark", WatchItemType::TVShow);
    dark.record_episode(12);
    let mut heat = WatchItem::new("Heat", WatchItemType::Movie);
    heat.mark_completed();
    let fresh = WatchItem::new("Severance", WatchItemType::TVShow);
    let list = Watchlist::from(vec![dark, heat, fresh]);

    store.save(&list).unwrap();
    let loaded = store.load();
    assert_eq!(loaded, list);
    assert_eq!(loaded.get(1).unwrap().status, WatchStatus::Completed);
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempdir().unwrap();
    let mut store = WatchlistStore::new(dir.path().join(DATA_FILE_NAME));

    let two = Watchlist::from(vec![
        WatchItem::new("A", WatchItemType::Movie),
        WatchItem::new("B", WatchItemType::Movie),
    ]);
    store.save(&two).unwrap();
    store.save(&Watchlist::new()).unwrap();

    assert!(store.load().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "[]");
}

#[test]
fn episode_absent_is_written_as_null() {
    let dir = tempdir().unwrap();
    let store = WatchlistStore::new(dir.path().join(DATA_FILE_NAME));
    store
        .write(&Watchlist::from(vec![WatchItem::new("Heat", WatchItemType::Movie)]))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    let obj = &value[0];
    assert!(obj["id"].is_string());
    assert_eq!(obj["title"], "Heat");
    assert_eq!(obj["type"], "Movie");
    assert_eq!(obj["status"], "NotStarted");
    assert!(obj["lastWatchedEpisode"].is_null());
}

#[test]
fn garbage_file_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DATA_FILE_NAME);
    fs::write(&path, b"\xff\xfe\x00").unwrap();
    assert!(WatchlistStore::new(path).load().is_empty());
}

#[test]
fn install_dir_store_uses_fixed_file_name() {
    let store = WatchlistStore::in_install_dir();
    assert_eq!(store.path().file_name().unwrap(), DATA_FILE_NAME);
}

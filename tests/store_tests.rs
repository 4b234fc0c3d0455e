use std::fs;
use tempfile::{NamedTempFile, TempDir};

use subnet_quiz::{FileStore, MemoryStore, NullStore, Phase, ScoreStore, Session, HIGH_SCORE_KEY};

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_null_store_forgets() {
    let mut store = NullStore;
    store.set(HIGH_SCORE_KEY, "9").unwrap();
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);
}

#[test]
fn test_file_store_missing_key_is_none() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("scores");
    let store = FileStore::new(&dir);
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);
    assert!(!dir.exists());
}

#[test]
fn test_file_store_writes_base10_text() {
    let tmp = TempDir::new().unwrap();
    // the store creates missing directories on first write
    let dir = tmp.path().join("nested").join("scores");
    let mut store = FileStore::new(&dir);
    store.set(HIGH_SCORE_KEY, "42").unwrap();
    assert_eq!(fs::read_to_string(dir.join(HIGH_SCORE_KEY)).unwrap(), "42");
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("42"));
}

#[test]
fn test_file_store_unwritable_dir_is_error() {
    // a regular file where the directory should be
    let blocker = NamedTempFile::new().unwrap();
    let mut store = FileStore::new(blocker.path());
    assert!(store.set(HIGH_SCORE_KEY, "1").is_err());
}

#[test]
fn test_high_score_persists_across_sessions() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();

    let mut first = Session::with_seed(8, Box::new(FileStore::new(dir)));
    first.begin();
    assert_eq!(first.high_score(), 0);
    while first.round() < 3 {
        let lower = *first.allowed_prefixes().start();
        first.select_subnet_mask(lower);
        first.register_outcome(true);
    }
    while first.phase() != Phase::GameOver {
        first.register_outcome(false);
    }
    assert_eq!(first.high_score(), 3);

    let mut second = Session::with_seed(9, Box::new(FileStore::new(dir)));
    second.begin();
    assert_eq!(second.high_score(), 3);
}

#[test]
fn test_manual_save_and_load() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join(HIGH_SCORE_KEY), "17\n").unwrap();

    let mut session = Session::with_seed(1, Box::new(FileStore::new(dir)));
    session.load_high_score();
    assert_eq!(session.high_score(), 17);
    session.save_high_score();
    assert_eq!(fs::read_to_string(dir.join(HIGH_SCORE_KEY)).unwrap(), "17");
}

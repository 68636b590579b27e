// ABOUTME: Tests for profile and session persistence
// ABOUTME: Covers the in-memory and JSON-file stores, key validation, and logout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use tempfile::TempDir;
use vibe_fitness::constants::storage_keys;
use vibe_fitness::errors::ErrorCode;
use vibe_fitness::session::SessionController;
use vibe_fitness::storage::{
    clear_session, load_profile, load_session, save_profile, save_session, InMemoryStore,
    JsonFileStore, StateStore,
};

mod common;

fn played_session() -> SessionController {
    let mut session =
        SessionController::with_config(common::reference_female(), common::default_config());
    session.toggle_task("1").unwrap();
    session.toggle_task("2").unwrap();
    session.update_task_progress("3", 1200.0).unwrap();
    session
}

#[test]
fn test_in_memory_round_trip() {
    common::init_test_logging();
    let store = InMemoryStore::new();
    let session = played_session();

    save_session(&store, session.state()).unwrap();
    let loaded = load_session(&store).unwrap();

    assert_eq!(&loaded, session.state());
    assert_eq!(load_profile(&store).unwrap().as_ref(), session.profile());
}

#[test]
fn test_empty_store_yields_fresh_session() {
    let store = InMemoryStore::new();
    let session = load_session(&store).unwrap();

    assert!(!session.is_onboarded());
    assert_eq!(session.current_level, 1);
    assert_eq!(session.total_points, 0);
    assert_eq!(session.daily_tasks.len(), 6);
}

#[test]
fn test_profile_record_fills_missing_session() {
    let store = InMemoryStore::new();
    save_profile(&store, &common::reference_male()).unwrap();

    let session = load_session(&store).unwrap();
    assert_eq!(session.profile, Some(common::reference_male()));
    assert_eq!(session.total_points, 0);
}

#[test]
fn test_file_store_round_trip() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("state"));
    let session = played_session();

    save_session(&store, session.state()).unwrap();

    let path = dir
        .path()
        .join("state")
        .join(format!("{}.json", storage_keys::SESSION));
    assert!(path.exists());

    let reopened = JsonFileStore::new(dir.path().join("state"));
    let resumed = SessionController::from_state_with_config(
        load_session(&reopened).unwrap(),
        common::default_config(),
    );
    assert_eq!(resumed.total_points(), 100);
    assert_eq!(resumed.level(), 2);
    assert_eq!(resumed.completed_count(), 2);
}

#[test]
fn test_file_store_missing_key() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert!(store.load("absent").unwrap().is_none());
    store.remove("absent").unwrap();
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    for key in ["../escape", "a/b", "", "with space"] {
        let err = store.save(key, "{}").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "key {key:?}");
    }
}

#[test]
fn test_failed_rename_leaves_no_temporary_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    // A non-empty directory where the record belongs makes the rename fail
    let blocked = dir.path().join("blocked.json");
    fs::create_dir_all(blocked.join("inner")).unwrap();

    let err = store.save("blocked", "{}").unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.context.resource_id.as_deref(), Some("blocked"));
    assert!(!dir.path().join("blocked.json.tmp").exists());
    assert!(blocked.is_dir());
}

#[test]
fn test_corrupt_record_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    fs::write(
        dir.path().join(format!("{}.json", storage_keys::PROFILE)),
        "{ not json",
    )
    .unwrap();

    let err = load_profile(&store).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert_eq!(err.context.resource_id.as_deref(), Some(storage_keys::PROFILE));
}

#[test]
fn test_logout_clears_both_records() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    save_session(&store, played_session().state()).unwrap();

    clear_session(&store).unwrap();

    assert!(load_profile(&store).unwrap().is_none());
    let session = load_session(&store).unwrap();
    assert!(!session.is_onboarded());
    assert_eq!(session.total_points, 0);

    // Clearing twice is fine
    clear_session(&store).unwrap();
}

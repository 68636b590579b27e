// ABOUTME: Key-value persistence for the profile and session records
// ABOUTME: In-memory and JSON-file backends behind a small storage trait
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # State Storage
//!
//! Two records are persisted: the onboarded profile under
//! [`storage_keys::PROFILE`] and the session under [`storage_keys::SESSION`].
//! Logging out removes both.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info, warn};
use vibe_core::constants::storage_keys;
use vibe_core::errors::{AppError, AppResult};
use vibe_core::models::{SessionState, UserProfile};

/// String-valued key-value store
pub trait StateStore: Send + Sync {
    /// Read the raw value for `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Write the raw value for `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn save(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be modified
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Volatile store for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> AppError {
    AppError::storage("In-memory store lock poisoned")
}

impl StateStore for InMemoryStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| lock_poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_poisoned())?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` as the storage directory; it is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!("Invalid storage key '{key}'"))
                .with_resource_id(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))
            .with_resource_id(key)
            .with_source(e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!(
                "Failed to create {}: {e}",
                self.dir.display()
            ))
            .with_source(e)
        })?;

        // Write then rename so a crash never leaves a half-written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| {
                if let Err(cleanup) = fs::remove_file(&tmp) {
                    if cleanup.kind() != ErrorKind::NotFound {
                        warn!(
                            path = %tmp.display(),
                            error = %cleanup,
                            "Failed to remove temporary record"
                        );
                    }
                }
                AppError::storage(format!("Failed to write {}: {e}", path.display()))
                    .with_resource_id(key)
                    .with_source(e)
            })?;

        debug!(key, path = %path.display(), bytes = value.len(), "Saved record");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))
            .with_resource_id(key)
            .with_source(e)),
        }
    }
}

fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> AppResult<Option<T>> {
    store
        .load(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| {
                AppError::serialization(format!("Stored record '{key}' is not valid: {e}"))
                    .with_resource_id(key)
                    .with_source(e)
            })
        })
        .transpose()
}

fn save_json<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.save(key, &raw)
}

/// Load the onboarded profile
///
/// # Errors
///
/// Returns `StorageError` or `SerializationError` if the record cannot be read
pub fn load_profile(store: &dyn StateStore) -> AppResult<Option<UserProfile>> {
    load_json(store, storage_keys::PROFILE)
}

/// Persist the onboarded profile
///
/// # Errors
///
/// Returns `StorageError` if the record cannot be written
pub fn save_profile(store: &dyn StateStore, profile: &UserProfile) -> AppResult<()> {
    save_json(store, storage_keys::PROFILE, profile)
}

/// Load the session, falling back to a fresh one
///
/// A stored profile record fills in a session that has none, which happens
/// when onboarding finished but no task was touched yet.
///
/// # Errors
///
/// Returns `StorageError` or `SerializationError` if a record cannot be read
pub fn load_session(store: &dyn StateStore) -> AppResult<SessionState> {
    let mut session: SessionState =
        load_json(store, storage_keys::SESSION)?.unwrap_or_default();
    if session.profile.is_none() {
        session.profile = load_profile(store)?;
    }
    Ok(session)
}

/// Persist the session and, if present, its profile
///
/// # Errors
///
/// Returns `StorageError` if a record cannot be written
pub fn save_session(store: &dyn StateStore, session: &SessionState) -> AppResult<()> {
    if let Some(profile) = &session.profile {
        save_profile(store, profile)?;
    }
    save_json(store, storage_keys::SESSION, session)
}

/// Log out: remove both the profile and the session records
///
/// # Errors
///
/// Returns `StorageError` if a record cannot be removed
pub fn clear_session(store: &dyn StateStore) -> AppResult<()> {
    store.remove(storage_keys::PROFILE)?;
    store.remove(storage_keys::SESSION)?;
    info!("Cleared stored profile and session");
    Ok(())
}

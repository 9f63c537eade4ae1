//! JSON slot persistence
//!
//! Each mutable aggregate (favorites, reservations, user profile) is
//! serialized whole into its own file after every mutation and rehydrated
//! independently at startup. A missing or corrupt slot falls back to the
//! caller-supplied default; read failures are never surfaced upward.

use crate::paths::StoragePaths;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Slot-per-aggregate JSON storage
#[derive(Debug, Clone)]
pub struct Storage {
    paths: StoragePaths,
}

impl Storage {
    /// Open storage rooted at the given data directory, creating it if needed
    pub fn open(paths: StoragePaths) -> Result<Self, StorageError> {
        paths.ensure_dirs()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Load a slot, falling back to `default` when the file is missing or
    /// the content does not parse.
    pub fn load_slot<T: DeserializeOwned>(&self, path: &Path, default: T) -> T {
        if !path.exists() {
            return default;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Slot unreadable, using default");
                return default;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Slot corrupt, using default");
                default
            }
        }
    }

    /// Serialize the full aggregate value into its slot
    pub fn save_slot<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    // ============ Aggregate slots ============

    pub fn load_favorites(&self) -> Vec<String> {
        self.load_slot(&self.paths.favorites_file(), Vec::new())
    }

    pub fn save_favorites(&self, favorites: &[String]) -> Result<(), StorageError> {
        self.save_slot(&self.paths.favorites_file(), &favorites)
    }

    pub fn load_reservations(&self) -> Vec<shared::models::Reservation> {
        self.load_slot(&self.paths.reservations_file(), Vec::new())
    }

    pub fn save_reservations(
        &self,
        reservations: &[shared::models::Reservation],
    ) -> Result<(), StorageError> {
        self.save_slot(&self.paths.reservations_file(), &reservations)
    }

    pub fn load_user(&self) -> shared::models::UserProfile {
        self.load_slot(&self.paths.user_file(), shared::models::UserProfile::default())
    }

    pub fn save_user(&self, user: &shared::models::UserProfile) -> Result<(), StorageError> {
        self.save_slot(&self.paths.user_file(), user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(StoragePaths::new(dir.path())).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_missing_slot_returns_default() {
        let (_dir, storage) = open_temp();
        assert!(storage.load_favorites().is_empty());
        assert!(storage.load_reservations().is_empty());
        assert_eq!(storage.load_user().id, "user-001");
    }

    #[test]
    fn test_corrupt_slot_returns_default() {
        let (_dir, storage) = open_temp();
        std::fs::write(storage.paths().favorites_file(), "{not json").unwrap();
        std::fs::write(storage.paths().user_file(), "[]").unwrap();

        assert!(storage.load_favorites().is_empty());
        assert_eq!(storage.load_user().name, "Guest User");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, storage) = open_temp();
        storage
            .save_favorites(&["1".to_string(), "42".to_string()])
            .unwrap();
        assert_eq!(storage.load_favorites(), vec!["1", "42"]);
    }
}

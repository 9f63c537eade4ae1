//! StoragePaths - data directory path management
//!
//! Centralizes the layout of the local data directory.
//!
//! ## Directory structure
//!
//! ```text
//! {data-dir}/
//! ├── favorites.json      # favorites aggregate (array of restaurant ids)
//! ├── reservations.json   # reservations aggregate (array of records)
//! └── user.json           # user profile aggregate (single record)
//! ```
//!
//! One file per aggregate so that a failed or partial write to one slot
//! cannot corrupt another.

use std::path::{Path, PathBuf};

/// Data directory path manager
#[derive(Debug, Clone)]
pub struct StoragePaths {
    /// Data directory root
    base: PathBuf,
}

impl StoragePaths {
    /// Create new StoragePaths
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: data_dir.into(),
        }
    }

    /// Data directory root
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Favorites slot: {data-dir}/favorites.json
    pub fn favorites_file(&self) -> PathBuf {
        self.base.join("favorites.json")
    }

    /// Reservations slot: {data-dir}/reservations.json
    pub fn reservations_file(&self) -> PathBuf {
        self.base.join("reservations.json")
    }

    /// User profile slot: {data-dir}/user.json
    pub fn user_file(&self) -> PathBuf {
        self.base.join("user.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths = StoragePaths::new("/data/tablenow");

        assert_eq!(
            paths.favorites_file(),
            PathBuf::from("/data/tablenow/favorites.json")
        );
        assert_eq!(
            paths.reservations_file(),
            PathBuf::from("/data/tablenow/reservations.json")
        );
        assert_eq!(paths.user_file(), PathBuf::from("/data/tablenow/user.json"));
    }
}

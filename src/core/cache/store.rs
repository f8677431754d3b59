//! Marker cache snapshot store
//!
//! Persists the last successfully normalized marker set as a JSON array.
//! Reads degrade to an empty list when the snapshot is absent or corrupt;
//! writes replace the whole file through a temp-then-rename so readers
//! never observe a half-written snapshot.

use std::path::{Path, PathBuf};

use crate::domain::errors::AerisError;
use crate::domain::marker::Marker;
use crate::domain::Result;

/// File-backed store for the live marker snapshot
///
/// The snapshot's freshness marker is the file itself: presence means a
/// previous refresh succeeded, absence means there is nothing to serve.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Create a store over the given snapshot path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the cached marker set
    ///
    /// An absent, unreadable, or corrupt snapshot yields an empty list.
    /// Corruption is reported in the log but never to the caller, so a bad
    /// cache file degrades to a cache miss.
    pub fn load(&self) -> Vec<Marker> {
        if !self.path.exists() {
            tracing::info!(file = %self.path.display(), "No cached marker snapshot found");
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!(file = %self.path.display(), error = %e, "Failed to read marker cache");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Marker>>(&contents) {
            Ok(markers) => {
                tracing::info!(file = %self.path.display(), count = markers.len(), "Loaded cached markers");
                markers
            }
            Err(e) => {
                tracing::error!(file = %self.path.display(), error = %e, "Corrupt marker cache, treating as empty");
                Vec::new()
            }
        }
    }

    /// Persist a full replacement snapshot
    ///
    /// The markers are written to a sibling temp file and renamed into
    /// place, which keeps the swap atomic on the same filesystem.
    pub fn save(&self, markers: &[Marker]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AerisError::Cache(format!(
                        "Failed to create cache directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string(markers)
            .map_err(|e| AerisError::Cache(format!("Failed to serialize markers: {}", e)))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, json).map_err(|e| {
            AerisError::Cache(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;

        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            AerisError::Cache(format!(
                "Failed to move snapshot into place at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::info!(file = %self.path.display(), count = markers.len(), "Saved marker snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_markers() -> Vec<Marker> {
        vec![
            Marker::new("India", "Delhi", 175.0, 28.6139, 77.2090).with_continent("Asia"),
            Marker::new("India", "Mumbai", 95.0, 19.0760, 72.8777).with_continent("Asia"),
        ]
    }

    #[test]
    fn test_missing_snapshot_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("india_aqi.json"));

        assert!(!store.exists());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("india_aqi.json"));

        store.save(&sample_markers()).unwrap();
        assert!(store.exists());

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].city, "Delhi");
        assert_eq!(loaded[0].continent.as_deref(), Some("Asia"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("nested/cache/india_aqi.json"));

        store.save(&sample_markers()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("india_aqi.json"));

        store.save(&sample_markers()).unwrap();
        store
            .save(&[Marker::new("India", "Chennai", 60.0, 13.0827, 80.2707)])
            .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].city, "Chennai");
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("india_aqi.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = CacheStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("india_aqi.json"));

        store.save(&sample_markers()).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("india_aqi.json")]);
    }
}

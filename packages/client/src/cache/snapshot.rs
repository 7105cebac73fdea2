//! Whole-store snapshots
//!
//! A snapshot is a JSON document holding every entry of a [`ResponseCache`].
//! Saving serializes under the read lock and writes through a uniquely named
//! temporary file in the target directory that is renamed into place; loading decodes the file completely before
//! swapping the map, so a bad file never leaves a half-loaded store.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cache_key::CacheKey;
use super::response_cache::ResponseCache;
use crate::error::{self, Error, Result};
use crate::transport::HttpResponse;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    entries: BTreeMap<&'a str, &'a HttpResponse>,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    entries: BTreeMap<String, HttpResponse>,
}

impl ResponseCache {
    /// Write every entry to `path`, replacing the file if it exists.
    ///
    /// Returns the number of entries written.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written or moved into place.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();

        let (bytes, count) = {
            let entries = self.read();
            let snapshot = SnapshotOut {
                version: SNAPSHOT_VERSION,
                saved_at: Utc::now(),
                entries: entries.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            };
            let bytes = serde_json::to_vec(&snapshot).map_err(|e| error::snapshot(path, e))?;
            (bytes, entries.len())
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::Builder::new()
            .prefix(".cachet-snapshot.")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| error::io_at(dir, "create snapshot temp file", e))?;
        temp.write_all(&bytes)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| error::io_at(temp.path(), "write snapshot", e))?;
        // An unpersisted temp file is removed when dropped
        temp.persist(path)
            .map_err(|e| error::io_at(path, "rename snapshot", e.error))?;

        tracing::debug!(
            target: "cachet::cache::snapshot",
            path = %path.display(),
            entries = count,
            "Saved cache snapshot"
        );
        Ok(count)
    }

    /// Replace the whole store with the snapshot at `path`.
    ///
    /// Returns the number of entries loaded. On any error the current
    /// contents are left untouched.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Snapshot` if it is not a valid snapshot document
    /// - `Error::UnsupportedSnapshot` if it was written by another format version
    pub fn load(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|e| error::io_at(path, "read snapshot", e))?;
        let snapshot: SnapshotIn =
            serde_json::from_slice(&bytes).map_err(|e| error::snapshot(path, e))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedSnapshot(snapshot.version));
        }

        let restored: super::response_cache::core::EntryMap = snapshot
            .entries
            .into_iter()
            .map(|(key, response)| (CacheKey::from_raw(key), response))
            .collect();
        let count = restored.len();
        *self.write() = restored;

        tracing::debug!(
            target: "cachet::cache::snapshot",
            path = %path.display(),
            entries = count,
            "Loaded cache snapshot"
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cache() -> ResponseCache {
        let cache = ResponseCache::new();
        cache.set(
            CacheKey::parse("https://api.example.com/projects/").unwrap(),
            HttpResponse::ok(r#"{"projects":[]}"#)
                .with_url("https://api.example.com/projects/")
                .with_header("content-type", "application/json"),
        );
        cache.set(
            CacheKey::parse("https://api.example.com/logo.png").unwrap(),
            HttpResponse::ok(vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]),
        );
        cache
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let original = sample_cache();

        assert_eq!(original.save(&path).unwrap(), 2);

        let restored = ResponseCache::new();
        assert_eq!(restored.load(&path).unwrap(), 2);
        assert_eq!(restored.keys(), original.keys());
        for key in original.keys() {
            assert_eq!(restored.get(key.as_str()), original.get(key.as_str()));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn concurrent_saves_to_one_path_all_succeed() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let path = Arc::new(dir.path().join("cache.json"));
        let cache = Arc::new(sample_cache());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = Arc::clone(&path);
                thread::spawn(move || {
                    for _ in 0..10 {
                        cache.save(path.as_path()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let restored = ResponseCache::new();
        assert_eq!(restored.load(path.as_path()).unwrap(), 2);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn load_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        sample_cache().save(&path).unwrap();

        let cache = ResponseCache::new();
        cache.set(CacheKey::from_raw("stale"), HttpResponse::ok("old"));
        cache.load(&path).unwrap();
        assert!(!cache.contains("stale"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn missing_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let cache = sample_cache();
        let err = cache.load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.is_io());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn corrupt_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, b"{\"version\":1,\"entries\":{\"k\":").unwrap();

        let cache = sample_cache();
        let err = cache.load(&path).unwrap_err();
        assert!(matches!(err, Error::Snapshot { .. }));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn foreign_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, br#"{"version":99,"entries":{}}"#).unwrap();

        let cache = sample_cache();
        assert!(matches!(
            cache.load(&path),
            Err(Error::UnsupportedSnapshot(99))
        ));
        assert_eq!(cache.len(), 2);
    }
}

//! Watermark persistence
//!
//! One sled entry per (course, feed) pair records the update time of the
//! most recent item already delivered. This store is the single source of
//! truth for what has been processed; no other component caches that state.
//! Keys follow the pattern `LAST_PROCESSED_<FEEDKIND>_DATE_<courseId>` with
//! an RFC 3339 timestamp string as the value.

use crate::error::{ClasscordError, Result};
use crate::pipeline::record::FeedKind;
use anyhow::Context;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use std::path::PathBuf;

const KEY_PREFIX: &str = "LAST_PROCESSED_";

/// Persistent per-(course, feed) watermark store
pub struct WatermarkStore {
    db: sled::Db,
}

impl WatermarkStore {
    /// Open the store at its default location
    ///
    /// The database lives in the user's data directory. Set
    /// `CLASSCORD_STATE_DB` to point it elsewhere without changing the
    /// application data dir.
    pub fn open_default() -> Result<Self> {
        if let Ok(override_path) = std::env::var("CLASSCORD_STATE_DB") {
            return Self::open(override_path);
        }

        let proj_dirs = ProjectDirs::from("io", "classcord", "classcord")
            .ok_or_else(|| ClasscordError::Storage("Could not determine data directory".into()))?;

        let db_path = proj_dirs.data_dir().join("watermarks.db");
        Self::open(db_path)
    }

    /// Open the store at the given path, creating parent directories
    ///
    /// Primarily useful for tests pointing at a temporary directory.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for watermark database")
                .map_err(|e| ClasscordError::Storage(e.to_string()))?;
        }

        let db = sled::open(&path)
            .map_err(|e| ClasscordError::Storage(format!("failed to open {}: {}", path.display(), e)))?;
        Ok(Self { db })
    }

    fn key(course_id: &str, kind: FeedKind) -> String {
        format!("{}{}_DATE_{}", KEY_PREFIX, kind.key_fragment(), course_id)
    }

    /// Read the watermark for a (course, feed) pair
    ///
    /// Absence means no item has ever been processed for the pair. A value
    /// that fails to parse is logged and treated as absent rather than
    /// failing the feed.
    pub fn read(&self, course_id: &str, kind: FeedKind) -> Result<Option<DateTime<Utc>>> {
        let key = Self::key(course_id, kind);
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| ClasscordError::Storage(e.to_string()))?;

        let bytes = match value {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        let text = String::from_utf8_lossy(&bytes);
        match DateTime::parse_from_rfc3339(&text) {
            Ok(parsed) => Ok(Some(parsed.with_timezone(&Utc))),
            Err(e) => {
                tracing::warn!("Unparseable watermark {} = {:?}: {}", key, text, e);
                Ok(None)
            }
        }
    }

    /// Overwrite the watermark for a (course, feed) pair
    ///
    /// The caller guarantees monotonic input: the detector only produces
    /// candidates newer than the stored value.
    pub fn write(&self, course_id: &str, kind: FeedKind, timestamp: DateTime<Utc>) -> Result<()> {
        let key = Self::key(course_id, kind);
        self.db
            .insert(key.as_bytes(), timestamp.to_rfc3339().as_bytes())
            .map_err(|e| ClasscordError::Storage(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| ClasscordError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Delete every persisted watermark, returning the number removed
    ///
    /// The next run treats all fetched items as new.
    pub fn reset(&self) -> Result<usize> {
        let mut deleted = 0;
        for entry in self.db.scan_prefix(KEY_PREFIX.as_bytes()) {
            let (key, _) = entry.map_err(|e| ClasscordError::Storage(e.to_string()))?;
            self.db
                .remove(&key)
                .map_err(|e| ClasscordError::Storage(e.to_string()))?;
            tracing::info!("Deleted watermark {}", String::from_utf8_lossy(&key));
            deleted += 1;
        }
        self.db
            .flush()
            .map_err(|e| ClasscordError::Storage(e.to_string()))?;
        Ok(deleted)
    }
}

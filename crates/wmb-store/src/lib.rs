//! # wmb-store — Badge Record Store
//!
//! The ordered collection of badge records, loaded at startup and
//! rewritten wholesale after mutation. One store, explicitly owned by the
//! caller; all reads and mutations go through its methods — there is no
//! process-wide shared state.
//!
//! ## Persistence
//!
//! The backing representation is a single pretty-printed JSON array.
//! `persist()` serializes the whole collection, writes it to a sibling
//! temporary file, then renames the temporary over the target, so a
//! failure mid-write leaves the previous file intact. The overwrite is
//! idempotent.
//!
//! ## Uniqueness
//!
//! Validation checks identifier uniqueness against a snapshot; `append()`
//! re-checks on insert (compare-and-insert), so a duplicate can never
//! enter the store through a stale snapshot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use wmb_core::{BadgeId, BadgeRecord};

/// Errors raised by store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The backing file or the collection could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Insert rejected: the identifier is already present.
    #[error("badge {badge} already exists in the store")]
    DuplicateBadge {
        /// The identifier that collided.
        badge: String,
    },
}

/// The badge record store: ordered records plus the path they persist to.
#[derive(Debug)]
pub struct BadgeStore {
    path: PathBuf,
    records: Vec<BadgeRecord>,
}

impl BadgeStore {
    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store (first run); any other read
    /// or parse failure is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "store file absent, starting empty");
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let records: Vec<BadgeRecord> = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), count = records.len(), "loaded badge store");

        Ok(Self { path, records })
    }

    /// The path the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ordered view of all records, insertion order preserved.
    pub fn records(&self) -> &[BadgeRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of all badge identifiers, for the Validator.
    pub fn badge_ids(&self) -> Vec<BadgeId> {
        self.records.iter().map(|r| r.badge.clone()).collect()
    }

    /// First record with the given identifier, if any.
    pub fn find(&self, badge: &str) -> Option<&BadgeRecord> {
        self.records.iter().find(|r| r.badge.as_str() == badge)
    }

    /// Mutable access to the first record with the given identifier.
    pub fn find_mut(&mut self, badge: &str) -> Option<&mut BadgeRecord> {
        self.records.iter_mut().find(|r| r.badge.as_str() == badge)
    }

    /// Append a record, re-checking identifier uniqueness at insert time.
    ///
    /// The re-check makes the append safe even when the caller's
    /// validation snapshot has gone stale.
    pub fn append(&mut self, record: BadgeRecord) -> Result<(), StoreError> {
        if self.find(record.badge.as_str()).is_some() {
            return Err(StoreError::DuplicateBadge {
                badge: record.badge.to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Persist the whole collection to the store path.
    ///
    /// Writes to a sibling `.tmp` file first and renames it over the
    /// target, so the previous file survives a failure mid-write.
    pub fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.records)?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = self.records.len(), "persisted badge store");
        Ok(())
    }
}

/// Sibling temporary path for the atomic replace. Same directory as the
/// target so the rename never crosses a filesystem boundary.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ─── Tests ───────────────────────────────────────────────────────────

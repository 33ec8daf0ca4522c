//! Snapshot persistence backends.
//!
//! # Responsibility
//! - Load and durably persist the serialized mutation store as a single
//!   JSON document.
//! - Record the time of the last successful save.
//!
//! # Invariants
//! - Load is tolerant: a missing or unreadable snapshot yields a default
//!   state (logged), never an error; only explicit import surfaces parse
//!   failures to the caller.
//! - Persist failures are surfaced as typed errors, not swallowed.

use crate::store::snapshot;
use crate::store::state::ChecklistState;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence-layer failure.
#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot write failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Seam between the service layer and durable snapshot storage.
pub trait SnapshotStorage {
    /// Loads the persisted state, falling back to a default store when
    /// nothing usable is stored.
    fn load(&self) -> ChecklistState;

    /// Serializes and durably writes the whole store.
    fn persist(&mut self, state: &ChecklistState) -> StorageResult<()>;

    /// Time of the last successful persist within this process, if any.
    fn last_saved(&self) -> Option<SystemTime>;
}

/// File-backed storage: one compact JSON document per checklist.
#[derive(Debug)]
pub struct FileSnapshotStorage {
    path: PathBuf,
    last_saved: Option<SystemTime>,
}

impl FileSnapshotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_saved: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn load(&self) -> ChecklistState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return ChecklistState::new();
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load status=error path={} error={err}",
                    self.path.display()
                );
                return ChecklistState::new();
            }
        };

        match snapshot::state_from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    "event=snapshot_load status=corrupt path={} error={err}",
                    self.path.display()
                );
                ChecklistState::new()
            }
        }
    }

    fn persist(&mut self, state: &ChecklistState) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, snapshot::export_string(state)).map_err(|source| {
            StorageError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        self.last_saved = Some(SystemTime::now());
        info!(
            "event=snapshot_saved status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    fn last_saved(&self) -> Option<SystemTime> {
        self.last_saved
    }
}

/// In-memory storage for tests and embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemorySnapshotStorage {
    raw: Option<String>,
    last_saved: Option<SystemTime>,
}

impl MemorySnapshotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the stored snapshot, as if persisted by an earlier run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            last_saved: None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn load(&self) -> ChecklistState {
        match &self.raw {
            Some(raw) => snapshot::state_from_str(raw).unwrap_or_default(),
            None => ChecklistState::new(),
        }
    }

    fn persist(&mut self, state: &ChecklistState) -> StorageResult<()> {
        self.raw = Some(snapshot::export_string(state));
        self.last_saved = Some(SystemTime::now());
        Ok(())
    }

    fn last_saved(&self) -> Option<SystemTime> {
        self.last_saved
    }
}

//! JSON snapshot of the entity store.
//!
//! # Invariants
//! - One record array per entity kind, keyed by record id.
//! - Loaded snapshots are validated: every record passes its model checks
//!   and ids are unique within a kind.
//! - Settings, active view and insight state are session-only.

use super::store::EntityStore;
use crate::model::{EntityKind, ModelValidationError, Record};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidRecord {
        kind: EntityKind,
        id: String,
        source: ModelValidationError,
    },
    DuplicateId {
        kind: EntityKind,
        id: String,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot i/o failed: {err}"),
            Self::Json(err) => write!(f, "snapshot json is invalid: {err}"),
            Self::InvalidRecord { kind, id, source } => {
                write!(f, "invalid {kind} record `{id}`: {source}")
            }
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id `{id}`"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
            Self::DuplicateId { .. } => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl EntityStore {
    pub fn to_json_string(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let store: EntityStore = serde_json::from_str(raw)?;
        store.validate()?;
        Ok(store)
    }

    /// Checks every record and id uniqueness per kind.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        validate_records(&self.moods)?;
        validate_records(&self.notes)?;
        validate_records(&self.inbox)?;
        validate_records(&self.subscriptions)?;
        validate_records(&self.contacts)?;
        validate_records(&self.flow)?;
        validate_records(&self.flashcards)
    }
}

fn validate_records<T: Record>(records: &[T]) -> Result<(), SnapshotError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record
            .validate_record()
            .map_err(|source| SnapshotError::InvalidRecord {
                kind: T::KIND,
                id: record.id().to_string(),
                source,
            })?;
        if !seen.insert(record.id()) {
            return Err(SnapshotError::DuplicateId {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Writes `store` as pretty JSON to `path`.
pub fn save_snapshot(store: &EntityStore, path: &Path) -> Result<(), SnapshotError> {
    std::fs::write(path, store.to_json_string()?)?;
    info!(
        "event=snapshot_save module=state status=ok records={}",
        store.len()
    );
    Ok(())
}

/// Reads and validates a snapshot from `path`.
pub fn load_snapshot(path: &Path) -> Result<EntityStore, SnapshotError> {
    let raw = std::fs::read_to_string(path)?;
    let store = EntityStore::from_json_str(&raw)?;
    info!(
        "event=snapshot_load module=state status=ok records={}",
        store.len()
    );
    Ok(store)
}

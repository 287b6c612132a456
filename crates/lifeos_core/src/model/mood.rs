//! Mood entry model.
//!
//! # Invariants
//! - `level` is an ordinal on the 1..=5 scale and averages as a number.
//! - Entries are immutable once created.
//! - An empty contact selection is stored as `None`, never `Some(vec![])`.

use super::{new_record_id, require_id, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Five-step mood scale, serialized as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    Terrible = 1,
    Bad = 2,
    Neutral = 3,
    Good = 4,
    Great = 5,
}

impl MoodLevel {
    /// All levels in ascending order.
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Terrible,
        MoodLevel::Bad,
        MoodLevel::Neutral,
        MoodLevel::Good,
        MoodLevel::Great,
    ];

    /// Numeric value used for averages.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = ModelValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Terrible),
            2 => Ok(Self::Bad),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Good),
            5 => Ok(Self::Great),
            other => Err(ModelValidationError::MoodLevelOutOfRange(other)),
        }
    }
}

impl From<MoodLevel> for u8 {
    fn from(value: MoodLevel) -> Self {
        value.value()
    }
}

/// One mood check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: RecordId,
    pub level: MoodLevel,
    pub note: String,
    /// Reserved; nothing downstream reads tags yet.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub timestamp: i64,
    /// Contacts the user was with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_ids: Option<Vec<RecordId>>,
}

impl MoodEntry {
    /// Creates an entry with a generated id.
    pub fn new(
        level: MoodLevel,
        note: impl Into<String>,
        contact_ids: Vec<RecordId>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: new_record_id(),
            level,
            note: note.into(),
            tags: BTreeSet::new(),
            timestamp,
            contact_ids: normalize_contact_ids(contact_ids),
        }
    }

    /// Creates an entry with a caller-provided id (seed and import paths).
    pub fn with_id(
        id: impl Into<RecordId>,
        level: MoodLevel,
        note: impl Into<String>,
        timestamp: i64,
    ) -> Result<Self, ModelValidationError> {
        let id = id.into();
        require_id(&id)?;
        Ok(Self {
            id,
            level,
            note: note.into(),
            tags: BTreeSet::new(),
            timestamp,
            contact_ids: None,
        })
    }

    /// Returns whether `contact_id` is linked to this entry.
    pub fn involves(&self, contact_id: &str) -> bool {
        self.contact_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == contact_id))
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)
    }
}

fn normalize_contact_ids(ids: Vec<RecordId>) -> Option<Vec<RecordId>> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !id.trim().is_empty() && !unique.contains(&id) {
            unique.push(id);
        }
    }
    if unique.is_empty() {
        None
    } else {
        Some(unique)
    }
}

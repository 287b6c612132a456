//! Note model.
//!
//! Privacy is derived from the note type: a note is private iff its type is
//! `Private`.

use super::{new_record_id, require_id, require_text, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};

/// Note category used for Work Mode gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteType {
    Work,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Serialized as `type` to match the record array layout.
    #[serde(rename = "type")]
    pub kind: NoteType,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_pinned: bool,
}

impl NoteEntry {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteType,
        timestamp: i64,
    ) -> Result<Self, ModelValidationError> {
        Self::with_id(new_record_id(), title, content, kind, timestamp)
    }

    pub fn with_id(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NoteType,
        timestamp: i64,
    ) -> Result<Self, ModelValidationError> {
        let note = Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            kind,
            timestamp,
            is_pinned: false,
        };
        note.validate()?;
        Ok(note)
    }

    pub fn is_private(&self) -> bool {
        self.kind == NoteType::Private
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)?;
        require_text("title", &self.title)
    }
}

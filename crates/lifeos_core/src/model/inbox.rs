//! Capture inbox model.
//!
//! The inbox is an append-only capture stream with no privacy flag.

use super::{new_record_id, require_id, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxItemType {
    Text,
    Image,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItem {
    pub id: RecordId,
    /// Text body, or an image/link reference.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: InboxItemType,
    pub timestamp: i64,
    /// Reserved; set to `false` at capture and never flipped.
    pub processed: bool,
}

impl InboxItem {
    /// Captures new content. Callers reject blank text before this point.
    pub fn capture(content: impl Into<String>, kind: InboxItemType, timestamp: i64) -> Self {
        Self {
            id: new_record_id(),
            content: content.into(),
            kind,
            timestamp,
            processed: false,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)
    }
}

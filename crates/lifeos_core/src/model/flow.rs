//! Read-later queue model.
//!
//! # Invariants
//! - Status moves one step forward along `inbox -> reading -> archived`,
//!   wraps from `archived` back to `inbox`, and may return to `inbox` from
//!   any status.
//! - `domain` is derived from `url` when the caller does not supply one.

use super::{new_record_id, require_id, require_text, ModelValidationError, RecordId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_HOST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[^@/?#]*@)?([^/:?#]+)")
        .expect("valid url host regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Inbox,
    Reading,
    Archived,
}

impl FlowStatus {
    /// Board column order.
    pub const ALL: [FlowStatus; 3] = [FlowStatus::Inbox, FlowStatus::Reading, FlowStatus::Archived];

    /// The single forward step from this status.
    pub fn next(self) -> Self {
        match self {
            Self::Inbox => Self::Reading,
            Self::Reading => Self::Archived,
            Self::Archived => Self::Inbox,
        }
    }

    /// Returns whether moving from `self` to `target` is allowed.
    pub fn can_transition_to(self, target: FlowStatus) -> bool {
        target == FlowStatus::Inbox || target == self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowItem {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub domain: String,
    pub status: FlowStatus,
    pub category: String,
    pub timestamp: i64,
    pub is_private: bool,
}

impl FlowItem {
    /// Queues a link in `inbox` status.
    pub fn queue(
        title: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
        is_private: bool,
        timestamp: i64,
    ) -> Result<Self, ModelValidationError> {
        let url = url.into();
        let item = Self {
            id: new_record_id(),
            title: title.into(),
            domain: domain_of(&url),
            url,
            status: FlowStatus::Inbox,
            category: category.into(),
            timestamp,
            is_private,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)?;
        require_text("title", &self.title)?;
        require_text("url", &self.url)
    }
}

/// Extracts the host part of `url`, without a leading `www.`.
///
/// Returns the trimmed input when no host can be found.
pub fn domain_of(url: &str) -> String {
    let trimmed = url.trim();
    URL_HOST_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_start_matches("www.").to_ascii_lowercase())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| trimmed.to_string())
}

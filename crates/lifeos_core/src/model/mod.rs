//! Entity records held by the in-memory store.
//!
//! # Responsibility
//! - Define canonical data structures for every entity kind.
//! - Validate record invariants at construction and snapshot load.
//!
//! # Invariants
//! - Every record is identified by a non-empty string id.
//! - Every record carries a `timestamp` in Unix epoch milliseconds.
//! - Records are never hard-deleted; updates are whole-field replacements.

pub mod contact;
pub mod flashcard;
pub mod flow;
pub mod inbox;
pub mod mood;
pub mod note;
pub mod subscription;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier shared by every entity kind.
///
/// Seed data uses short ids (`c3`, `f1`); user-created records get uuid-v4
/// strings. Both are plain strings on the wire.
pub type RecordId = String;

/// Generates a fresh record id for user-created records.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Mood,
    Note,
    Inbox,
    Subscription,
    Contact,
    Flow,
    Flashcard,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Note => "note",
            Self::Inbox => "inbox",
            Self::Subscription => "subscription",
            Self::Contact => "contact",
            Self::Flow => "flow",
            Self::Flashcard => "flashcard",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of every stored record.
pub trait Record {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn validate_record(&self) -> Result<(), ModelValidationError>;
}

macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl Record for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn validate_record(&self) -> Result<(), ModelValidationError> {
                self.validate()
            }
        }
    };
}

impl_record!(mood::MoodEntry, EntityKind::Mood);
impl_record!(note::NoteEntry, EntityKind::Note);
impl_record!(inbox::InboxItem, EntityKind::Inbox);
impl_record!(subscription::SubscriptionItem, EntityKind::Subscription);
impl_record!(contact::Contact, EntityKind::Contact);
impl_record!(flow::FlowItem, EntityKind::Flow);
impl_record!(flashcard::Flashcard, EntityKind::Flashcard);

/// Validation errors for record construction and snapshot import.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Record id is blank.
    EmptyId,
    /// Mood level outside the 1..=5 scale.
    MoodLevelOutOfRange(u8),
    /// A required text field is blank after trim.
    BlankField(&'static str),
    /// Price is negative, NaN or infinite.
    InvalidPrice(f64),
    /// Contact frequency target must be at least one day.
    ZeroFrequencyTarget,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "record id must not be empty"),
            Self::MoodLevelOutOfRange(level) => {
                write!(f, "mood level {level} is outside the 1..=5 scale")
            }
            Self::BlankField(field) => write!(f, "`{field}` must not be blank"),
            Self::InvalidPrice(price) => {
                write!(f, "price must be a finite non-negative number, got {price}")
            }
            Self::ZeroFrequencyTarget => write!(f, "frequencyTargetDays must be greater than 0"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn require_id(id: &str) -> Result<(), ModelValidationError> {
    if id.trim().is_empty() {
        return Err(ModelValidationError::EmptyId);
    }
    Ok(())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ModelValidationError> {
    if value.trim().is_empty() {
        return Err(ModelValidationError::BlankField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{new_record_id, require_id, require_text, ModelValidationError};

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let first = new_record_id();
        let second = new_record_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(require_id("  "), Err(ModelValidationError::EmptyId));
        assert_eq!(
            require_text("title", "\n"),
            Err(ModelValidationError::BlankField("title"))
        );
        assert!(require_text("title", "x").is_ok());
    }
}

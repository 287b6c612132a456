//! Relationship tracker model.
//!
//! # Invariants
//! - `frequency_target_days` is at least one.
//! - `last_contact_date` is Unix epoch milliseconds.

use super::{new_record_id, require_id, require_text, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Family,
    Friend,
    Colleague,
    Partner,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    #[serde(rename = "type")]
    pub kind: ContactType,
    pub last_contact_date: i64,
    pub frequency_target_days: u32,
    pub is_private: bool,
    /// Creation time.
    #[serde(default)]
    pub timestamp: i64,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
        kind: ContactType,
        frequency_target_days: u32,
        is_private: bool,
        now_ms: i64,
    ) -> Result<Self, ModelValidationError> {
        let contact = Self {
            id: new_record_id(),
            name: name.into(),
            role: role.into(),
            avatar: avatar.into(),
            kind,
            last_contact_date: now_ms,
            frequency_target_days,
            is_private,
            timestamp: now_ms,
        };
        contact.validate()?;
        Ok(contact)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)?;
        require_text("name", &self.name)?;
        if self.frequency_target_days == 0 {
            return Err(ModelValidationError::ZeroFrequencyTarget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactType};
    use crate::model::ModelValidationError;

    #[test]
    fn zero_frequency_target_is_rejected() {
        let err = Contact::new("Mom", "Family", "*", ContactType::Family, 0, true, 0).unwrap_err();
        assert_eq!(err, ModelValidationError::ZeroFrequencyTarget);
    }

    #[test]
    fn wire_shape_uses_camel_case_and_type_field() {
        let contact =
            Contact::new("Alice", "Friend", "*", ContactType::Friend, 14, true, 42).unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["type"], "friend");
        assert_eq!(json["frequencyTargetDays"], 14);
        assert_eq!(json["lastContactDate"], 42);
        assert_eq!(json["isPrivate"], true);
    }
}

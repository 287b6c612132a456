//! Knowledge base flashcards.
//!
//! There is no spaced-repetition scheduler: every card is due.

use super::{new_record_id, require_id, require_text, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    New,
    Learning,
    Mastered,
}

/// Self-assessment after revealing a card's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Forgot,
    Remembered,
}

impl ReviewOutcome {
    pub fn mastery(self) -> Mastery {
        match self {
            Self::Forgot => Mastery::Learning,
            Self::Remembered => Mastery::Mastered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub mastery: Mastery,
    #[serde(default)]
    pub timestamp: i64,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
        timestamp: i64,
    ) -> Result<Self, ModelValidationError> {
        let card = Self {
            id: new_record_id(),
            question: question.into(),
            answer: answer.into(),
            tags: tags.into_iter().collect(),
            mastery: Mastery::New,
            timestamp,
        };
        card.validate()?;
        Ok(card)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)?;
        require_text("question", &self.question)
    }
}

//! Insight generation over recent moods and notes.
//!
//! # Responsibility
//! - Build the trimmed request sent to the external provider.
//! - Parse the provider's JSON answer strictly.
//! - Fall back to a fixed localized insight on any failure.
//!
//! # Invariants
//! - Provider failures never reach the caller; they become the fallback.
//! - A call stops counting as in flight on every exit path, including
//!   cancellation.

pub mod generator;
pub mod provider;
pub mod request;
pub mod response;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use generator::InsightGenerator;
pub use provider::{GeminiProvider, InsightProvider, UnconfiguredProvider};
pub use request::{InsightRequest, MoodDigest, NoteDigest};
pub use response::{fallback_insight, parse_insight, Insight, Sentiment};

/// Failure while obtaining an insight from the provider.
#[derive(Debug)]
pub enum InsightError {
    /// No API key is configured.
    NotConfigured,
    /// Request could not be sent or the body could not be read.
    Transport(reqwest::Error),
    /// Provider answered with a non-success status.
    Status { status: u16, body: String },
    /// Provider answered without any candidate text.
    EmptyResponse,
    /// Candidate text is not the expected JSON object.
    Malformed(String),
    /// A required field is missing, blank or out of vocabulary.
    InvalidField(&'static str),
}

impl Display for InsightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "insight provider is not configured"),
            Self::Transport(err) => write!(f, "insight request failed: {err}"),
            Self::Status { status, body } => {
                write!(f, "insight provider returned status {status}: {body}")
            }
            Self::EmptyResponse => write!(f, "insight provider returned no content"),
            Self::Malformed(message) => write!(f, "malformed insight response: {message}"),
            Self::InvalidField(field) => write!(f, "insight field `{field}` is missing or invalid"),
        }
    }
}

impl Error for InsightError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl InsightError {
    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::EmptyResponse => "empty_response",
            Self::Malformed(_) => "malformed",
            Self::InvalidField(_) => "invalid_field",
        }
    }
}

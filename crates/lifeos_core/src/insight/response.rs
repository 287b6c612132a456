//! Strict parsing of provider answers and the localized fallback.

use super::InsightError;
use crate::i18n::{t, Label, Language};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("valid code fence regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Accepts the English words (any case) and their Chinese equivalents.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" | "积极" | "正面" => Some(Self::Positive),
            "neutral" | "中性" => Some(Self::Neutral),
            "negative" | "消极" | "负面" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Positive, Language::En) => "Positive",
            (Self::Positive, Language::Zh) => "积极",
            (Self::Neutral, _) => t(language, Label::Neutral),
            (Self::Negative, Language::En) => "Negative",
            (Self::Negative, Language::Zh) => "消极",
        }
    }
}

/// Summary, sentiment and suggestion derived from recent data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub summary: String,
    pub sentiment: Sentiment,
    pub suggestion: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InsightWire {
    summary: Option<String>,
    sentiment: Option<String>,
    suggestion: Option<String>,
}

/// Parses provider text that must be a JSON object with exactly the
/// `summary`, `sentiment` and `suggestion` string fields.
///
/// A surrounding markdown code fence is tolerated.
pub fn parse_insight(text: &str) -> Result<Insight, InsightError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InsightError::EmptyResponse);
    }
    let body = CODE_FENCE_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str());

    let wire: InsightWire =
        serde_json::from_str(body).map_err(|err| InsightError::Malformed(err.to_string()))?;

    let summary = required_text(wire.summary, "summary")?;
    let suggestion = required_text(wire.suggestion, "suggestion")?;
    let sentiment = wire
        .sentiment
        .as_deref()
        .and_then(Sentiment::parse)
        .ok_or(InsightError::InvalidField("sentiment"))?;

    Ok(Insight {
        summary,
        sentiment,
        suggestion,
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, InsightError> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(InsightError::InvalidField(field))
}

/// Fixed insight returned whenever the provider cannot be used.
pub fn fallback_insight(language: Language) -> Insight {
    let (summary, suggestion) = match language {
        Language::En => (
            "Unable to analyze data at this moment. Please check your connection.",
            "Take a deep breath and focus on your top priority.",
        ),
        Language::Zh => (
            "暂时无法分析数据，请检查网络连接。",
            "深呼吸，专注于当前最重要的任务。",
        ),
    };
    Insight {
        summary: summary.to_string(),
        sentiment: Sentiment::Neutral,
        suggestion: suggestion.to_string(),
    }
}

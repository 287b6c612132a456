//! Provider request built from the most recent moods and notes.

use crate::i18n::Language;
use crate::model::mood::MoodEntry;
use crate::model::note::NoteEntry;
use serde::Serialize;

/// Entries of each kind sent to the provider.
pub const RECENT_LIMIT: usize = 5;
/// Characters of note content kept in the excerpt.
pub const NOTE_EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodDigest {
    pub level: u8,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDigest {
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRequest {
    pub language: Language,
    /// Newest first.
    pub moods: Vec<MoodDigest>,
    /// Newest first.
    pub notes: Vec<NoteDigest>,
}

impl InsightRequest {
    /// Keeps the `RECENT_LIMIT` newest entries of each kind.
    pub fn from_records(moods: &[MoodEntry], notes: &[NoteEntry], language: Language) -> Self {
        let mut recent_moods: Vec<&MoodEntry> = moods.iter().collect();
        recent_moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let mut recent_notes: Vec<&NoteEntry> = notes.iter().collect();
        recent_notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            language,
            moods: recent_moods
                .into_iter()
                .take(RECENT_LIMIT)
                .map(|mood| MoodDigest {
                    level: mood.level.value(),
                    note: mood.note.clone(),
                })
                .collect(),
            notes: recent_notes
                .into_iter()
                .take(RECENT_LIMIT)
                .map(|note| NoteDigest {
                    title: note.title.clone(),
                    excerpt: note.content.chars().take(NOTE_EXCERPT_CHARS).collect(),
                })
                .collect(),
        }
    }

    /// Renders the provider prompt.
    pub fn prompt(&self) -> String {
        let moods = self
            .moods
            .iter()
            .map(|mood| format!("Level: {}, Note: {}", mood.level, mood.note))
            .collect::<Vec<_>>()
            .join("; ");
        let notes = self
            .notes
            .iter()
            .map(|note| format!("Title: {}, Content: {}...", note.title, note.excerpt))
            .collect::<Vec<_>>()
            .join("; ");
        let language_instruction = match self.language {
            Language::En => "Respond in English.",
            Language::Zh => "Respond in Chinese (Simplified).",
        };

        format!(
            "Analyze the following user data from their personal dashboard.\n\
             Recent Moods: {moods}\n\
             Recent Notes: {notes}\n\n\
             {language_instruction}\n\
             Provide a JSON response with exactly three fields:\n\
             1. \"summary\": A brief summary of the user's recent state (max 20 words).\n\
             2. \"sentiment\": One word (Positive, Neutral, Negative).\n\
             3. \"suggestion\": A constructive suggestion for the rest of the day based on their mood and tasks.\n\n\
             Return ONLY raw JSON."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{InsightRequest, NOTE_EXCERPT_CHARS, RECENT_LIMIT};
    use crate::i18n::Language;
    use crate::model::mood::{MoodEntry, MoodLevel};
    use crate::model::note::{NoteEntry, NoteType};

    #[test]
    fn keeps_newest_entries_and_trims_note_content() {
        let moods: Vec<MoodEntry> = (0..8)
            .map(|i| MoodEntry::with_id(format!("m{i}"), MoodLevel::Good, format!("n{i}"), i).unwrap())
            .collect();
        let long_body = "x".repeat(120);
        let notes = vec![NoteEntry::with_id("1", "Plan", long_body, NoteType::Work, 3).unwrap()];

        let request = InsightRequest::from_records(&moods, &notes, Language::Zh);

        assert_eq!(request.moods.len(), RECENT_LIMIT);
        assert_eq!(request.moods[0].note, "n7");
        assert_eq!(request.moods[4].note, "n3");
        assert_eq!(request.notes[0].excerpt.chars().count(), NOTE_EXCERPT_CHARS);

        let prompt = request.prompt();
        assert!(prompt.contains("Respond in Chinese"));
        assert!(prompt.contains("Level: 4, Note: n7"));
    }
}

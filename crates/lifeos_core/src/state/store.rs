//! In-memory entity collections.

use crate::model::contact::Contact;
use crate::model::flashcard::Flashcard;
use crate::model::flow::FlowItem;
use crate::model::inbox::InboxItem;
use crate::model::mood::MoodEntry;
use crate::model::note::NoteEntry;
use crate::model::subscription::SubscriptionItem;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// One record array per entity kind, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityStore {
    pub moods: Vec<MoodEntry>,
    pub notes: Vec<NoteEntry>,
    pub inbox: Vec<InboxItem>,
    pub subscriptions: Vec<SubscriptionItem>,
    pub contacts: Vec<Contact>,
    pub flow: Vec<FlowItem>,
    pub flashcards: Vec<Flashcard>,
}

impl EntityStore {
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        find_by_id(&self.contacts, id)
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
            && self.notes.is_empty()
            && self.inbox.is_empty()
            && self.subscriptions.is_empty()
            && self.contacts.is_empty()
            && self.flow.is_empty()
            && self.flashcards.is_empty()
    }

    /// Total record count across all kinds.
    pub fn len(&self) -> usize {
        self.moods.len()
            + self.notes.len()
            + self.inbox.len()
            + self.subscriptions.len()
            + self.contacts.len()
            + self.flow.len()
            + self.flashcards.len()
    }
}

pub(crate) fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// New collection with `record` appended.
pub(crate) fn appended<T: Clone>(records: &[T], record: T) -> Vec<T> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    next
}

/// New collection with the record matching `replacement.id()` swapped out.
pub(crate) fn replaced<T: Record + Clone>(records: &[T], replacement: T) -> Vec<T> {
    records
        .iter()
        .map(|record| {
            if record.id() == replacement.id() {
                replacement.clone()
            } else {
                record.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{appended, find_by_id, replaced};
    use crate::model::note::{NoteEntry, NoteType};

    fn note(id: &str, title: &str) -> NoteEntry {
        NoteEntry::with_id(id, title, "", NoteType::Work, 0).unwrap()
    }

    #[test]
    fn append_and_replace_leave_the_source_untouched() {
        let original = vec![note("1", "a"), note("2", "b")];
        let grown = appended(&original, note("3", "c"));
        let edited = replaced(&grown, note("2", "B"));

        assert_eq!(original.len(), 2);
        assert_eq!(original[1].title, "b");
        assert_eq!(grown.len(), 3);
        assert_eq!(find_by_id(&edited, "2").unwrap().title, "B");
        assert_eq!(edited[2].id, "3");
    }
}

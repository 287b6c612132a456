//! Work Mode visibility rules.
//!
//! # Responsibility
//! - Decide per record whether it may be shown under the current mode.
//! - Provide order-preserving filters used by every view before it renders
//!   or aggregates.
//!
//! # Invariants
//! - With Work Mode off every record is visible.
//! - With Work Mode on no private record is visible.
//! - The Mood view as a whole is locked under Work Mode; mood entries carry
//!   no per-record flag.
//! - Filters are pure: filtering twice with the same mode equals filtering
//!   once.

use crate::model::contact::Contact;
use crate::model::flow::FlowItem;
use crate::model::note::{NoteEntry, NoteType};
use crate::model::subscription::SubscriptionItem;

/// Per-kind visibility under Work Mode.
pub trait Visibility {
    fn is_visible(&self, work_mode: bool) -> bool;
}

impl Visibility for NoteEntry {
    fn is_visible(&self, work_mode: bool) -> bool {
        !work_mode || self.kind == NoteType::Work
    }
}

impl Visibility for SubscriptionItem {
    fn is_visible(&self, work_mode: bool) -> bool {
        !work_mode || !self.is_private
    }
}

impl Visibility for Contact {
    fn is_visible(&self, work_mode: bool) -> bool {
        !work_mode || !self.is_private
    }
}

impl Visibility for FlowItem {
    fn is_visible(&self, work_mode: bool) -> bool {
        !work_mode || !self.is_private
    }
}

/// Iterates the visible records in their original order.
pub fn visible<T: Visibility>(records: &[T], work_mode: bool) -> impl Iterator<Item = &T> {
    records
        .iter()
        .filter(move |record| record.is_visible(work_mode))
}

/// Returns the visible records as an owned, order-preserving list.
pub fn filter_visible<T: Visibility + Clone>(records: &[T], work_mode: bool) -> Vec<T> {
    visible(records, work_mode).cloned().collect()
}

/// Returns whether the Mood view may render its content.
pub fn mood_view_unlocked(work_mode: bool) -> bool {
    !work_mode
}

#[cfg(test)]
mod tests {
    use super::{filter_visible, mood_view_unlocked, Visibility};
    use crate::model::note::{NoteEntry, NoteType};

    fn note(id: &str, kind: NoteType) -> NoteEntry {
        NoteEntry::with_id(id, "title", "body", kind, 0).unwrap()
    }

    #[test]
    fn notes_are_private_by_type() {
        assert!(note("1", NoteType::Work).is_visible(true));
        assert!(!note("2", NoteType::Private).is_visible(true));
        assert!(note("2", NoteType::Private).is_visible(false));
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let notes = vec![
            note("1", NoteType::Work),
            note("2", NoteType::Private),
            note("3", NoteType::Work),
        ];
        let once = filter_visible(&notes, true);
        let ids: Vec<_> = once.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(filter_visible(&once, true), once);
        assert_eq!(filter_visible(&notes, false), notes);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let notes: Vec<NoteEntry> = Vec::new();
        assert!(filter_visible(&notes, true).is_empty());
    }

    #[test]
    fn mood_view_locks_under_work_mode() {
        assert!(mood_view_unlocked(false));
        assert!(!mood_view_unlocked(true));
    }
}

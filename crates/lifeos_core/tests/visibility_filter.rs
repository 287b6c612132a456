use lifeos_core::state::demo_store;
use lifeos_core::{filter_visible, NoteType, Visibility};

const NOW: i64 = 1_700_000_000_000;

#[test]
fn work_mode_keeps_exactly_the_non_private_records() {
    let store = demo_store(NOW);

    let subs = filter_visible(&store.subscriptions, true);
    assert!(subs.iter().all(|sub| !sub.is_private));
    assert_eq!(
        subs.len(),
        store.subscriptions.iter().filter(|s| !s.is_private).count()
    );

    let contacts = filter_visible(&store.contacts, true);
    let ids: Vec<_> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c3", "c4"]);

    let flow = filter_visible(&store.flow, true);
    let ids: Vec<_> = flow.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["f1", "f3", "f5"]);

    let notes = filter_visible(&store.notes, true);
    assert!(notes.iter().all(|note| note.kind == NoteType::Work));
    assert_eq!(notes.len(), 2);
}

#[test]
fn life_mode_returns_every_record_in_order() {
    let store = demo_store(NOW);
    assert_eq!(filter_visible(&store.subscriptions, false), store.subscriptions);
    assert_eq!(filter_visible(&store.contacts, false), store.contacts);
    assert_eq!(filter_visible(&store.flow, false), store.flow);
    assert_eq!(filter_visible(&store.notes, false), store.notes);
}

#[test]
fn filtering_is_idempotent_for_both_modes() {
    let store = demo_store(NOW);
    for work_mode in [true, false] {
        let once = filter_visible(&store.flow, work_mode);
        assert_eq!(filter_visible(&once, work_mode), once);
        let once = filter_visible(&store.notes, work_mode);
        assert_eq!(filter_visible(&once, work_mode), once);
    }
}

#[test]
fn per_record_rule_matches_privacy_flag() {
    let store = demo_store(NOW);
    for contact in &store.contacts {
        assert_eq!(contact.is_visible(true), !contact.is_private);
        assert!(contact.is_visible(false));
    }
    for note in &store.notes {
        assert_eq!(note.is_visible(true), !note.is_private());
    }
}

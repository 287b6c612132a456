use lifeos_core::view::ViewMode;
use lifeos_core::{
    fallback_insight, Action, ActionRejected, AppState, ContactType, EntityKind, FlowStatus,
    InboxItemType, Language, Mastery, ModelValidationError, MoodLevel, NoteType, ReviewOutcome,
    Theme,
};

const NOW: i64 = 1_700_000_000_000;

fn demo() -> AppState {
    AppState::demo(NOW, Language::En)
}

#[test]
fn mood_without_level_is_rejected_and_state_unchanged() {
    let mut state = demo();
    let before = state.clone();

    let err = state
        .dispatch(
            Action::AddMood {
                level: None,
                note: "hm".to_string(),
                contact_ids: Vec::new(),
            },
            NOW,
        )
        .unwrap_err();

    assert_eq!(err, ActionRejected::MissingMoodLevel);
    assert_eq!(state, before);
}

#[test]
fn add_mood_appends_without_touching_the_previous_collection() {
    let state = demo();
    let next = state
        .reduce(
            Action::AddMood {
                level: Some(MoodLevel::Bad),
                note: "rain".to_string(),
                contact_ids: Vec::new(),
            },
            NOW + 5,
        )
        .unwrap();

    assert_eq!(state.store().moods.len(), 5);
    assert_eq!(next.store().moods.len(), 6);
    let added = next.store().moods.last().unwrap();
    assert_eq!(added.level, MoodLevel::Bad);
    assert_eq!(added.timestamp, NOW + 5);
    assert_eq!(added.contact_ids, None);
}

#[test]
fn mood_cannot_be_added_under_work_mode() {
    let mut state = demo();
    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();
    let err = state
        .dispatch(
            Action::AddMood {
                level: Some(MoodLevel::Good),
                note: String::new(),
                contact_ids: Vec::new(),
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(err, ActionRejected::MoodViewLocked);
}

#[test]
fn blank_inbox_text_is_rejected() {
    let mut state = demo();
    let err = state
        .dispatch(
            Action::AddInboxItem {
                content: "   ".to_string(),
                kind: InboxItemType::Text,
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(err, ActionRejected::BlankInboxText);

    state
        .dispatch(
            Action::AddInboxItem {
                content: "call the bank".to_string(),
                kind: InboxItemType::Text,
            },
            NOW,
        )
        .unwrap();
    let item = state.store().inbox.last().unwrap();
    assert_eq!(item.content, "call the bank");
    assert!(!item.processed);
}

#[test]
fn flow_status_follows_cycle_and_can_return_to_inbox() {
    let mut state = demo();
    let set = |state: &mut AppState, status| {
        state.dispatch(
            Action::UpdateFlowStatus {
                id: "f1".to_string(),
                status,
            },
            NOW,
        )
    };

    assert_eq!(
        set(&mut state, FlowStatus::Archived).unwrap_err(),
        ActionRejected::InvalidFlowTransition {
            from: FlowStatus::Inbox,
            to: FlowStatus::Archived,
        }
    );
    set(&mut state, FlowStatus::Reading).unwrap();
    set(&mut state, FlowStatus::Inbox).unwrap();
    set(&mut state, FlowStatus::Reading).unwrap();
    set(&mut state, FlowStatus::Archived).unwrap();
    set(&mut state, FlowStatus::Inbox).unwrap();

    let item = state.store().flow.iter().find(|f| f.id == "f1").unwrap();
    assert_eq!(item.status, FlowStatus::Inbox);
}

#[test]
fn hidden_records_cannot_be_mutated_under_work_mode() {
    let mut state = demo();
    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();

    let err = state
        .dispatch(
            Action::UpdateFlowStatus {
                id: "f2".to_string(),
                status: FlowStatus::Reading,
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::Hidden {
            kind: EntityKind::Flow,
            id: "f2".to_string(),
        }
    );

    let err = state
        .dispatch(Action::RecordContact { id: "c1".to_string() }, NOW)
        .unwrap_err();
    assert!(matches!(err, ActionRejected::Hidden { .. }));

    let err = state
        .dispatch(Action::TogglePinNote { id: "missing".to_string() }, NOW)
        .unwrap_err();
    assert!(matches!(
        err,
        ActionRejected::NotFound {
            kind: EntityKind::Note,
            ..
        }
    ));
}

#[test]
fn record_contact_resets_maintenance_clock() {
    let mut state = demo();
    state
        .dispatch(Action::RecordContact { id: "c1".to_string() }, NOW)
        .unwrap();
    let mom = state.store().contact("c1").unwrap();
    assert_eq!(mom.last_contact_date, NOW);
}

#[test]
fn flashcard_review_maps_outcome_to_mastery() {
    let mut state = demo();
    state
        .dispatch(
            Action::ReviewFlashcard {
                id: "k3".to_string(),
                outcome: ReviewOutcome::Remembered,
            },
            NOW,
        )
        .unwrap();
    state
        .dispatch(
            Action::ReviewFlashcard {
                id: "k2".to_string(),
                outcome: ReviewOutcome::Forgot,
            },
            NOW,
        )
        .unwrap();
    state
        .dispatch(
            Action::UpdateFlashcardMastery {
                id: "k4".to_string(),
                mastery: Mastery::Learning,
            },
            NOW,
        )
        .unwrap();

    let mastery = |id: &str| {
        state
            .store()
            .flashcards
            .iter()
            .find(|c| c.id == id)
            .unwrap()
            .mastery
    };
    assert_eq!(mastery("k3"), Mastery::Mastered);
    assert_eq!(mastery("k2"), Mastery::Learning);
    assert_eq!(mastery("k4"), Mastery::Learning);
}

#[test]
fn settings_toggles_flip_values() {
    let mut state = demo();
    state.dispatch(Action::ToggleTheme, NOW).unwrap();
    state.dispatch(Action::ToggleLanguage, NOW).unwrap();
    assert_eq!(state.settings().theme, Theme::Dark);
    assert_eq!(state.language(), Language::Zh);

    state.dispatch(Action::SetLanguage(Language::En), NOW).unwrap();
    assert_eq!(state.language(), Language::En);
}

#[test]
fn add_note_validates_title_and_pin_toggles() {
    let mut state = demo();
    let err = state
        .dispatch(
            Action::AddNote {
                title: " ".to_string(),
                content: "body".to_string(),
                kind: NoteType::Work,
            },
            NOW,
        )
        .unwrap_err();
    assert!(matches!(err, ActionRejected::Invalid(_)));

    state
        .dispatch(Action::TogglePinNote { id: "3".to_string() }, NOW)
        .unwrap();
    let note = state.store().notes.iter().find(|n| n.id == "3").unwrap();
    assert!(note.is_pinned);
}

#[test]
fn only_one_insight_request_is_in_flight() {
    let mut state = demo();
    state.dispatch(Action::InsightRequested, NOW).unwrap();
    assert!(state.insight().loading);
    assert_eq!(state.insight().latest_request, 1);

    assert_eq!(
        state.dispatch(Action::InsightRequested, NOW).unwrap_err(),
        ActionRejected::InsightInFlight
    );

    state
        .dispatch(
            Action::InsightResolved {
                request_id: 1,
                insight: fallback_insight(Language::En),
            },
            NOW,
        )
        .unwrap();
    assert!(!state.insight().loading);
    assert!(state.insight().current.is_some());
}

#[test]
fn late_insight_after_navigating_away_is_discarded() {
    let mut state = demo();
    state.dispatch(Action::InsightRequested, NOW).unwrap();
    state.dispatch(Action::SelectView(ViewMode::Flow), NOW).unwrap();
    assert!(!state.insight().loading);

    let err = state
        .dispatch(
            Action::InsightResolved {
                request_id: 1,
                insight: fallback_insight(Language::En),
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::StaleInsight {
            request_id: 1,
            latest: 2,
        }
    );
    assert!(state.insight().current.is_none());
}

#[test]
fn engaging_work_mode_drops_the_life_mode_insight() {
    let mut state = demo();
    state.dispatch(Action::InsightRequested, NOW).unwrap();
    state
        .dispatch(
            Action::InsightResolved {
                request_id: 1,
                insight: fallback_insight(Language::En),
            },
            NOW,
        )
        .unwrap();
    assert!(state.insight().current.is_some());

    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();

    assert!(state.insight().current.is_none());
    assert!(!state.insight().loading);
}

#[test]
fn insight_requested_in_life_mode_cannot_resolve_into_work_mode() {
    let mut state = demo();
    state.dispatch(Action::InsightRequested, NOW).unwrap();
    let titles: Vec<_> = state
        .insight_request()
        .notes
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert!(titles.iter().any(|title| title == "Journal"));

    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();
    assert!(!state.insight().loading);

    let err = state
        .dispatch(
            Action::InsightResolved {
                request_id: 1,
                insight: fallback_insight(Language::En),
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::StaleInsight {
            request_id: 1,
            latest: 2,
        }
    );
    assert!(state.insight().current.is_none());

    state.dispatch(Action::InsightRequested, NOW).unwrap();
    assert_eq!(state.insight().latest_request, 3);
}

#[test]
fn leaving_work_mode_keeps_the_work_mode_insight() {
    let mut state = demo();
    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();
    state.dispatch(Action::InsightRequested, NOW).unwrap();
    state
        .dispatch(
            Action::InsightResolved {
                request_id: 1,
                insight: fallback_insight(Language::En),
            },
            NOW,
        )
        .unwrap();

    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();
    assert!(state.insight().current.is_some());
}

#[test]
fn add_contact_starts_the_maintenance_clock_now() {
    let mut state = demo();
    state
        .dispatch(
            Action::AddContact {
                name: "Grace".to_string(),
                role: "Mentor".to_string(),
                avatar: "*".to_string(),
                kind: ContactType::Network,
                frequency_target_days: 30,
                is_private: false,
            },
            NOW + 7,
        )
        .unwrap();

    assert_eq!(state.store().contacts.len(), 6);
    let added = state.store().contacts.last().unwrap();
    assert_eq!(added.name, "Grace");
    assert_eq!(added.last_contact_date, NOW + 7);

    let err = state
        .dispatch(
            Action::AddContact {
                name: "Nobody".to_string(),
                role: String::new(),
                avatar: String::new(),
                kind: ContactType::Friend,
                frequency_target_days: 0,
                is_private: true,
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::Invalid(ModelValidationError::ZeroFrequencyTarget)
    );
    assert_eq!(state.store().contacts.len(), 6);
}

#[test]
fn queued_flow_item_lands_in_inbox_with_derived_domain() {
    let mut state = demo();
    state
        .dispatch(
            Action::QueueFlowItem {
                title: "Async Rust".to_string(),
                url: "https://www.Rust-Lang.org/learn".to_string(),
                category: "tech".to_string(),
                is_private: false,
            },
            NOW,
        )
        .unwrap();

    let item = state.store().flow.last().unwrap();
    assert_eq!(item.status, FlowStatus::Inbox);
    assert_eq!(item.domain, "rust-lang.org");

    let err = state
        .dispatch(
            Action::QueueFlowItem {
                title: "No link".to_string(),
                url: " ".to_string(),
                category: "tech".to_string(),
                is_private: false,
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::Invalid(ModelValidationError::BlankField("url"))
    );
}

#[test]
fn private_flow_item_queued_in_work_mode_is_hidden_right_away() {
    let mut state = demo();
    state.dispatch(Action::ToggleWorkMode, NOW).unwrap();
    state
        .dispatch(
            Action::QueueFlowItem {
                title: "Holiday ideas".to_string(),
                url: "https://travel.example".to_string(),
                category: "other".to_string(),
                is_private: true,
            },
            NOW,
        )
        .unwrap();

    let id = state.store().flow.last().unwrap().id.clone();
    let err = state
        .dispatch(
            Action::UpdateFlowStatus {
                id: id.clone(),
                status: FlowStatus::Reading,
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::Hidden {
            kind: EntityKind::Flow,
            id,
        }
    );
}

#[test]
fn added_flashcard_starts_as_new() {
    let mut state = demo();
    state
        .dispatch(
            Action::AddFlashcard {
                question: "What is a lifetime?".to_string(),
                answer: "The scope a reference is valid for.".to_string(),
                tags: vec!["rust".to_string(), "rust".to_string()],
            },
            NOW,
        )
        .unwrap();

    let card = state.store().flashcards.last().unwrap();
    assert_eq!(card.mastery, Mastery::New);
    assert_eq!(card.tags.len(), 1);

    let err = state
        .dispatch(
            Action::AddFlashcard {
                question: "".to_string(),
                answer: "x".to_string(),
                tags: Vec::new(),
            },
            NOW,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ActionRejected::Invalid(ModelValidationError::BlankField("question"))
    );
}

//! User actions and the reducer that applies them.
//!
//! # Invariants
//! - `reduce` is pure: it reads `&self` and returns a new state or a
//!   rejection.
//! - Records hidden by Work Mode cannot be mutated while hidden.
//! - Mood entries cannot be added while the Mood view is locked.
//! - Engaging Work Mode drops the current insight and abandons a pending one.
//! - Only one insight request is outstanding; results for any other request
//!   id are discarded.

use super::app::AppState;
use super::store::{appended, find_by_id, replaced};
use crate::i18n::Language;
use crate::insight::Insight;
use crate::model::flashcard::{Flashcard, Mastery, ReviewOutcome};
use crate::model::contact::{Contact, ContactType};
use crate::model::flow::{FlowItem, FlowStatus};
use crate::model::inbox::{InboxItem, InboxItemType};
use crate::model::mood::{MoodEntry, MoodLevel};
use crate::model::note::{NoteEntry, NoteType};
use crate::model::subscription::{NewSubscription, SubscriptionItem};
use crate::model::{EntityKind, ModelValidationError, Record, RecordId};
use crate::view::{view_after_work_mode_change, ViewMode};
use crate::visibility::{mood_view_unlocked, Visibility};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleWorkMode,
    ToggleTheme,
    ToggleLanguage,
    SetLanguage(Language),
    SelectView(ViewMode),
    /// `level` is `None` when the form was submitted without a selection.
    AddMood {
        level: Option<MoodLevel>,
        note: String,
        contact_ids: Vec<RecordId>,
    },
    AddInboxItem {
        content: String,
        kind: InboxItemType,
    },
    AddNote {
        title: String,
        content: String,
        kind: NoteType,
    },
    TogglePinNote {
        id: RecordId,
    },
    AddSubscription(NewSubscription),
    AddContact {
        name: String,
        role: String,
        avatar: String,
        kind: ContactType,
        frequency_target_days: u32,
        is_private: bool,
    },
    /// Marks a contact as reached now.
    RecordContact {
        id: RecordId,
    },
    /// Queues a link in `inbox` status; the domain is taken from the url.
    QueueFlowItem {
        title: String,
        url: String,
        category: String,
        is_private: bool,
    },
    UpdateFlowStatus {
        id: RecordId,
        status: FlowStatus,
    },
    AddFlashcard {
        question: String,
        answer: String,
        tags: Vec<String>,
    },
    UpdateFlashcardMastery {
        id: RecordId,
        mastery: Mastery,
    },
    ReviewFlashcard {
        id: RecordId,
        outcome: ReviewOutcome,
    },
    InsightRequested,
    InsightResolved {
        request_id: u64,
        insight: Insight,
    },
}

impl Action {
    /// Stable action name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleWorkMode => "toggle_work_mode",
            Self::ToggleTheme => "toggle_theme",
            Self::ToggleLanguage => "toggle_language",
            Self::SetLanguage(_) => "set_language",
            Self::SelectView(_) => "select_view",
            Self::AddMood { .. } => "add_mood",
            Self::AddInboxItem { .. } => "add_inbox_item",
            Self::AddNote { .. } => "add_note",
            Self::TogglePinNote { .. } => "toggle_pin_note",
            Self::AddSubscription(_) => "add_subscription",
            Self::AddContact { .. } => "add_contact",
            Self::RecordContact { .. } => "record_contact",
            Self::QueueFlowItem { .. } => "queue_flow_item",
            Self::AddFlashcard { .. } => "add_flashcard",
            Self::UpdateFlowStatus { .. } => "update_flow_status",
            Self::UpdateFlashcardMastery { .. } => "update_flashcard_mastery",
            Self::ReviewFlashcard { .. } => "review_flashcard",
            Self::InsightRequested => "insight_requested",
            Self::InsightResolved { .. } => "insight_resolved",
        }
    }
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRejected {
    /// Mood form submitted without a level.
    MissingMoodLevel,
    /// Inbox capture is blank after trim.
    BlankInboxText,
    /// Mood entries cannot be added under Work Mode.
    MoodViewLocked,
    NotFound { kind: EntityKind, id: RecordId },
    /// Target record is hidden by Work Mode.
    Hidden { kind: EntityKind, id: RecordId },
    InvalidFlowTransition { from: FlowStatus, to: FlowStatus },
    Invalid(ModelValidationError),
    /// An insight request is already outstanding.
    InsightInFlight,
    /// Result belongs to a superseded request.
    StaleInsight { request_id: u64, latest: u64 },
}

impl Display for ActionRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMoodLevel => write!(f, "mood level is required"),
            Self::BlankInboxText => write!(f, "inbox text must not be blank"),
            Self::MoodViewLocked => write!(f, "mood tracking is locked in work mode"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Hidden { kind, id } => write!(f, "{kind} `{id}` is hidden in work mode"),
            Self::InvalidFlowTransition { from, to } => {
                write!(f, "flow status cannot move from {from:?} to {to:?}")
            }
            Self::Invalid(err) => write!(f, "{err}"),
            Self::InsightInFlight => write!(f, "an insight request is already in flight"),
            Self::StaleInsight { request_id, latest } => write!(
                f,
                "insight result for request {request_id} superseded by request {latest}"
            ),
        }
    }
}

impl Error for ActionRejected {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelValidationError> for ActionRejected {
    fn from(value: ModelValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl ActionRejected {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingMoodLevel => "missing_mood_level",
            Self::BlankInboxText => "blank_inbox_text",
            Self::MoodViewLocked => "mood_view_locked",
            Self::NotFound { .. } => "not_found",
            Self::Hidden { .. } => "hidden",
            Self::InvalidFlowTransition { .. } => "invalid_flow_transition",
            Self::Invalid(_) => "invalid",
            Self::InsightInFlight => "insight_in_flight",
            Self::StaleInsight { .. } => "stale_insight",
        }
    }
}

impl AppState {
    /// Applies `action` at time `now_ms` and returns the next state.
    pub fn reduce(&self, action: Action, now_ms: i64) -> Result<AppState, ActionRejected> {
        let mut next = self.clone();
        match action {
            Action::ToggleWorkMode => {
                let work_mode = !self.settings.work_mode;
                next.settings.work_mode = work_mode;
                next.view = view_after_work_mode_change(self.view, work_mode);
                if work_mode {
                    // No life-mode insight, current or pending, reaches Work Mode.
                    next.insight.current = None;
                    if self.insight.loading {
                        next.insight.loading = false;
                        next.insight.latest_request += 1;
                    }
                }
            }
            Action::ToggleTheme => next.settings.theme = self.settings.theme.toggled(),
            Action::ToggleLanguage => next.settings.language = self.settings.language.toggled(),
            Action::SetLanguage(language) => next.settings.language = language,
            Action::SelectView(view) => {
                next.view = view;
                if view != ViewMode::Dashboard && self.insight.loading {
                    // Leaving the dashboard abandons the outstanding request.
                    next.insight.loading = false;
                    next.insight.latest_request += 1;
                }
            }
            Action::AddMood {
                level,
                note,
                contact_ids,
            } => {
                if !mood_view_unlocked(self.settings.work_mode) {
                    return Err(ActionRejected::MoodViewLocked);
                }
                let level = level.ok_or(ActionRejected::MissingMoodLevel)?;
                let entry = MoodEntry::new(level, note, contact_ids, now_ms);
                next.store.moods = appended(&self.store.moods, entry);
            }
            Action::AddInboxItem { content, kind } => {
                if content.trim().is_empty() {
                    return Err(ActionRejected::BlankInboxText);
                }
                let item = InboxItem::capture(content, kind, now_ms);
                next.store.inbox = appended(&self.store.inbox, item);
            }
            Action::AddNote {
                title,
                content,
                kind,
            } => {
                let note = NoteEntry::new(title, content, kind, now_ms)?;
                next.store.notes = appended(&self.store.notes, note);
            }
            Action::TogglePinNote { id } => {
                let mut note = self.visible_record(&self.store.notes, &id)?.clone();
                note.is_pinned = !note.is_pinned;
                next.store.notes = replaced(&self.store.notes, note);
            }
            Action::AddSubscription(input) => {
                let item = SubscriptionItem::create(input, now_ms)?;
                next.store.subscriptions = appended(&self.store.subscriptions, item);
            }
            Action::AddContact {
                name,
                role,
                avatar,
                kind,
                frequency_target_days,
                is_private,
            } => {
                let contact = Contact::new(
                    name,
                    role,
                    avatar,
                    kind,
                    frequency_target_days,
                    is_private,
                    now_ms,
                )?;
                next.store.contacts = appended(&self.store.contacts, contact);
            }
            Action::RecordContact { id } => {
                let mut contact = self.visible_record(&self.store.contacts, &id)?.clone();
                contact.last_contact_date = now_ms;
                next.store.contacts = replaced(&self.store.contacts, contact);
            }
            Action::QueueFlowItem {
                title,
                url,
                category,
                is_private,
            } => {
                let item = FlowItem::queue(title, url, category, is_private, now_ms)?;
                next.store.flow = appended(&self.store.flow, item);
            }
            Action::UpdateFlowStatus { id, status } => {
                let mut item = self.visible_record(&self.store.flow, &id)?.clone();
                if !item.status.can_transition_to(status) {
                    return Err(ActionRejected::InvalidFlowTransition {
                        from: item.status,
                        to: status,
                    });
                }
                item.status = status;
                next.store.flow = replaced(&self.store.flow, item);
            }
            Action::AddFlashcard {
                question,
                answer,
                tags,
            } => {
                let card = Flashcard::new(question, answer, tags, now_ms)?;
                next.store.flashcards = appended(&self.store.flashcards, card);
            }
            Action::UpdateFlashcardMastery { id, mastery } => {
                next.store.flashcards = self.with_mastery(&id, mastery)?;
            }
            Action::ReviewFlashcard { id, outcome } => {
                next.store.flashcards = self.with_mastery(&id, outcome.mastery())?;
            }
            Action::InsightRequested => {
                if self.insight.loading {
                    return Err(ActionRejected::InsightInFlight);
                }
                next.insight.loading = true;
                next.insight.latest_request = self.insight.latest_request + 1;
            }
            Action::InsightResolved {
                request_id,
                insight,
            } => {
                if !self.insight.loading || request_id != self.insight.latest_request {
                    return Err(ActionRejected::StaleInsight {
                        request_id,
                        latest: self.insight.latest_request,
                    });
                }
                next.insight.loading = false;
                next.insight.current = Some(insight);
            }
        }
        Ok(next)
    }

    /// Applies `action` in place; a rejection leaves the state unchanged.
    pub fn dispatch(&mut self, action: Action, now_ms: i64) -> Result<(), ActionRejected> {
        let name = action.name();
        match self.reduce(action, now_ms) {
            Ok(next) => {
                *self = next;
                info!(
                    "event=action_applied module=state status=ok action={} view={} work_mode={}",
                    name, self.view, self.settings.work_mode
                );
                Ok(())
            }
            Err(rejected) => {
                debug!(
                    "event=action_rejected module=state status=rejected action={} code={}",
                    name,
                    rejected.code()
                );
                Err(rejected)
            }
        }
    }

    fn visible_record<'a, T: Record + Visibility>(
        &self,
        records: &'a [T],
        id: &str,
    ) -> Result<&'a T, ActionRejected> {
        let record = find_by_id(records, id).ok_or_else(|| ActionRejected::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
        if !record.is_visible(self.settings.work_mode) {
            return Err(ActionRejected::Hidden {
                kind: T::KIND,
                id: id.to_string(),
            });
        }
        Ok(record)
    }

    fn with_mastery(&self, id: &str, mastery: Mastery) -> Result<Vec<Flashcard>, ActionRejected> {
        let mut card = find_by_id(&self.store.flashcards, id)
            .ok_or_else(|| ActionRejected::NotFound {
                kind: EntityKind::Flashcard,
                id: id.to_string(),
            })?
            .clone();
        card.mastery = mastery;
        Ok(replaced(&self.store.flashcards, card))
    }
}

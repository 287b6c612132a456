//! Per-view data projections.
//!
//! Each projection filters its own entity slice for the current mode first
//! and only then computes counts, totals and groupings.

use super::ViewMode;
use crate::i18n::Label;
use crate::insight::Insight;
use crate::metrics::{
    due_cards, energy_score, maintenance, mastery_progress, monthly_cost, upcoming_billing,
    EnergyScore, EnergyStatus, Maintenance, MasteryProgress,
};
use crate::model::contact::Contact;
use crate::model::flashcard::Flashcard;
use crate::model::flow::{FlowItem, FlowStatus};
use crate::model::inbox::InboxItem;
use crate::model::mood::{MoodEntry, MoodLevel};
use crate::model::note::NoteEntry;
use crate::model::subscription::SubscriptionItem;
use crate::state::{AppState, Settings};
use crate::visibility::{filter_visible, mood_view_unlocked};

/// Notes shown in the dashboard's recent list.
pub const DASHBOARD_RECENT_NOTES: usize = 3;
/// Mood points shown in the dashboard chart.
pub const MOOD_CHART_POINTS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent {
    Dashboard(DashboardView),
    /// Placeholder shown instead of the Mood view under Work Mode.
    MoodLocked,
    Mood(MoodView),
    Inbox(InboxView),
    Notes(NotesView),
    Subscriptions(SubscriptionsView),
    Social(SocialView),
    Flow(FlowView),
    Knowledge(KnowledgeView),
    Settings(Settings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPoint {
    pub timestamp: i64,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub greeting: Label,
    pub note_count: usize,
    pub recent_notes: Vec<NoteEntry>,
    /// Empty under Work Mode.
    pub mood_chart: Vec<MoodPoint>,
    pub insight: Option<Insight>,
    pub insight_loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodHistoryEntry {
    pub entry: MoodEntry,
    /// Linked contacts that still resolve; dangling ids are omitted.
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodView {
    /// Newest first.
    pub history: Vec<MoodHistoryEntry>,
    /// Contacts offered in the "who are you with" picker.
    pub available_contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboxView {
    pub items: Vec<InboxItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotesView {
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionsView {
    pub subscriptions: Vec<SubscriptionItem>,
    /// Raw sum across currencies.
    pub monthly_cost: f64,
    pub upcoming: Option<SubscriptionItem>,
    pub active_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub contact: Contact,
    pub energy: EnergyScore,
    pub maintenance: Maintenance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialView {
    pub contacts: Vec<ContactCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowColumn {
    pub status: FlowStatus,
    pub items: Vec<FlowItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowView {
    /// Always three columns in `FlowStatus::ALL` order.
    pub columns: Vec<FlowColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeView {
    pub cards: Vec<Flashcard>,
    pub due_count: usize,
    pub progress: MasteryProgress,
}

impl FlowStatus {
    /// Column heading.
    pub fn label(self) -> Label {
        match self {
            Self::Inbox => Label::InboxStatus,
            Self::Reading => Label::ReadingStatus,
            Self::Archived => Label::ArchivedStatus,
        }
    }
}

impl EnergyStatus {
    pub fn label(self) -> Label {
        match self {
            Self::Recharging => Label::Recharging,
            Self::Draining => Label::Draining,
            Self::Neutral => Label::Neutral,
            Self::NoData => Label::NoData,
        }
    }
}

impl MoodLevel {
    /// Caption shown under the level picker.
    pub fn label(self) -> Label {
        match self {
            Self::Terrible => Label::Rough,
            Self::Bad => Label::Bad,
            Self::Neutral => Label::Okay,
            Self::Good => Label::Good,
            Self::Great => Label::Amazing,
        }
    }
}

impl AppState {
    /// Projects the active view against the current mode.
    pub fn render(&self, now_ms: i64) -> ViewContent {
        project(self, self.view(), now_ms)
    }
}

/// Projects `view` for `state`, independent of the active view.
pub fn project(state: &AppState, view: ViewMode, now_ms: i64) -> ViewContent {
    let work_mode = state.work_mode();
    let store = state.store();
    match view {
        ViewMode::Dashboard => ViewContent::Dashboard(dashboard(state)),
        ViewMode::Mood if !mood_view_unlocked(work_mode) => ViewContent::MoodLocked,
        ViewMode::Mood => ViewContent::Mood(MoodView {
            history: store
                .moods
                .iter()
                .rev()
                .map(|entry| MoodHistoryEntry {
                    contacts: resolve_contacts(state, entry),
                    entry: entry.clone(),
                })
                .collect(),
            available_contacts: filter_visible(&store.contacts, work_mode),
        }),
        ViewMode::Inbox => ViewContent::Inbox(InboxView {
            items: store.inbox.clone(),
        }),
        ViewMode::Notes => ViewContent::Notes(NotesView {
            notes: filter_visible(&store.notes, work_mode),
        }),
        ViewMode::Subscriptions => {
            let subscriptions = filter_visible(&store.subscriptions, work_mode);
            ViewContent::Subscriptions(SubscriptionsView {
                monthly_cost: monthly_cost(&subscriptions),
                upcoming: upcoming_billing(&subscriptions).cloned(),
                active_count: subscriptions.len(),
                subscriptions,
            })
        }
        ViewMode::Social => ViewContent::Social(SocialView {
            contacts: filter_visible(&store.contacts, work_mode)
                .into_iter()
                .map(|contact| ContactCard {
                    energy: energy_score(&store.moods, &contact.id),
                    maintenance: maintenance(&contact, now_ms),
                    contact,
                })
                .collect(),
        }),
        ViewMode::Flow => {
            let visible = filter_visible(&store.flow, work_mode);
            ViewContent::Flow(FlowView {
                columns: FlowStatus::ALL
                    .into_iter()
                    .map(|status| FlowColumn {
                        status,
                        items: visible
                            .iter()
                            .filter(|item| item.status == status)
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
        }
        ViewMode::Knowledge => ViewContent::Knowledge(KnowledgeView {
            due_count: due_cards(&store.flashcards).len(),
            progress: mastery_progress(&store.flashcards),
            cards: store.flashcards.clone(),
        }),
        ViewMode::Settings => ViewContent::Settings(state.settings().clone()),
    }
}

fn dashboard(state: &AppState) -> DashboardView {
    let work_mode = state.work_mode();
    let notes = filter_visible(&state.store().notes, work_mode);
    let moods = &state.store().moods;
    let mood_chart = if mood_view_unlocked(work_mode) {
        moods[moods.len().saturating_sub(MOOD_CHART_POINTS)..]
            .iter()
            .map(|mood| MoodPoint {
                timestamp: mood.timestamp,
                level: mood.level.value(),
            })
            .collect()
    } else {
        Vec::new()
    };

    DashboardView {
        greeting: if work_mode {
            Label::FocusTime
        } else {
            Label::HelloCreator
        },
        note_count: notes.len(),
        recent_notes: notes.into_iter().take(DASHBOARD_RECENT_NOTES).collect(),
        mood_chart,
        insight: state.insight().current.clone(),
        insight_loading: state.insight().loading,
    }
}

fn resolve_contacts(state: &AppState, entry: &MoodEntry) -> Vec<Contact> {
    entry
        .contact_ids
        .iter()
        .flatten()
        .filter_map(|id| state.store().contact(id))
        .cloned()
        .collect()
}

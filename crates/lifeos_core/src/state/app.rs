//! Root application state.

use super::seed::demo_store;
use super::store::EntityStore;
use crate::i18n::Language;
use crate::insight::{Insight, InsightRequest};
use crate::model::mood::MoodEntry;
use crate::view::ViewMode;
use crate::visibility::{filter_visible, mood_view_unlocked};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Session-wide toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub work_mode: bool,
    pub theme: Theme,
    pub language: Language,
}

/// Dashboard insight slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightState {
    pub current: Option<Insight>,
    pub loading: bool,
    /// Sequence number of the latest issued request; `0` before any.
    pub latest_request: u64,
}

/// Single source of truth for the session.
///
/// Fields are read-only from outside; every change goes through
/// [`AppState::reduce`] or [`AppState::dispatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub(super) settings: Settings,
    pub(super) view: ViewMode,
    pub(super) store: EntityStore,
    pub(super) insight: InsightState,
}

impl AppState {
    pub fn new(store: EntityStore, language: Language) -> Self {
        Self {
            settings: Settings {
                language,
                ..Settings::default()
            },
            view: ViewMode::Dashboard,
            store,
            insight: InsightState::default(),
        }
    }

    /// Fresh session preloaded with demo data.
    pub fn demo(now_ms: i64, language: Language) -> Self {
        Self::new(demo_store(now_ms), language)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn work_mode(&self) -> bool {
        self.settings.work_mode
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn insight(&self) -> &InsightState {
        &self.insight
    }

    /// Provider request built from what the current mode may show: visible
    /// notes, and moods only while the Mood view is unlocked.
    pub fn insight_request(&self) -> InsightRequest {
        let work_mode = self.work_mode();
        let notes = filter_visible(&self.store.notes, work_mode);
        let moods: &[MoodEntry] = if mood_view_unlocked(work_mode) {
            &self.store.moods[..]
        } else {
            &[]
        };
        InsightRequest::from_records(moods, &notes, self.language())
    }
}

//! View routing.
//!
//! # Responsibility
//! - Enumerate the selectable views and the navigation list.
//! - Apply the forced redirect when Work Mode engages on the Mood view.
//! - Project filtered, aggregated data for the active view.
//!
//! # Invariants
//! - Any view is reachable from any view.
//! - Engaging Work Mode while on Mood redirects to Dashboard; no other view
//!   changes on a mode toggle.
//! - Mood is listed in navigation only while Work Mode is off.

pub mod projection;

use crate::i18n::{t, Label, Language};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Dashboard,
    Mood,
    Inbox,
    Notes,
    Subscriptions,
    Social,
    Flow,
    Knowledge,
    Settings,
}

impl ViewMode {
    /// Navigation order.
    pub const ALL: [ViewMode; 9] = [
        ViewMode::Dashboard,
        ViewMode::Inbox,
        ViewMode::Flow,
        ViewMode::Notes,
        ViewMode::Subscriptions,
        ViewMode::Social,
        ViewMode::Knowledge,
        ViewMode::Mood,
        ViewMode::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Mood => "mood",
            Self::Inbox => "inbox",
            Self::Notes => "notes",
            Self::Subscriptions => "subscriptions",
            Self::Social => "social",
            Self::Flow => "flow",
            Self::Knowledge => "knowledge",
            Self::Settings => "settings",
        }
    }

    /// Whether the whole view is hidden under Work Mode.
    pub fn is_private(self) -> bool {
        self == Self::Mood
    }

    pub fn label(self) -> Label {
        match self {
            Self::Dashboard => Label::Home,
            Self::Mood => Label::Mood,
            Self::Inbox => Label::Inbox,
            Self::Notes => Label::Notes,
            Self::Subscriptions => Label::Subs,
            Self::Social => Label::Social,
            Self::Flow => Label::Flow,
            Self::Knowledge => Label::Knowledge,
            Self::Settings => Label::Settings,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or_else(|| format!("unknown view `{normalized}`"))
    }
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewMode,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation entries for the current mode; private views are omitted under
/// Work Mode.
pub fn navigation(current: ViewMode, work_mode: bool, language: Language) -> Vec<NavItem> {
    ViewMode::ALL
        .into_iter()
        .filter(|view| !(work_mode && view.is_private()))
        .map(|view| NavItem {
            view,
            label: t(language, view.label()),
            active: view == current,
        })
        .collect()
}

/// Active view after Work Mode changes to `work_mode`.
pub fn view_after_work_mode_change(current: ViewMode, work_mode: bool) -> ViewMode {
    if work_mode && current.is_private() {
        ViewMode::Dashboard
    } else {
        current
    }
}

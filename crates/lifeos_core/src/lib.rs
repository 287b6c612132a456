//! Core domain logic for the personal life dashboard.
//!
//! This crate is the single source of truth for entity records, Work Mode
//! visibility, view projections, derived metrics and insight generation.

pub mod config;
pub mod i18n;
pub mod insight;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod state;
pub mod view;
pub mod visibility;

pub use config::{ConfigError, CoreConfig, InsightConfig};
pub use i18n::{t, Label, Language};
pub use insight::{
    fallback_insight, Insight, InsightError, InsightGenerator, InsightProvider, InsightRequest,
    Sentiment,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use metrics::{EnergyScore, EnergyStatus, Maintenance, MasteryProgress};
pub use model::contact::{Contact, ContactType};
pub use model::flashcard::{Flashcard, Mastery, ReviewOutcome};
pub use model::flow::{FlowItem, FlowStatus};
pub use model::inbox::{InboxItem, InboxItemType};
pub use model::mood::{MoodEntry, MoodLevel};
pub use model::note::{NoteEntry, NoteType};
pub use model::subscription::{
    BillingCycle, Currency, NewSubscription, SubscriptionCategory, SubscriptionItem,
};
pub use model::{EntityKind, ModelValidationError, Record, RecordId};
pub use state::{now_ms, Action, ActionRejected, AppState, EntityStore, Settings, Theme};
pub use view::projection::ViewContent;
pub use view::ViewMode;
pub use visibility::{filter_visible, Visibility};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Derived metrics over visible records.
//!
//! # Invariants
//! - Aggregates take records that were already filtered for the current
//!   mode; callers never aggregate before filtering.
//! - Monthly cost sums raw prices across currencies without conversion.
//! - Energy score is absent (not zero) for contacts with no linked moods.

use crate::model::contact::Contact;
use crate::model::flashcard::{Flashcard, Mastery};
use crate::model::mood::MoodEntry;
use crate::model::subscription::SubscriptionItem;
use serde::Serialize;

pub const MS_PER_DAY: i64 = 86_400_000;
/// Average mood at or above this is `Recharging`.
pub const RECHARGING_THRESHOLD: f64 = 3.5;
/// Average mood at or below this is `Draining`.
pub const DRAINING_THRESHOLD: f64 = 2.5;

/// Sums `price` over `visible` subscriptions, regardless of currency.
pub fn monthly_cost<'a>(visible: impl IntoIterator<Item = &'a SubscriptionItem>) -> f64 {
    visible.into_iter().map(|sub| sub.price).sum()
}

/// The visible subscription billed soonest.
pub fn upcoming_billing<'a>(
    visible: impl IntoIterator<Item = &'a SubscriptionItem>,
) -> Option<&'a SubscriptionItem> {
    visible.into_iter().min_by_key(|sub| sub.next_billing_date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyStatus {
    Recharging,
    Draining,
    Neutral,
    NoData,
}

/// Mood-derived energy impact of one contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyScore {
    /// Average mood level; `None` when no mood references the contact.
    pub average: Option<f64>,
    pub mood_count: usize,
    pub status: EnergyStatus,
}

/// Averages mood levels over entries linked to `contact_id`.
pub fn energy_score(moods: &[MoodEntry], contact_id: &str) -> EnergyScore {
    let (sum, count) = moods
        .iter()
        .filter(|mood| mood.involves(contact_id))
        .fold((0u32, 0usize), |(sum, count), mood| {
            (sum + u32::from(mood.level.value()), count + 1)
        });

    if count == 0 {
        return EnergyScore {
            average: None,
            mood_count: 0,
            status: EnergyStatus::NoData,
        };
    }

    let average = f64::from(sum) / count as f64;
    EnergyScore {
        average: Some(average),
        mood_count: count,
        status: classify_energy(average),
    }
}

/// Maps an average mood level to its energy status.
pub fn classify_energy(average: f64) -> EnergyStatus {
    if average >= RECHARGING_THRESHOLD {
        EnergyStatus::Recharging
    } else if average <= DRAINING_THRESHOLD {
        EnergyStatus::Draining
    } else {
        EnergyStatus::Neutral
    }
}

/// Contact maintenance state at `now_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Maintenance {
    pub days_since: i64,
    pub is_overdue: bool,
}

/// Whole days between `last_ms` and `now_ms`, rounded up.
///
/// Uses the absolute difference, so a future date also counts forward.
pub fn days_since(last_ms: i64, now_ms: i64) -> i64 {
    let diff = now_ms.saturating_sub(last_ms).saturating_abs();
    diff / MS_PER_DAY + i64::from(diff % MS_PER_DAY != 0)
}

pub fn maintenance(contact: &Contact, now_ms: i64) -> Maintenance {
    let days_since = days_since(contact.last_contact_date, now_ms);
    Maintenance {
        days_since,
        is_overdue: days_since > i64::from(contact.frequency_target_days),
    }
}

/// Card counts by mastery level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MasteryProgress {
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl MasteryProgress {
    pub fn total(&self) -> usize {
        self.new + self.learning + self.mastered
    }
}

pub fn mastery_progress(cards: &[Flashcard]) -> MasteryProgress {
    cards
        .iter()
        .fold(MasteryProgress::default(), |mut progress, card| {
            match card.mastery {
                Mastery::New => progress.new += 1,
                Mastery::Learning => progress.learning += 1,
                Mastery::Mastered => progress.mastered += 1,
            }
            progress
        })
}

/// Cards due for review. No scheduler exists, so every card is due.
pub fn due_cards(cards: &[Flashcard]) -> &[Flashcard] {
    cards
}

#[cfg(test)]
mod tests {
    use super::{classify_energy, days_since, EnergyStatus, MS_PER_DAY};

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify_energy(3.5), EnergyStatus::Recharging);
        assert_eq!(classify_energy(2.5), EnergyStatus::Draining);
        assert_eq!(classify_energy(3.0), EnergyStatus::Neutral);
    }

    #[test]
    fn days_since_rounds_partial_days_up() {
        let now = 100 * MS_PER_DAY;
        assert_eq!(days_since(now, now), 0);
        assert_eq!(days_since(now - MS_PER_DAY / 2, now), 1);
        assert_eq!(days_since(now - 8 * MS_PER_DAY, now), 8);
        assert_eq!(days_since(now + 2 * MS_PER_DAY, now), 2);
    }
}

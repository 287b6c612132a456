//! Demo data loaded into a fresh session.

use super::store::EntityStore;
use crate::metrics::MS_PER_DAY;
use crate::model::contact::{Contact, ContactType};
use crate::model::flashcard::{Flashcard, Mastery};
use crate::model::flow::{FlowItem, FlowStatus};
use crate::model::inbox::{InboxItem, InboxItemType};
use crate::model::mood::{MoodEntry, MoodLevel};
use crate::model::note::{NoteEntry, NoteType};
use crate::model::subscription::{BillingCycle, Currency, SubscriptionCategory, SubscriptionItem};
use std::collections::BTreeSet;

const MS_PER_HOUR: i64 = 3_600_000;

/// Demo store with timestamps relative to `now_ms`.
pub fn demo_store(now_ms: i64) -> EntityStore {
    EntityStore {
        moods: demo_moods(now_ms),
        notes: demo_notes(now_ms),
        inbox: demo_inbox(now_ms),
        subscriptions: demo_subscriptions(now_ms),
        contacts: demo_contacts(now_ms),
        flow: demo_flow(now_ms),
        flashcards: demo_flashcards(now_ms),
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn ids(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| value.to_string()).collect())
}

fn demo_moods(now: i64) -> Vec<MoodEntry> {
    let mood = |id: &str, level, note: &str, tag_values: &[&str], days_ago: i64, contacts| {
        MoodEntry {
            id: id.to_string(),
            level,
            note: note.to_string(),
            tags: tags(tag_values),
            timestamp: now - days_ago * MS_PER_DAY,
            contact_ids: contacts,
        }
    };
    vec![
        mood("1", MoodLevel::Good, "Productive morning", &["work", "focus"], 4, ids(&["c3"])),
        mood("2", MoodLevel::Neutral, "Tired afternoon", &["health"], 3, None),
        mood("3", MoodLevel::Great, "Finished the project!", &["achievement"], 2, ids(&["c3"])),
        mood("4", MoodLevel::Bad, "Stuck in traffic", &["commute"], 1, None),
        mood("5", MoodLevel::Good, "Nice lunch with team", &["social"], 0, ids(&["c4"])),
    ]
}

fn demo_notes(now: i64) -> Vec<NoteEntry> {
    let note = |id: &str, title: &str, content: &str, kind, age_ms: i64, is_pinned| NoteEntry {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        kind,
        timestamp: now - age_ms,
        is_pinned,
    };
    vec![
        note("1", "Q4 Strategy", "Focus on retention and user growth.", NoteType::Work, 100_000, true),
        note("2", "Gift Ideas", "Books for Mom, Gadgets for Dad.", NoteType::Private, 200_000, false),
        note("3", "Meeting Minutes", "Discussed API integrations.", NoteType::Work, 300_000, false),
        note("4", "Journal", "Feeling a bit anxious about the deadline.", NoteType::Private, 400_000, false),
    ]
}

fn demo_inbox(now: i64) -> Vec<InboxItem> {
    vec![
        InboxItem {
            id: "1".to_string(),
            content: "Check out the new React docs".to_string(),
            kind: InboxItemType::Text,
            timestamp: now,
            processed: false,
        },
        InboxItem {
            id: "2".to_string(),
            content: "https://picsum.photos/seed/ui-design/400/300".to_string(),
            kind: InboxItemType::Image,
            timestamp: now - 50_000,
            processed: false,
        },
    ]
}

fn demo_subscriptions(now: i64) -> Vec<SubscriptionItem> {
    let sub = |id: &str,
               name: &str,
               price: f64,
               currency,
               days_until: i64,
               category,
               is_private,
               icon: &str| SubscriptionItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        currency,
        cycle: BillingCycle::Monthly,
        next_billing_date: now + days_until * MS_PER_DAY,
        category,
        is_private,
        icon: Some(icon.to_string()),
        timestamp: now,
    };
    use SubscriptionCategory::{Entertainment, Life, Productivity};
    vec![
        sub("1", "Netflix", 15.99, Currency::Usd, 5, Entertainment, true, "🍿"),
        sub("2", "Spotify", 9.99, Currency::Usd, 12, Entertainment, true, "🎵"),
        sub("3", "GitHub Copilot", 10.0, Currency::Usd, 2, Productivity, false, "💻"),
        sub("4", "Gym Membership", 300.0, Currency::Cny, 20, Life, true, "💪"),
        sub("5", "Adobe Cloud", 52.99, Currency::Usd, 15, Productivity, false, "🎨"),
    ]
}

fn demo_contacts(now: i64) -> Vec<Contact> {
    let contact = |id: &str,
                   name: &str,
                   role: &str,
                   avatar: &str,
                   kind,
                   last_ms_ago: i64,
                   frequency_target_days,
                   is_private| Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        kind,
        last_contact_date: now - last_ms_ago,
        frequency_target_days,
        is_private,
        timestamp: now,
    };
    vec![
        contact("c1", "Mom", "Family", "👩‍🦳", ContactType::Family, 8 * MS_PER_DAY, 7, true),
        contact("c2", "Alice", "Best Friend", "💃", ContactType::Friend, 2 * MS_PER_DAY, 14, true),
        contact("c3", "David", "Product Manager", "👨‍💼", ContactType::Colleague, MS_PER_DAY, 3, false),
        contact("c4", "Team Alpha", "Work Group", "🚀", ContactType::Colleague, 0, 1, false),
        contact("c5", "Sarah", "Partner", "❤️", ContactType::Partner, MS_PER_DAY / 2, 1, true),
    ]
}

fn demo_flow(now: i64) -> Vec<FlowItem> {
    let item = |id: &str, title: &str, url: &str, domain: &str, status, category: &str, age_ms: i64, is_private| {
        FlowItem {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            domain: domain.to_string(),
            status,
            category: category.to_string(),
            timestamp: now - age_ms,
            is_private,
        }
    };
    vec![
        item("f1", "Advanced React Patterns", "https://react.dev", "react.dev", FlowStatus::Inbox, "tech", MS_PER_HOUR, false),
        item("f2", "Top 10 Movies of 2024", "https://imdb.com", "imdb.com", FlowStatus::Inbox, "entertainment", 2 * MS_PER_HOUR, true),
        item("f3", "Understanding Cloudflare Workers", "https://cloudflare.com", "cloudflare.com", FlowStatus::Reading, "tech", MS_PER_DAY, false),
        item("f4", "Weekend Brunch Recipes", "https://cooking.com", "cooking.com", FlowStatus::Archived, "other", 2 * MS_PER_DAY, true),
        item("f5", "Competitor Analysis Q3", "https://internal.confluence.com", "internal", FlowStatus::Reading, "tech", 20_000, false),
    ]
}

fn demo_flashcards(now: i64) -> Vec<Flashcard> {
    let card = |id: &str, question: &str, answer: &str, tag_values: &[&str], mastery| Flashcard {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        tags: tags(tag_values),
        mastery,
        timestamp: now,
    };
    vec![
        card("k1", "What does the borrow checker enforce?", "One mutable or many shared references at a time.", &["rust"], Mastery::Learning),
        card("k2", "What is the Pareto principle?", "Roughly 80% of effects come from 20% of causes.", &["productivity"], Mastery::Mastered),
        card("k3", "What does HTTP 429 mean?", "Too Many Requests.", &["web"], Mastery::New),
        card("k4", "What is a CRDT?", "A data type whose replicas merge without conflicts.", &["distributed"], Mastery::New),
    ]
}

//! Plain-text rendering of view projections.

use lifeos_core::metrics::days_since;
use lifeos_core::view::navigation;
use lifeos_core::view::projection::{
    ContactCard, DashboardView, FlowView, KnowledgeView, MoodView, SubscriptionsView,
};
use lifeos_core::{t, AppState, Insight, Label, Language, ViewContent};

/// Navigation bar followed by the active view.
pub fn render(state: &AppState, now_ms: i64) -> String {
    let language = state.language();
    let label = |key| t(language, key);

    let mode = if state.work_mode() {
        label(Label::WorkMode)
    } else {
        label(Label::LifeMode)
    };
    let nav = navigation(state.view(), state.work_mode(), language)
        .into_iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![format!("{mode}  {nav}"), String::new()];
    match state.render(now_ms) {
        ViewContent::Dashboard(view) => dashboard(&mut lines, &view, language),
        ViewContent::MoodLocked => lines.push(label(Label::HiddenMood).to_string()),
        ViewContent::Mood(view) => mood(&mut lines, &view, language),
        ViewContent::Inbox(view) => {
            lines.push(label(Label::ClearMind).to_string());
            if view.items.is_empty() {
                lines.push(label(Label::EmptyInboxTitle).to_string());
                lines.push(label(Label::EmptyInboxDesc).to_string());
            }
            for item in &view.items {
                lines.push(format!("- {}", item.content));
            }
        }
        ViewContent::Notes(view) => {
            lines.push(format!("{} ({})", label(Label::Notes), view.notes.len()));
            for note in &view.notes {
                let pin = if note.is_pinned { "* " } else { "" };
                lines.push(format!("- {pin}{}: {}", note.title, note.content));
            }
        }
        ViewContent::Subscriptions(view) => subscriptions(&mut lines, &view, language, now_ms),
        ViewContent::Social(view) => {
            lines.push(label(Label::SocialTitle).to_string());
            for card in &view.contacts {
                lines.push(contact_line(card, language));
            }
        }
        ViewContent::Flow(view) => flow(&mut lines, &view, language),
        ViewContent::Knowledge(view) => knowledge(&mut lines, &view, language),
        ViewContent::Settings(settings) => {
            lines.push(format!("work_mode={}", settings.work_mode));
            lines.push(format!("theme={:?}", settings.theme));
            lines.push(format!("language={}", settings.language));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn dashboard(lines: &mut Vec<String>, view: &DashboardView, language: Language) {
    lines.push(t(language, view.greeting).to_string());
    lines.push(format!("{}: {}", t(language, Label::ActiveNotes), view.note_count));
    for note in &view.recent_notes {
        lines.push(format!("  - {}", note.title));
    }
    if !view.mood_chart.is_empty() {
        let levels = view
            .mood_chart
            .iter()
            .map(|point| point.level.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{}: {levels}", t(language, Label::EmotionalFlow)));
    }
    if view.insight_loading {
        lines.push(t(language, Label::Analyzing).to_string());
    } else if let Some(insight) = &view.insight {
        insight_lines(lines, insight, language);
    }
}

fn insight_lines(lines: &mut Vec<String>, insight: &Insight, language: Language) {
    lines.push(format!(
        "{} [{}]",
        t(language, Label::DailySummary),
        insight.sentiment.label(language)
    ));
    lines.push(format!("  {}", insight.summary));
    lines.push(format!("  > {}", insight.suggestion));
}

fn mood(lines: &mut Vec<String>, view: &MoodView, language: Language) {
    lines.push(t(language, Label::RecentHistory).to_string());
    for item in &view.history {
        let with = item
            .contacts
            .iter()
            .map(|contact| contact.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let mut line = format!(
            "- {} ({}) {}",
            item.entry.level.value(),
            t(language, item.entry.level.label()),
            item.entry.note
        );
        if !with.is_empty() {
            line.push_str(&format!(" [{with}]"));
        }
        lines.push(line);
    }
}

fn subscriptions(
    lines: &mut Vec<String>,
    view: &SubscriptionsView,
    language: Language,
    now_ms: i64,
) {
    lines.push(t(language, Label::SubsTitle).to_string());
    lines.push(format!("{}: {:.2}", t(language, Label::MonthlyCost), view.monthly_cost));
    lines.push(format!("{}: {}", t(language, Label::ActiveSubs), view.active_count));
    if let Some(next) = &view.upcoming {
        lines.push(format!(
            "{}: {} ({}d)",
            t(language, Label::NextBilling),
            next.name,
            days_since(now_ms, next.next_billing_date)
        ));
    }
    for sub in &view.subscriptions {
        let private = if sub.is_private {
            format!(" {}", t(language, Label::Private))
        } else {
            String::new()
        };
        lines.push(format!(
            "- {} {}{:.2}{private}",
            sub.name,
            sub.currency.symbol(),
            sub.price
        ));
    }
}

fn contact_line(card: &ContactCard, language: Language) -> String {
    let status = if card.maintenance.is_overdue {
        Label::Overdue
    } else {
        Label::Healthy
    };
    let energy = match card.energy.average {
        Some(average) => format!("{} {average:.1}", t(language, card.energy.status.label())),
        None => t(language, card.energy.status.label()).to_string(),
    };
    format!(
        "- {} ({}): {} {} {}, {}, {}",
        card.contact.name,
        card.contact.role,
        card.maintenance.days_since,
        t(language, Label::DaysAgo),
        t(language, status),
        t(language, Label::EnergyImpact),
        energy
    )
}

fn flow(lines: &mut Vec<String>, view: &FlowView, language: Language) {
    lines.push(t(language, Label::FlowTitle).to_string());
    for column in &view.columns {
        lines.push(format!(
            "{} ({})",
            t(language, column.status.label()),
            column.items.len()
        ));
        for item in &column.items {
            lines.push(format!("  - {} [{}]", item.title, item.domain));
        }
    }
}

fn knowledge(lines: &mut Vec<String>, view: &KnowledgeView, language: Language) {
    lines.push(format!("{}: {}", t(language, Label::DailyReview), view.due_count));
    lines.push(format!(
        "{}: {}/{}",
        t(language, Label::MasteryProgress),
        view.progress.mastered,
        view.progress.total()
    ));
    for card in &view.cards {
        lines.push(format!("- {} ({:?})", card.question, card.mastery));
    }
}

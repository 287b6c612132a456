//! Command-line preview of the dashboard.
//!
//! # Responsibility
//! - Seed demo data (or load a snapshot) and render one view as plain text.
//! - Optionally run the insight generator against env configuration.

mod render;

use anyhow::Context;
use clap::Parser;
use lifeos_core::state::load_snapshot;
use lifeos_core::{
    init_logging_from_config, now_ms, Action, AppState, CoreConfig, InsightGenerator, Language,
    ViewMode,
};
use log::info;
use std::path::PathBuf;

/// Render one LifeOS view as text.
#[derive(Debug, Parser)]
#[command(name = "lifeos_cli", version)]
struct Cli {
    /// View to render.
    #[arg(default_value_t = ViewMode::Dashboard)]
    view: ViewMode,
    /// Engage Work Mode before rendering.
    #[arg(long)]
    work: bool,
    /// Display language (en|zh); overrides LIFEOS_LANGUAGE.
    #[arg(long = "lang")]
    language: Option<Language>,
    /// Request a dashboard insight first.
    #[arg(long)]
    insight: bool,
    /// Load records from a JSON snapshot instead of demo data.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CoreConfig::from_env().context("invalid LIFEOS_* environment")?;
    init_logging_from_config(&config).map_err(anyhow::Error::msg)?;

    let now = now_ms();
    let language = cli.language.unwrap_or(config.language);
    let mut state = match &cli.snapshot {
        Some(path) => {
            let store = load_snapshot(path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?;
            AppState::new(store, language)
        }
        None => AppState::demo(now, language),
    };

    if cli.work {
        state.dispatch(Action::ToggleWorkMode, now)?;
    }
    if cli.insight {
        state.dispatch(Action::InsightRequested, now)?;
        let request_id = state.insight().latest_request;
        let generator = InsightGenerator::from_config(&config.insight);
        let insight = generator.generate(&state.insight_request()).await;
        state.dispatch(
            Action::InsightResolved {
                request_id,
                insight,
            },
            now,
        )?;
    }
    state.dispatch(Action::SelectView(cli.view), now)?;

    info!(
        "event=cli_render module=cli status=ok view={} work_mode={} language={}",
        state.view(),
        state.work_mode(),
        state.language()
    );
    print!("{}", render::render(&state, now));
    Ok(())
}

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use vocabi_config::{Config, Settings};

pub mod command;
pub mod controller;
pub mod events;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::search::{lookup_and_translate, remember_language};
use self::render::{render_lookup_error, render_results};
use self::state::AppState;

/// Look up English words and optionally translate their definitions
#[derive(Parser, Debug)]
#[command(name = "vocabi", version)]
struct Cli {
    /// Word to look up; starts the interactive shell when omitted
    query: Option<String>,

    /// Target language for definitions (name or code), defaults to the last one used
    #[arg(short, long)]
    language: Option<String>,

    /// Settings file, overrides VOCABI_SETTINGS
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(path) = cli.settings {
        config.settings_path = path;
    }
    let settings = Settings::load_or_create(&config.settings_path);

    let state = Arc::new(AppState::from_config(config, settings)?);

    match cli.query {
        Some(query) => lookup_once(&state, &query, cli.language).await,
        None => {
            if let Some(language) = cli.language {
                state.settings.write().await.language = language;
            }
            run(state).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr, the results panel owns stdout
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vocabi=info,warn")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn lookup_once(
    state: &AppState,
    query: &str,
    language: Option<String>,
) -> anyhow::Result<ExitCode> {
    let language = match language {
        Some(language) => language,
        None => state.settings.read().await.language.clone(),
    };
    remember_language(state, &language).await;

    let ui_config = state.config.read().await.ui.clone();
    let (panel, code) = match lookup_and_translate(state, query, &language).await {
        Ok(result) => (render_results(&result, &ui_config.bullet), ExitCode::SUCCESS),
        Err(_) => (render_lookup_error(ui_config.show_tips), ExitCode::FAILURE),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", panel.trim_end())?;
    stdout.flush()?;

    Ok(code)
}

/// Run the interactive shell until it closes or Ctrl+C
async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e:#}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}

use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vocabi_types::{AppEvent, UiEvent};

use crate::state::AppState;

pub mod copy_meaning;
pub mod search;
pub mod settings;

use copy_meaning::handle_copy;
use search::handle_search;
use settings::{handle_font_change, handle_theme_change};

/// App's main loop.
///
/// Events are handled one at a time, so results reach the UI in the order the
/// searches were submitted.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    {
        let dictionary = state.dictionary.metadata();
        tracing::info!(
            "[EVENT_LOOP] Using {} ({}) at {}",
            dictionary.name,
            dictionary.language,
            dictionary.endpoint
        );
    }
    if let Some(translator) = &state.translator {
        tracing::info!("[EVENT_LOOP] Translating with {}", translator.metadata().name);
    }

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if let AppEvent::UiEvent(UiEvent::Close) = event {
            // Echo back so the UI knows every earlier result has been delivered
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            tracing::info!("[EVENT_LOOP] Close requested");
            break;
        }

        handle_events(&state, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search { query, language } => {
            handle_search(state, query, language, app_to_ui_tx).await?;
        }
        AppEvent::ChangeFont(name) => {
            handle_font_change(state, name, app_to_ui_tx).await?;
        }
        AppEvent::ChangeTheme(mode) => {
            handle_theme_change(state, mode, app_to_ui_tx).await?;
        }
        AppEvent::CopyMeaning(text) => {
            handle_copy(text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(_)
        | AppEvent::ShowResults(_)
        | AppEvent::ShowLookupError { .. }
        | AppEvent::ApplyFont(_)
        | AppEvent::ApplyTheme(_)
        | AppEvent::ShowNotice(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

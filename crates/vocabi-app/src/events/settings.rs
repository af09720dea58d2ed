use kanal::AsyncSender;
use vocabi_types::{AppEvent, AppearanceMode, FontSpec};

use crate::render::FONT_CHANGE_FAILED;
use crate::state::AppState;

pub async fn handle_font_change(
    state: &AppState,
    name: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let font = {
        let settings = state.settings.read().await;
        FontSpec::new(name, settings.selected_font.size)
    };

    let font = match font {
        Ok(font) => font,
        Err(e) => {
            tracing::warn!("Font change rejected: {e}");
            app_to_ui_tx
                .send(AppEvent::ShowNotice(FONT_CHANGE_FAILED.to_string()))
                .await?;
            return Ok(());
        }
    };

    state.settings.write().await.selected_font = font.clone();
    state.save_settings().await;
    tracing::info!("Font changed to {font}");

    app_to_ui_tx.send(AppEvent::ApplyFont(font)).await?;
    Ok(())
}

pub async fn handle_theme_change(
    state: &AppState,
    mode: AppearanceMode,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.settings.write().await.appearance_mode = mode;
    state.save_settings().await;
    tracing::info!("Appearance mode changed to {mode}");

    app_to_ui_tx.send(AppEvent::ApplyTheme(mode)).await?;
    Ok(())
}

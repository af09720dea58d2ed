use kanal::AsyncSender;
use vocabi_types::AppEvent;

use crate::render::COPY_FAILED;

pub async fn handle_copy(text: String, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    match vocabi_io::clipboard::copy_text_async(text).await {
        Ok(()) => tracing::info!("Copied results panel to clipboard"),
        Err(e) => {
            tracing::error!("Clipboard copy failed: {e:#}");
            app_to_ui_tx
                .send(AppEvent::ShowNotice(COPY_FAILED.to_string()))
                .await?;
        }
    }

    Ok(())
}

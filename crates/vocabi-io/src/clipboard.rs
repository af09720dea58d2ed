use anyhow::Context;
use arboard::Clipboard;

/// Replace the system clipboard contents with `text`
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to write clipboard")?;
    tracing::debug!("Copied {} chars to clipboard", text.chars().count());
    Ok(())
}

/// Clipboard access blocks on some platforms, keep it off the runtime threads
pub async fn copy_text_async(text: String) -> Result<(), anyhow::Error> {
    tokio::task::spawn_blocking(move || copy_text(&text))
        .await
        .context("Clipboard task panicked")?
}

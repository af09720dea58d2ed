use std::io::{self, BufRead, Write};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vocabi_config::ui::UiConfig;
use vocabi_types::{AppEvent, AppearanceMode, FontSpec, UiEvent};

use crate::command::{Command, HELP, parse_command};
use crate::render::{Palette, paint, render_lookup_error, render_results};
use crate::state::AppState;

/// Terminal front end: the search box, language box, menu and results panel
pub struct TerminalUi<W> {
    out: W,
    config: UiConfig,
    color: bool,
    /// Text currently shown in the results panel
    panel: String,
    language: String,
    font: FontSpec,
    appearance: AppearanceMode,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(
        out: W,
        config: UiConfig,
        color: bool,
        language: String,
        font: FontSpec,
        appearance: AppearanceMode,
    ) -> Self {
        Self {
            out,
            config,
            color,
            panel: String::new(),
            language,
            font,
            appearance,
        }
    }

    pub fn panel(&self) -> &str {
        &self.panel
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn appearance(&self) -> AppearanceMode {
        self.appearance
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Turn a typed line into the event to send to the backend, if any
    pub fn handle_input(&mut self, line: &str) -> io::Result<Option<AppEvent>> {
        let event = match parse_command(line) {
            Command::Search(query) => Some(AppEvent::Search {
                query,
                language: self.language.clone(),
            }),
            Command::Language(language) => {
                writeln!(self.out, "Language: {language}")?;
                self.language = language;
                None
            }
            Command::Font(name) => Some(AppEvent::ChangeFont(name)),
            Command::Theme(mode) => Some(AppEvent::ChangeTheme(mode)),
            Command::Copy => Some(AppEvent::CopyMeaning(self.panel.clone())),
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                None
            }
            Command::Quit => Some(AppEvent::UiEvent(UiEvent::Close)),
            Command::Invalid(message) => {
                writeln!(self.out, "{message}")?;
                None
            }
            Command::Empty => None,
        };
        self.out.flush()?;
        Ok(event)
    }

    /// Apply an event from the backend. Returns `false` once the UI should close.
    pub fn handle_event(&mut self, event: AppEvent) -> io::Result<bool> {
        match event {
            AppEvent::ShowResults(result) => {
                tracing::debug!("[UI] Showing {} definitions", result.definitions.len());
                if let Some(reason) = &result.translation_failure {
                    tracing::debug!("[UI] Translation stopped early: {reason}");
                }
                self.panel = render_results(&result, &self.config.bullet);
                self.draw_panel()?;
            }
            AppEvent::ShowLookupError { query, detail } => {
                tracing::debug!("[UI] Lookup of '{query}' failed: {detail}");
                self.panel = render_lookup_error(self.config.show_tips);
                self.draw_panel()?;
            }
            AppEvent::ShowNotice(message) => {
                self.panel.push_str(&message);
                self.draw(&message)?;
            }
            AppEvent::ApplyFont(font) => {
                writeln!(self.out, "Font: {font}")?;
                self.font = font;
            }
            AppEvent::ApplyTheme(mode) => {
                writeln!(self.out, "Theme: {mode}")?;
                self.appearance = mode;
                if !self.panel.is_empty() {
                    self.draw_panel()?;
                }
            }
            AppEvent::BackendReady => {
                writeln!(
                    self.out,
                    "Vocabi ready. Language: {}, font: {}, theme: {}. Type :help for commands.",
                    self.language, self.font, self.appearance
                )?;
            }
            AppEvent::UiEvent(UiEvent::Close) => {
                self.out.flush()?;
                return Ok(false);
            }
            _ => {}
        }
        self.out.flush()?;
        Ok(true)
    }

    fn draw_panel(&mut self) -> io::Result<()> {
        let panel = self.panel.clone();
        self.draw(&panel)
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            write!(self.out, "{}", paint(text, Palette::for_mode(self.appearance)))?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }
}

/// Read stdin on a dedicated thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(16);

    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
        tracing::debug!("[UI] stdin closed");
    });

    rx.to_async()
}

/// Drive `ui` from typed lines and backend events until closed or cancelled.
///
/// End of input or `:quit` sends a close request; the loop then keeps drawing
/// backend events until the backend echoes the close back.
pub async fn run_terminal<W: Write>(
    ui: &mut TerminalUi<W>,
    input: AsyncReceiver<String>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut input_open = true;

    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                if !ui.handle_event(event?)? {
                    break;
                }
            }
            line = input.recv(), if input_open => {
                let event = match line {
                    Ok(line) => ui.handle_input(&line)?,
                    Err(_) => Some(AppEvent::UiEvent(UiEvent::Close)),
                };
                if let Some(event) = event {
                    if let AppEvent::UiEvent(UiEvent::Close) = event {
                        input_open = false;
                    }
                    ui_to_app_tx.send(event).await?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Cancelled");
                break;
            }
        }
    }

    Ok(())
}

pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_config = state.config.read().await.ui.clone();
    let (language, font, appearance) = {
        let settings = state.settings.read().await;
        (
            settings.language.clone(),
            settings.selected_font.clone(),
            settings.appearance_mode,
        )
    };

    let color = atty::is(atty::Stream::Stdout);
    let mut ui = TerminalUi::new(io::stdout(), ui_config, color, language, font, appearance);

    run_terminal(
        &mut ui,
        spawn_stdin_reader(),
        app_to_ui_rx,
        ui_to_app_tx,
        cancel,
    )
    .await
}

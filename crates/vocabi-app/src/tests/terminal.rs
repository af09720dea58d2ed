use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use vocabi_config::ui::UiConfig;
use vocabi_types::{AppEvent, AppearanceMode, DisplayResult, FontSpec, UiEvent};

use super::test_state;
use crate::events::event_loop;
use crate::render::{LOOKUP_FAILED, TRANSLATE_FAILED};
use crate::ui::{TerminalUi, run_terminal};

fn ui() -> TerminalUi<Vec<u8>> {
    TerminalUi::new(
        Vec::new(),
        UiConfig::default(),
        false,
        "english".to_string(),
        FontSpec::default(),
        AppearanceMode::Dark,
    )
}

fn output(ui: TerminalUi<Vec<u8>>) -> String {
    String::from_utf8(ui.into_output()).unwrap()
}

#[test]
fn search_uses_current_language() {
    let mut ui = ui();

    ui.handle_input(":lang fr").unwrap();
    let event = ui.handle_input("run").unwrap();

    match event {
        Some(AppEvent::Search { query, language }) => {
            assert_eq!(query, "run");
            assert_eq!(language, "fr");
        }
        other => panic!("Wrong event type: {other:?}"),
    }
    assert_eq!(ui.language(), "fr");
}

#[test]
fn copy_sends_panel_text() {
    let mut ui = ui();
    ui.handle_event(AppEvent::ShowResults(DisplayResult {
        word: "run".to_string(),
        definitions: vec!["move fast".to_string()],
        translation_failure: None,
    }))
    .unwrap();

    match ui.handle_input(":copy").unwrap() {
        Some(AppEvent::CopyMeaning(text)) => assert_eq!(text, "■  move fast\n\n"),
        other => panic!("Wrong event type: {other:?}"),
    }
}

#[test]
fn lookup_error_replaces_panel() {
    let mut ui = ui();
    ui.handle_event(AppEvent::ShowResults(DisplayResult {
        word: "run".to_string(),
        definitions: vec!["move fast".to_string()],
        translation_failure: None,
    }))
    .unwrap();

    ui.handle_event(AppEvent::ShowLookupError {
        query: "qwxz".to_string(),
        detail: "Dictionary returned no entries".to_string(),
    })
    .unwrap();

    assert!(ui.panel().starts_with(LOOKUP_FAILED));
    assert!(!ui.panel().contains("move fast"));
}

#[test]
fn translation_failure_is_rendered_after_prefix() {
    let mut ui = ui();

    ui.handle_event(AppEvent::ShowResults(DisplayResult {
        word: "run".to_string(),
        definitions: vec!["[de] move fast".to_string()],
        translation_failure: Some("API error: HTTP 500".to_string()),
    }))
    .unwrap();

    assert_eq!(ui.panel(), format!("■  [de] move fast\n\n{TRANSLATE_FAILED}"));
}

#[test]
fn theme_and_font_updates_are_tracked() {
    let mut ui = ui();

    assert!(ui.handle_event(AppEvent::ApplyTheme(AppearanceMode::Light)).unwrap());
    assert!(ui.handle_event(AppEvent::ApplyFont(FontSpec::new("Consolas", 12).unwrap())).unwrap());

    assert_eq!(ui.appearance(), AppearanceMode::Light);
    assert_eq!(ui.font().family, "Consolas");
    let out = output(ui);
    assert!(out.contains("Theme: Light"));
    assert!(out.contains("Font: Consolas 12"));
}

#[test]
fn close_event_ends_ui() {
    let mut ui = ui();
    assert!(!ui.handle_event(AppEvent::UiEvent(UiEvent::Close)).unwrap());
}

#[test]
fn quit_requests_close() {
    let mut ui = ui();
    assert!(matches!(
        ui.handle_input(":quit").unwrap(),
        Some(AppEvent::UiEvent(UiEvent::Close))
    ));
}

#[tokio::test]
async fn shell_session_renders_every_result_before_exit() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir.path().join("settings.json"), None);

    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(16);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(16);
    let (input_tx, input_rx) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();

    let backend = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        cancel.child_token(),
    ));

    for line in ["run", "zzzznotaword", ":quit"] {
        input_tx.send(line.to_string()).await.unwrap();
    }

    let mut ui = ui();
    let session = run_terminal(&mut ui, input_rx, app_to_ui_rx, ui_to_app_tx, cancel);
    let result = timeout(Duration::from_secs(2), session).await;
    assert!(matches!(result, Ok(Ok(()))), "session did not finish cleanly");

    let backend = timeout(Duration::from_secs(2), backend).await;
    assert!(matches!(backend, Ok(Ok(Ok(())))));

    let out = output(ui);
    assert!(out.contains("Vocabi ready"));
    let run_at = out.find("■  move fast").expect("definitions rendered");
    let error_at = out.find(LOOKUP_FAILED).expect("error rendered");
    assert!(run_at < error_at);
    assert!(out.contains("Check for Typos"));
}

#[tokio::test]
async fn end_of_input_closes_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir.path().join("settings.json"), None);

    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(16);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(16);
    let (input_tx, input_rx) = kanal::bounded_async::<String>(16);
    let cancel = CancellationToken::new();

    let backend = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        cancel.child_token(),
    ));

    input_tx.send("run".to_string()).await.unwrap();
    drop(input_tx);

    let mut ui = ui();
    let session = run_terminal(&mut ui, input_rx, app_to_ui_rx, ui_to_app_tx, cancel);
    assert!(matches!(
        timeout(Duration::from_secs(2), session).await,
        Ok(Ok(()))
    ));
    assert!(matches!(
        timeout(Duration::from_secs(2), backend).await,
        Ok(Ok(Ok(())))
    ));
    assert!(output(ui).contains("■  move fast"));
}

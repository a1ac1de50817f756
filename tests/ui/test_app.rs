//! Rendering tests for the demo application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use tij_empty::app::App;
use tij_empty::keys;
use tij_empty::model::EmptyDataSetState;

fn screen(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..24)
        .map(|y| (0..60).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn shows(rows: &[String], text: &str) -> bool {
    rows.iter().any(|row| row.contains(text))
}

#[test]
fn test_app_starts_with_placeholder() {
    let mut app = App::new();
    let rows = screen(&mut app);
    assert!(shows(&rows, "No Data"));
    assert!(shows(&rows, "There is nothing in this list yet."));
    assert!(shows(&rows, "Add item"));
    assert!(shows(&rows, "Items (0)"));
}

#[test]
fn test_error_state_shows_retry() {
    let mut app = App::new();
    press(&mut app, keys::SHOW_ERROR);
    let rows = screen(&mut app);
    assert_eq!(app.placeholder_state(), EmptyDataSetState::Error);
    assert!(shows(&rows, "Failed to load items"));
    assert!(shows(&rows, "Retry"));
    assert!(rows[23].contains("error · 0 items"));
}

#[test]
fn test_loading_state_has_no_button() {
    let mut app = App::new();
    press(&mut app, keys::SHOW_LOADING);
    let rows = screen(&mut app);
    assert!(shows(&rows, "Loading…"));
    assert!(shows(&rows, "fetching"));
    assert!(!shows(&rows, "Add item"));
    assert!(!shows(&rows, "Retry"));
}

#[test]
fn test_enter_adds_first_item() {
    let mut app = App::new();
    press(&mut app, keys::ACTIVATE);
    let rows = screen(&mut app);
    assert_eq!(app.item_count(), 1);
    assert!(shows(&rows, "Item 1"));
    assert!(!shows(&rows, "No Data"));
}

#[test]
fn test_clearing_items_restores_placeholder() {
    let mut app = App::new();
    press(&mut app, keys::ADD_ITEM);
    press(&mut app, keys::ADD_ITEM);
    assert!(!shows(&screen(&mut app), "No Data"));

    press(&mut app, keys::CLEAR_ITEMS);
    assert!(shows(&screen(&mut app), "No Data"));
}

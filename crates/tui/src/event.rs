//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{sort_key_field, App, FileDialogKind, InputMode, Tab};

/// Poll for the next terminal event, if any arrives within `timeout`.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global shortcuts (work in all modes)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if app.input_mode == InputMode::Normal => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::FileDialog => handle_file_dialog_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Tab navigation
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('1') => app.goto_tab(1),
        KeyCode::Char('2') => app.goto_tab(2),
        KeyCode::Char('3') => app.goto_tab(3),

        // New analysis: discard the session, back to the load screen
        KeyCode::Char('r') if app.has_session() => app.reset(),

        // Tab-specific actions
        _ => match app.current_tab {
            Tab::Load => handle_load_tab_keys(app, key),
            Tab::Overview => handle_overview_tab_keys(app, key),
            Tab::Results => handle_results_tab_keys(app, key),
        },
    }
}

fn handle_load_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('d') => app.load_demo(),
        KeyCode::Char('f') => {
            app.dialog = FileDialogKind::LoadResults;
            app.file_input.clear();
            app.input_mode = InputMode::FileDialog;
            app.set_status("Enter path to a saved results JSON file...");
        }
        KeyCode::Char('a') => {
            app.dialog = FileDialogKind::RunAnalysis;
            app.file_input.clear();
            app.input_mode = InputMode::FileDialog;
            app.set_status("Enter inspection CSV paths, comma separated...");
        }
        _ => {}
    }
}

fn handle_overview_tab_keys(app: &mut App, key: KeyEvent) {
    if !app.has_session() {
        if key.code == KeyCode::Enter {
            app.set_status("No data loaded. Press [d] on the Load tab.");
        }
        return;
    }
    match key.code {
        KeyCode::Left => app.move_segment_selection(-1),
        KeyCode::Right => app.move_segment_selection(1),
        KeyCode::Up => app.move_segment_selection(-10),
        KeyCode::Down => app.move_segment_selection(10),
        KeyCode::Char('[') => app.change_overview_page(false),
        KeyCode::Char(']') => app.change_overview_page(true),
        KeyCode::Enter => app.select_segment(),
        _ => {}
    }
}

fn handle_results_tab_keys(app: &mut App, key: KeyEvent) {
    if !app.has_session() {
        return;
    }
    match key.code {
        KeyCode::Up => app.move_row_selection(-1),
        KeyCode::Down => app.move_row_selection(1),
        KeyCode::Char('n') => {
            if let Some(session) = app.session.as_mut() {
                session.next_page();
                app.selected_row = 0;
            }
        }
        KeyCode::Char('p') => {
            if let Some(session) = app.session.as_mut() {
                session.prev_page();
                app.selected_row = 0;
            }
        }
        KeyCode::Char('u') => {
            if let Some(session) = app.session.as_mut() {
                session.toggle_unviewed_only();
                app.selected_row = 0;
            }
        }
        KeyCode::Char('x') => {
            if let Some(session) = app.session.as_mut() {
                session.clear_segment_filter();
                app.selected_row = 0;
            }
        }
        KeyCode::Char('v') => app.toggle_selected_viewed(),
        KeyCode::Char(c) => {
            if let Some(field) = sort_key_field(c) {
                if let Some(session) = app.session.as_mut() {
                    session.sort_by(field);
                    app.selected_row = 0;
                }
            }
        }
        _ => {}
    }
}

fn handle_file_dialog_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.file_input.clear();
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.file_input);
            app.input_mode = InputMode::Normal;
            match app.dialog {
                FileDialogKind::LoadResults => app.load_results_file(&input),
                FileDialogKind::RunAnalysis => app.run_remote_analysis(&input),
            }
        }
        KeyCode::Backspace => {
            app.file_input.pop();
        }
        KeyCode::Char(c) => app.file_input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_file_dialog() {
        let mut app = App::new();
        app.input_mode = InputMode::FileDialog;
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.file_input, "q");
    }

    #[test]
    fn test_d_loads_demo_data() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert!(app.has_session());
    }

    #[test]
    fn test_sort_key_toggles_on_repeat() {
        let mut app = App::new();
        app.load_demo();
        app.current_tab = Tab::Results;

        handle_key_event(&mut app, key(KeyCode::Char('s')));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.view().sort_field, triage::SortField::Severity);
        assert_eq!(session.view().sort_order, triage::SortOrder::Descending);

        handle_key_event(&mut app, key(KeyCode::Char('s')));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.view().sort_order, triage::SortOrder::Ascending);
    }

    #[test]
    fn test_escape_cancels_file_dialog() {
        let mut app = App::new();
        app.input_mode = InputMode::FileDialog;
        app.file_input = "partial/path".to_string();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.file_input.is_empty());
    }

    #[test]
    fn test_reset_key_needs_session() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.current_tab, Tab::Load);

        app.load_demo();
        assert_eq!(app.current_tab, Tab::Overview);
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert!(!app.has_session());
        assert_eq!(app.current_tab, Tab::Load);
    }
}

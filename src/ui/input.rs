use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::purchase::FormIntent;
use crate::ui::router::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(app.route(), Route::Purchase) {
        handle_purchase_key(app, key);
    } else {
        handle_achievements_key(app, key);
    }
}

fn handle_purchase_key(app: &mut App, key: KeyEvent) {
    if app.purchase().success {
        // Success view: one action, carrying the email forward.
        if matches!(key.code, KeyCode::Enter) {
            app.view_achievements();
        }
        return;
    }

    if app.purchase().loading {
        // Submit control is disabled while the request is in flight.
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_purchase(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_form(FormIntent::FocusNext);
        }
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Type(ch));
        }
        _ => {}
    }
}

fn handle_achievements_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => app.go_back(),
        // The error view's single recovery action.
        KeyCode::Enter if app.achievements().error.is_some() => app.go_back(),
        _ => {}
    }
}

/// Pasted text lands in the focused form field, character by character,
/// so the same filtering applies as for typed input.
pub fn handle_paste(app: &mut App, text: &str) {
    if !matches!(app.route(), Route::Purchase) {
        return;
    }
    if app.purchase().loading || app.purchase().success {
        return;
    }
    for ch in text.chars() {
        app.dispatch_form(FormIntent::Type(ch));
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

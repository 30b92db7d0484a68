use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_remove(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_remove(),
        _ => {}
    }
}

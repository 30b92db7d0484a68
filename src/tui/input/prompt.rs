use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Search prompt: the list filters on every keystroke
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the filter
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.cursor = 0;
            app.mode = Mode::Navigate;
        }
        // Keep the filter and go back to the list
        (_, KeyCode::Enter) | (_, KeyCode::Down) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Backspace) => {
            if app.search_input.pop().is_some() {
                app.cursor = 0;
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.search_input.clear();
            app.cursor = 0;
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
            app.cursor = 0;
        }
        _ => {}
    }
}

/// Path prompt for adding a custom entry
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => app.submit_add(),

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(pos) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => app.edit_cursor = 0,
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            app.edit_cursor = app.edit_buffer.len();
        }

        // Editing
        (_, KeyCode::Backspace) => {
            if let Some(start) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(start..app.edit_cursor, "");
                app.edit_cursor = start;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..end, "");
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any key dismisses the last message
    app.status_message = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Esc) => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.clamp_cursor();
            } else {
                app.should_quit = true;
            }
        }

        // Movement
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::PageDown) => move_cursor(app, 10),
        (_, KeyCode::PageUp) => move_cursor(app, -10),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => {
            app.cursor = app.visible_entries().len().saturating_sub(1);
        }

        // Actions
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('o')) => app.open_selected(),
        (KeyModifiers::NONE, KeyCode::Char('/')) => app.mode = Mode::Search,
        (KeyModifiers::NONE, KeyCode::Char('a')) | (KeyModifiers::CONTROL, KeyCode::Char('o')) => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Add;
        }
        (_, KeyCode::Delete) | (KeyModifiers::NONE, KeyCode::Char('x')) => app.request_remove(),
        (_, KeyCode::Char('?')) => app.show_key_hints = !app.show_key_hints,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.visible_entries().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor as isize + delta;
    app.cursor = next.clamp(0, count as isize - 1) as usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let (_tmp, mut app) = app_with_custom(&["/srv/a"]);
        let last = app.visible_entries().len() - 1;
        handle_navigate(&mut app, ch('k'));
        assert_eq!(app.cursor, 0);
        handle_navigate(&mut app, ch('G'));
        assert_eq!(app.cursor, last);
        handle_navigate(&mut app, ch('j'));
        assert_eq!(app.cursor, last);
        handle_navigate(&mut app, key(KeyCode::PageUp));
        assert_eq!(app.cursor, last.saturating_sub(10));
        handle_navigate(&mut app, ch('g'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn mode_switches() {
        let (_tmp, mut app) = app_with_custom(&[]);
        handle_navigate(&mut app, ch('/'));
        assert_eq!(app.mode, Mode::Search);

        app.mode = Mode::Navigate;
        app.edit_buffer = "leftover".into();
        handle_navigate(&mut app, ch('a'));
        assert_eq!(app.mode, Mode::Add);
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn esc_clears_filter_before_quitting() {
        let (_tmp, mut app) = app_with_custom(&[]);
        app.search_input = "doc".into();
        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(app.search_input.is_empty());
        assert!(!app.should_quit);
        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn remove_key_asks_for_confirmation() {
        let (_tmp, mut app) = app_with_custom(&["/srv/a"]);
        app.select_path("/srv/a");
        handle_navigate(&mut app, key(KeyCode::Delete));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.pending_remove.as_deref(), Some("/srv/a"));
    }
}

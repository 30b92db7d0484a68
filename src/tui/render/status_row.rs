use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const NAVIGATE_HINTS: &str = "/ search  a add  x remove  \u{23CE} open  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let left = match &app.status_message {
                Some(msg) => {
                    let fg = if app.status_is_error {
                        app.theme.red
                    } else {
                        app.theme.green
                    };
                    Span::styled(msg.clone(), Style::default().fg(fg).bg(bg))
                }
                None => Span::styled(format!("Total paths: {}", app.registry.count()), dim),
            };
            let hint = if app.show_key_hints { NAVIGATE_HINTS } else { "" };
            (vec![left], hint)
        }
        Mode::Search => (
            prompt_spans(app, "/", &app.search_input, app.search_input.len()),
            "\u{23CE} keep  Esc clear",
        ),
        Mode::Add => (
            prompt_spans(app, "Add path: ", &app.edit_buffer, app.edit_cursor),
            "\u{23CE} add  Esc cancel",
        ),
        Mode::Confirm => {
            let path = app.pending_remove.as_deref().unwrap_or_default();
            (
                vec![Span::styled(
                    format!("Remove {}? y/n", path),
                    Style::default().fg(app.theme.yellow).bg(bg),
                )],
                "",
            )
        }
    };

    // Right-aligned hint, dropped when the row is too narrow
    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let hint_width = unicode::display_width(hint);
    if !hint.is_empty() && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, dim));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Prompt text with a block cursor at byte offset `cursor`
fn prompt_spans<'a>(app: &App, label: &str, text: &str, cursor: usize) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor = cursor.min(text.len());
    vec![
        Span::styled(label.to_string(), Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(text[..cursor].to_string(), text_style),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
        Span::styled(text[cursor..].to_string(), text_style),
    ]
}

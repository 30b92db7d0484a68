use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Title row with the active filter, and a separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = chunks[0].width as usize;

    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled("\u{25B6}", Style::default().fg(app.theme.cyan).bg(bg)),
        Span::styled(
            " pathmark",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Filter text stays visible after leaving the search prompt
    if !app.search_input.is_empty() && app.mode != Mode::Search {
        let filter = format!("filter: {} ", app.search_input);
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let filter_w = unicode::display_width(&filter);
        if used + filter_w < width {
            spans.push(Span::styled(" ".repeat(width - used - filter_w), bg_style));
            spans.push(Span::styled(filter, Style::default().fg(app.theme.yellow).bg(bg)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    let separator = Span::styled(
        "\u{2500}".repeat(chunks[1].width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(separator)).style(bg_style), chunks[1]);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::entry::Entry;
use crate::ops::status::Status;
use crate::tui::app::{App, Row};
use crate::util::unicode;

use super::push_highlighted_spans;

const MAX_NAME_WIDTH: usize = 24;

/// Render the grouped path list, scrolled so the cursor stays visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    let (selected_row, total) = {
        let rows = app.rows();
        let pos = rows
            .iter()
            .position(|r| matches!(r, Row::Entry { index, .. } if *index == app.cursor));
        (pos, rows.len())
    };
    app.scroll_offset = scroll_for(app.scroll_offset, selected_row, total, height);

    let app = &*app;
    let bg_style = Style::default().bg(app.theme.background);
    let rows = app.rows();

    if rows.is_empty() {
        let line = Line::from(Span::styled(
            "  No paths found.",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let name_w = rows
        .iter()
        .filter_map(|r| match r {
            Row::Entry { entry, .. } => Some(unicode::display_width(&entry.name)),
            Row::Header { .. } => None,
        })
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let search_re = app.search_re();

    let lines: Vec<Line> = rows
        .iter()
        .skip(app.scroll_offset)
        .take(height)
        .map(|row| match row {
            Row::Header { title, count } => Line::from(Span::styled(
                format!(" {} ({})", title, count),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(app.theme.background)
                    .add_modifier(Modifier::BOLD),
            )),
            Row::Entry { index, entry } => render_entry_line(
                app,
                entry,
                *index == app.cursor,
                name_w,
                area.width as usize,
                search_re.as_ref(),
            ),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(bg_style), area);
}

/// New scroll offset that keeps `selected` inside a window of `height` rows
fn scroll_for(offset: usize, selected: Option<usize>, total: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let mut offset = offset;
    if let Some(sel) = selected {
        // Show the group header above the first entry
        if sel <= 1 {
            offset = 0;
        } else if sel < offset {
            offset = sel;
        } else if sel >= offset + height {
            offset = sel + 1 - height;
        }
    }
    offset.min(total.saturating_sub(height))
}

fn render_entry_line<'a>(
    app: &App,
    entry: &Entry,
    is_selected: bool,
    name_w: usize,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'a> {
    let bg = if is_selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let bg_style = Style::default().bg(bg);
    let name_style = if is_selected {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let path_style = Style::default().fg(app.theme.dim).bg(bg);
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);
    let status = Status::of(entry);

    let mut spans: Vec<Span> = vec![
        Span::styled("   ", bg_style),
        Span::styled(
            status.symbol(),
            Style::default().fg(app.theme.status_color(status)).bg(bg),
        ),
        Span::styled(" ", bg_style),
    ];

    let name = unicode::truncate_to_width(&entry.name, name_w);
    let pad = name_w.saturating_sub(unicode::display_width(&name));
    push_highlighted_spans(&mut spans, &name, name_style, match_style, search_re);
    spans.push(Span::styled(" ".repeat(pad + 2), bg_style));

    // Long paths lose their start, the folder name at the end matters most
    let used = 3 + 1 + 1 + name_w + 2;
    let path = unicode::truncate_start_to_width(&entry.path, width.saturating_sub(used + 1));
    push_highlighted_spans(&mut spans, &path, path_style, match_style, search_re);

    // Fill the rest of the row so the selection bar spans the width
    let content_w: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if content_w < width {
        spans.push(Span::styled(" ".repeat(width - content_w), bg_style));
    }
    Line::from(spans)
}

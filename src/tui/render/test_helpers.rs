use std::path::Path;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::PathStore;
use crate::model::Config;
use crate::ops::registry::Registry;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over the built-ins for a fixed home plus the given custom
/// paths, persisted to a temp store. Keep the TempDir alive.
pub fn app_with_custom(paths: &[&str]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let store = PathStore::new(tmp.path().join("saved_paths.json"));
    let mut registry = Registry::load(store, Path::new("/home/tester"));
    for path in paths {
        registry.add(path).unwrap();
    }
    (tmp, App::new(registry, &Config::default()))
}

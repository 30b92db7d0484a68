use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::launcher::{self, LaunchError};
use crate::io::store::PathStore;
use crate::model::{Config, Entry};
use crate::ops::filter::{self, Group};
use crate::ops::registry::{Registry, Saved};
use crate::util::paths::resolve_existing;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search prompt; the list filters live
    Search,
    /// Typing a path to add
    Add,
    /// Waiting for y/n on a pending removal
    Confirm,
}

/// One line of the path tree
#[derive(Debug, Clone)]
pub enum Row<'a> {
    Header { title: String, count: usize },
    /// `index` is the position among selectable entries
    Entry { index: usize, entry: &'a Entry },
}

/// Main application state
pub struct App {
    pub registry: Registry,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Active filter text (empty = grouped view)
    pub search_input: String,
    /// Path prompt buffer and byte cursor for Add mode
    pub edit_buffer: String,
    pub edit_cursor: usize,
    /// Cursor index into the visible entries
    pub cursor: usize,
    /// First visible row of the tree
    pub scroll_offset: usize,
    /// Path awaiting confirmation in Confirm mode
    pub pending_remove: Option<String>,
    /// Transient message for the status row
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(registry: Registry, config: &Config) -> Self {
        App {
            registry,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            search_input: String::new(),
            edit_buffer: String::new(),
            edit_cursor: 0,
            cursor: 0,
            scroll_offset: 0,
            pending_remove: None,
            status_message: None,
            status_is_error: false,
        }
    }

    /// The current projection of the registry
    pub fn groups(&self) -> Vec<Group<'_>> {
        filter::filter(self.registry.all(), &self.search_input)
    }

    /// Selectable entries in display order
    pub fn visible_entries(&self) -> Vec<&Entry> {
        filter::flatten(&self.groups())
    }

    /// Header and entry rows in display order
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        let mut index = 0;
        for group in self.groups() {
            rows.push(Row::Header {
                count: group.len(),
                title: group.title,
            });
            for entry in group.entries {
                rows.push(Row::Entry { index, entry });
                index += 1;
            }
        }
        rows
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.visible_entries().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible entries
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_entries().len();
        self.cursor = if count == 0 { 0 } else { self.cursor.min(count - 1) };
    }

    /// Regex for highlighting the active search text
    pub fn search_re(&self) -> Option<Regex> {
        if self.search_input.trim().is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(&self.search_input))).ok()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    /// Show the outcome of a registry mutation, preferring a save warning
    fn report_saved(&mut self, saved: Saved<Entry>, verb: &str) {
        match saved.warning {
            Some(w) => self.set_error(format!("{} {}, but {}", verb, saved.value.name, w)),
            None => self.set_status(format!("{} {}", verb, saved.value.name)),
        }
    }

    /// Open the selected entry in the file browser
    pub fn open_selected(&mut self) {
        let Some(path) = self.selected().map(|e| e.path.clone()) else {
            self.set_error("Please select a path from the list.");
            return;
        };
        match launcher::open_in_file_browser(&path) {
            Ok(()) => {
                let name = self.selected().map(|e| e.name.clone()).unwrap_or_default();
                self.set_status(format!("Opened {}", name));
            }
            Err(e @ LaunchError::Missing(_)) => self.set_error(e.to_string()),
            Err(e) => self.set_error(format!("Failed to open path: {}", e)),
        }
    }

    /// Add the path typed into the prompt
    pub fn submit_add(&mut self) {
        let input = std::mem::take(&mut self.edit_buffer);
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
        if input.trim().is_empty() {
            return;
        }
        let Some(path) = resolve_existing(&input) else {
            self.set_error(format!("path does not exist: {}", input.trim()));
            return;
        };
        match self.registry.add(&path) {
            Ok(saved) => {
                let added = saved.value.path.clone();
                self.report_saved(saved, "Added");
                self.select_path(&added);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Ask to remove the selected entry. Built-ins are refused up front.
    pub fn request_remove(&mut self) {
        let Some(entry) = self.selected() else {
            self.set_error("Please select a path to remove.");
            return;
        };
        if !entry.is_custom() {
            self.set_error("Only custom paths can be removed.");
            return;
        }
        self.pending_remove = Some(entry.path.clone());
        self.mode = Mode::Confirm;
    }

    pub fn confirm_remove(&mut self) {
        self.mode = Mode::Navigate;
        let Some(path) = self.pending_remove.take() else {
            return;
        };
        match self.registry.remove(&path) {
            Ok(saved) => self.report_saved(saved, "Removed"),
            Err(e) => self.set_error(e.to_string()),
        }
        self.clamp_cursor();
    }

    pub fn cancel_remove(&mut self) {
        self.pending_remove = None;
        self.mode = Mode::Navigate;
    }

    /// Move the cursor onto the entry with `path`, if visible
    pub fn select_path(&mut self, path: &str) {
        if let Some(idx) = self.visible_entries().iter().position(|e| e.path == path) {
            self.cursor = idx;
        }
    }
}

/// Run the TUI application
pub fn run(store: PathStore, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::initialize(store);
    let mut app = App::new(registry, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

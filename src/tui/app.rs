use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::config_io::read_config;
use crate::io::storage;
use crate::model::config::Config;
use crate::model::item::{Filter, Item};
use crate::ops::projection::{self, Counts};
use crate::ops::store::Store;

use super::input;
use super::render;
use super::theme::Theme;
use super::toast::UndoToast;

/// How long search input must settle before it is applied to the projection.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The add form is open
    Insert,
    /// Editing an existing item's text
    Edit,
    /// Typing in the search box
    Search,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub mode: Mode,
    pub filter: Filter,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the projected list
    pub cursor: usize,
    /// First visible row of the projected list
    pub scroll_offset: usize,
    /// Add/edit form buffer (multiline) and its cursor byte offset
    pub input: String,
    pub input_cursor: usize,
    /// Id of the item being edited while in Edit mode
    pub edit_id: Option<String>,
    /// Search text as typed, not yet applied
    pub search_input: String,
    /// Debounced query the projection sees
    pub search_query: String,
    /// When the pending search input becomes the applied query
    pub search_deadline: Option<Instant>,
    /// Last-deleted item offered for undo
    pub toast: Option<UndoToast>,
}

impl App {
    pub fn new(store: Store, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            filter: Filter::All,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            edit_id: None,
            search_input: String::new(),
            search_query: String::new(),
            search_deadline: None,
            toast: None,
        }
    }

    /// The projected display list for the current filter and applied query.
    pub fn visible(&self) -> Vec<&Item> {
        projection::project(self.store.items(), self.filter, &self.search_query)
    }

    /// Per-filter counts for the tab badges.
    pub fn counts(&self) -> Counts {
        projection::counts(self.store.items())
    }

    /// Id of the item under the cursor, if any.
    pub fn cursor_item_id(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|item| item.id.clone())
    }

    /// Keep the cursor inside the projected list after a mutation or a
    /// filter/search change.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Regex for highlighting matches of the applied query (escaped, so the
    /// match semantics stay plain case-insensitive substring).
    pub fn active_search_re(&self) -> Option<Regex> {
        let query = self.search_query.trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    /// Re-arm the search debounce after a keystroke in the search box.
    pub fn queue_search(&mut self) {
        self.search_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// Apply the pending search input immediately (Enter skips the debounce).
    pub fn apply_search_now(&mut self) {
        self.search_deadline = None;
        if self.search_query != self.search_input {
            self.search_query = self.search_input.clone();
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Drop both the pending and the applied query.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_deadline = None;
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Service the timers: apply a settled search input, expire the undo
    /// toast. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.search_deadline
            && now >= deadline
        {
            self.apply_search_now();
        }
        if let Some(toast) = &self.toast
            && toast.expired(now)
        {
            self.toast = None;
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => storage::default_data_dir()?,
    };
    let store = Store::open(data_dir.clone())?;
    let config = read_config(&data_dir)?;

    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Best-effort: lets terminals that speak the kitty protocol report
    // Shift+Enter distinctly (plain Enter still works everywhere).
    let _ = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    );
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
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

        // Short poll so the debounce and the undo window advance between keys
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

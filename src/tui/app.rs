use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{AppConfig, Store};
use crate::ops::{Controller, Screen, SessionError};

use super::input;
use super::render;
use super::theme::Theme;
use super::view::{HeaderField, TuiView};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the list name or owner field
    EditHeader(HeaderField),
}

/// Main application state
pub struct App {
    pub controller: Controller<TuiView>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Cursor into the home screen's list links
    pub home_cursor: usize,
    /// Cursor into the open list's item rows
    pub item_cursor: usize,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Deadline for the automatic return home after a list is deleted
    pub pending_home: Option<Instant>,
    pub delete_delay: Duration,
}

impl App {
    pub fn new(store: Store, config: &AppConfig) -> Self {
        App {
            controller: Controller::new(store, TuiView::new()),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            home_cursor: 0,
            item_cursor: 0,
            status_message: None,
            pending_home: None,
            delete_delay: Duration::from_millis(config.ui.delete_delay_ms),
        }
    }

    pub fn view(&self) -> &TuiView {
        self.controller.view()
    }

    pub fn screen(&self) -> Screen {
        self.controller.nav().screen
    }

    /// Surface a rejected action in the status row
    pub fn report(&mut self, err: SessionError) {
        debug!(error = %err, "action rejected");
        self.status_message = Some(err.to_string());
    }

    /// Keep both cursors inside their current row counts
    pub fn clamp_cursors(&mut self) {
        let links = self.view().links.len();
        let rows = self.view().rows.len();
        self.home_cursor = self.home_cursor.min(links.saturating_sub(1));
        self.item_cursor = self.item_cursor.min(rows.saturating_sub(1));
    }

    /// Start the delay that ends on the home screen
    pub fn schedule_home(&mut self, now: Instant) {
        self.pending_home = Some(now + self.delete_delay);
    }

    /// Advance timers. Returns home once a pending deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.pending_home
            && now >= deadline
        {
            self.pending_home = None;
            self.mode = Mode::Navigate;
            if let Err(e) = self.controller.go_home() {
                self.report(e);
            }
            self.home_cursor = 0;
            self.clamp_cursors();
        }
    }
}

/// Take over the terminal and run the session until the user quits
pub fn run(store: Store, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, config);

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

    info!(lists = app.controller.store().len(), "session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so a pending return home fires close to its deadline
        if event::poll(Duration::from_millis(50))?
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

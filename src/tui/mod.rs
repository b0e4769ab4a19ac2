//! Terminal UI for noughts and crosses

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_and_crosses::{GameController, Position, Settings};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use app::App;

const LOG_FILE: &str = "noughts_and_crosses.log";

/// Sends logs to a file to avoid interfering with the TUI.
pub fn init_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create {}", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts_and_crosses=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Terminal session state: the controller plus input-side state.
struct Screen {
    controller: GameController<App>,
    settings: Settings,
    cursor: Position,
}

/// What the event loop should do after a key.
enum Flow {
    Continue,
    Quit,
}

impl Screen {
    fn new(settings: Settings) -> Self {
        let controller = match settings.seed() {
            Some(seed) => GameController::with_seed(App::new(), *seed),
            None => GameController::new(App::new()),
        }
        .with_opening(*settings.opening());

        Self {
            controller,
            settings,
            cursor: Position::Center,
        }
    }

    fn restart(&mut self) {
        self.controller
            .on_start_requested(*self.settings.mode(), *self.settings.human());
    }

    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyCode) -> Flow {
        if let Some(index) = input::digit_cell(key) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.controller.on_cell_activated(index);
            return Flow::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.on_cell_activated(self.cursor.to_index());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.settings = self.settings.with_mode(self.settings.mode().toggle());
                info!(mode = self.settings.mode().label(), "Mode changed");
                self.restart();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.settings = self.settings.with_human(self.settings.human().opponent());
                info!(human = %self.settings.human(), "Side changed");
                self.restart();
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let hint = self.controller.suggest_move();
                self.controller.renderer_mut().set_hint(hint);
            }
            _ => {}
        }
        Flow::Continue
    }
}

/// Runs the terminal game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting noughts and crosses TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut screen = Screen::new(settings);
    screen.restart();

    let res = run_loop(&mut terminal, &mut screen);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, screen: &mut Screen) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, screen.controller.renderer(), screen.cursor, &screen.settings))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Flow::Quit = screen.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

//! ESBN Explorer - terminal front-end for browsing space biology research.
//!
//! Main entry point and event loop for the application.

mod app;
mod catalog;
mod config;
mod content;
mod error;
mod logging;
mod prompts;
mod ranker;
mod route;
mod ui;

use anyhow::Context;
use app::{App, UiMode, View};
use chrono::Datelike;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ranker::SortKey;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use route::Route;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Intent to open at startup, e.g. "about" or "results?q=bone+loss"
    #[arg(short, long)]
    open: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for rotating call-to-action and prompt text
    #[arg(long)]
    seed: Option<u64>,

    /// Default sort key for results (relevance, citations, year)
    #[arg(long)]
    sort: Option<SortKey>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Main application entry point.
///
/// # Details
/// Loads configuration, resolves the start route, and runs the event loop.
/// An invalid start intent is reported before the terminal is taken over.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;

    if cli.init_config {
        if let Some(sort) = cli.sort {
            config.default_sort = sort;
        }
        config.seed = cli.seed.or(config.seed);
        config.save(cli.config.as_deref())?;
        let path = match cli.config {
            Some(path) => path,
            None => Config::default_config_path()?,
        };
        println!("Wrote {}", path.display());
        return Ok(());
    }

    logging::init_logger(&config.log_file_path()?, &config.log_level, cli.verbose)?;

    let start = resolve_start(&cli, &config)?;

    let now = chrono::Utc::now();
    let seed = resolve_seed(&cli, &config, now.timestamp_millis());
    let default_sort = cli.sort.unwrap_or(config.default_sort);
    tracing::info!(seed, sort = %default_sort, start = %start.to_intent(), "starting");

    let mut app = App::new(&catalog::RECORDS, default_sort, seed, now.year());
    app.navigate(start);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("{:#}", e);
    }
    result
}

/// Pick the start route: CLI `--open` first, then the configured intent.
///
/// # Returns
/// * `Result<Route>` - Parsed route, or an error naming the bad intent
fn resolve_start(cli: &Cli, config: &Config) -> anyhow::Result<Route> {
    let intent = cli.open.as_deref().unwrap_or(&config.start_intent);
    Route::parse(intent).with_context(|| format!("Invalid start intent: {}", intent))
}

/// Pick the seed: CLI `--seed`, then config `seed`, then the clock.
///
/// # Details
/// A clock before the epoch seeds with 0.
fn resolve_seed(cli: &Cli, config: &Config, now_millis: i64) -> u64 {
    cli.seed
        .or(config.seed)
        .unwrap_or_else(|| u64::try_from(now_millis).unwrap_or_default())
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Returns
/// * `Rect` - Area of the result list (empty outside the results view)
fn render_ui(f: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // View
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    ui::render_header(app, chunks[0], f.buffer_mut());

    let mut list_area = Rect::default();
    match app.view() {
        View::Landing => ui::render_landing(app, chunks[1], f.buffer_mut()),
        View::Search => ui::render_search(app, chunks[1], f.buffer_mut()),
        View::About => ui::render_about(app, chunks[1], f.buffer_mut()),
        View::Results => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(ui::sort::SUMMARY_HEIGHT), // Summary and sort
                    Constraint::Min(0),                           // Result list
                ])
                .split(chunks[1]);
            ui::render_summary(app, parts[0], f.buffer_mut());
            ui::render_list(app, parts[1], f.buffer_mut());
            ui::render_sort_menu(app, parts[1], f.buffer_mut());
            list_area = parts[1];
        }
    }

    let status_text = app.status_message.as_deref().unwrap_or(
        "Press 'q' to quit, '/' to search, '1' home, '2' search, '3' about",
    );
    let status = Paragraph::new(Line::from(status_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    list_area
}

/// Main event loop.
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders UI.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    loop {
        terminal.draw(|f| {
            list_area = render_ui(f, app);
        })?;

        // Poll with a timeout to keep the UI responsive
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, list_area),
                _ => {}
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}

/// Handle a key press.
///
/// # Returns
/// * `bool` - true when the application should quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        UiMode::Input => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.navigate(Route::Home),
            KeyCode::Tab => app.use_suggestion(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.reroll_suggestion()
            }
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        },
        UiMode::SortMenu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_sort_menu(false),
            KeyCode::Down | KeyCode::Char('j') => app.move_sort_menu(true),
            KeyCode::Enter => app.confirm_sort_menu(),
            KeyCode::Esc | KeyCode::Char('o') => app.close_sort_menu(),
            _ => {}
        },
        UiMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Esc => {
                if app.view() == View::Landing {
                    return true;
                }
                app.navigate(Route::Home);
            }
            KeyCode::Char('1') | KeyCode::Char('h') => app.navigate(Route::Home),
            KeyCode::Char('2') | KeyCode::Char('/') => app.navigate(Route::Search),
            KeyCode::Char('3') | KeyCode::Char('a') => app.navigate(Route::About),
            KeyCode::Char('b') if app.view() == View::Results => app.navigate(Route::Search),
            KeyCode::Char('s') => app.cycle_sort(),
            KeyCode::Char('o') => app.open_sort_menu(),
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter => {
                if let Some(record) = app.selected_record() {
                    app.set_status(format!(
                        "{} · {} · {}",
                        record.title,
                        record.authors_line(),
                        record.institution
                    ));
                }
            }
            _ => {}
        },
    }

    false
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scrolling moves the result selection; a left click selects the card under it.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, list_area: Rect) {
    if app.mode != UiMode::Browse || app.view() != View::Results {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.column >= list_area.x
                && mouse.column < list_area.x + list_area.width
                && let Some(index) = ui::list::index_at_row(app, list_area, mouse.row)
            {
                app.select_index(index);
            }
        }
        _ => {}
    }
}

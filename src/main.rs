mod app;
mod domain;
mod input;
mod logging;
mod settings;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::{default_settings_path, init_settings, load_settings, TimerSettings};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use ticker::{IntervalTicker, TickSource};

#[derive(Parser)]
#[command(name = "pomotodo")]
#[command(about = "A terminal Pomodoro focus timer with a small to-do list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file. Defaults to <config dir>/pomotodo/settings.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file. Level is taken from RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Task to work on (pre-fills the setup form)
    #[arg(short, long)]
    task: Option<String>,

    /// Focus minutes (1-60)
    #[arg(short, long)]
    work: Option<String>,

    /// Short break minutes (1-15)
    #[arg(long)]
    short_break: Option<String>,

    /// Long break minutes (5-30)
    #[arg(long)]
    long_break: Option<String>,

    /// Number of focus cycles to complete (1-10)
    #[arg(short, long)]
    cycles: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a settings file with the default durations
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = match cli.config.clone() {
        Some(path) => path,
        None => default_settings_path().context("Could not determine config directory")?,
    };

    match cli.command {
        Some(Commands::Init) => {
            init_settings(&settings_path, &TimerSettings::default())?;
            println!("Wrote default settings: {}", settings_path.display());
            Ok(())
        }
        None => {
            let settings = load_settings(&settings_path)?.with_overrides(
                cli.work.as_deref(),
                cli.short_break.as_deref(),
                cli.long_break.as_deref(),
                cli.cycles.as_deref(),
            );

            if let Some(log_path) = cli.log_file.clone().or_else(logging::default_log_path) {
                // Logging is optional
                if let Err(e) = logging::init_logging(&log_path) {
                    eprintln!("Warning: logging disabled: {:#}", e);
                }
            }

            log::info!("starting with {:?}", settings);
            run_tui(AppState::new(settings, cli.task))
        }
    }
}

fn run_tui(mut app: AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut tick_source = IntervalTicker::every_second(Instant::now());
    let result = run_app(&mut terminal, &mut app, &mut tick_source);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        log::error!("event loop failed: {:#}", err);
        eprintln!("Error: {:#}", err);
    }

    Ok(())
}

fn run_app<T: TickSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick_source: &mut T,
) -> Result<()> {
    let poll_rate = ticker::POLL_INTERVAL;

    loop {
        let now = Instant::now();
        app.expire_celebration(now);

        // Render
        terminal.draw(|f| ui::render(f, app, now))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        // Tick the session once per second
        let now = Instant::now();
        if tick_source.poll_tick(now) {
            app.tick(now);
        }
    }
}

//! Remotui - remote-cursor media shell for the terminal
//!
//! A night-sky terminal media shell driven entirely by a remote-style D-pad
//! cursor: arrow keys move it, Enter clicks whatever sits under it.
//!
//! # Usage
//!
//! ```bash
//! # Launch with saved config
//! remotui
//!
//! # One-run overrides
//! remotui --step 4 --stars 400
//! remotui --no-starfield
//! ```

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use remotui::ui::{overlay, shell, starfield, StarfieldWidget};
use remotui::{App, Cli, Config};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load(),
    };
    cli.apply(&mut config).map_err(|e| anyhow!(e))?;

    let _guard = init_logging()?;
    info!(?config, "starting remotui");

    run_tui(config).await
}

/// Set up file-side logging; a TUI cannot log to stdout
///
/// The log lands in the state directory (or the system temp directory as a
/// fallback); RUST_LOG controls the filter, defaulting to info.
fn init_logging() -> Result<WorkerGuard> {
    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("remotui");
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, "remotui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive shell
async fn run_tui(config: Config) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(&config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Fast enough for the twinkle animation to read as continuous
    const TICK_RATE: Duration = Duration::from_millis(50);

    let started = Instant::now();
    let mut last_tick = Instant::now();

    while app.running {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        terminal.draw(|frame| {
            app.sync_layout(frame.area());
            render_ui(frame, app, elapsed_ms);
        })?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                }
                // A new size is picked up by the next layout sync
                Event::Resize(..) => {}
                _ => {}
            }
        }

        app.tick(last_tick.elapsed());
        last_tick = Instant::now();
    }

    info!("shutting down");
    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Compose one frame: sky, chrome, cursor on top
fn render_ui(frame: &mut Frame, app: &App, elapsed_ms: u64) {
    if app.starfield_enabled {
        let widget = StarfieldWidget::new(
            &app.starfield,
            starfield::twinkle_phase(elapsed_ms),
            starfield::drift_phase(elapsed_ms),
        );
        frame.render_widget(widget, frame.area());
    }

    if let Some(layout) = app.layout() {
        shell::render(
            frame,
            layout,
            &app.player,
            app.status.as_deref(),
            app.cursor.step_size(),
            app.hovered_button(),
        );
    }

    overlay::render(frame, &app.cursor);
}

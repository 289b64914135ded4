//! Terminal runner for podshelf.
//!
//! This binary wires the library to a real terminal:
//!
//! 1. **Configure**: defaults ← config file ← command-line flags
//! 2. **Trace**: install the JSON file logger
//! 3. **Spawn**: start the supply worker on the configured record source
//! 4. **Loop**: poll keys with a short timeout; every pass also ticks the search
//!    debouncer and drains worker responses, redrawing only when something changed
//!
//! # Event Mapping
//!
//! - Key press → [`podshelf::map_key`] → `Event`
//! - Poll timeout → `Event::Tick(now)`
//! - Worker channel → `Event::WorkerResponse`
//! - Terminal resize → redraw
//!
//! Raw mode and the alternate screen are restored on every exit path, panics
//! included.

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use podshelf::infrastructure::expand_tilde;
use podshelf::worker::SupplyHandle;
use podshelf::{handle_event, initialize, map_key, Action, AppState, Config, ConfigOverrides, Event};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Poll timeout; also the debouncer's resolution.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Browse a podcast catalog in the terminal.
#[derive(Parser, Debug)]
#[command(name = "podshelf", version, about)]
struct Args {
    /// Configuration file (default: ~/.config/podshelf/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fetch shows from this URL.
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Read shows from a local JSON file instead of the network.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Shows per page.
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Built-in theme (sippi-dark, sippi-light).
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Custom TOML theme file.
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,

    /// Log filter for the trace file, e.g. `debug` or `podshelf=trace`.
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_url: self.url.clone(),
            source_file: self
                .file
                .as_deref()
                .map(|path| expand_tilde(&path.to_string_lossy())),
            page_size: self.page_size,
            theme: self.theme.clone(),
            theme_file: self
                .theme_file
                .as_deref()
                .map(|path| expand_tilde(&path.to_string_lossy())),
            trace_level: self.trace_level.clone(),
        }
    }
}

/// Raw mode + alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide).context("enter alt screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())
        .context("load configuration")?
        .merge(args.overrides());

    let log_file = podshelf::observability::init_tracing(&config);
    tracing::debug!(?config, ?log_file, "starting podshelf");

    let source = podshelf::source::from_config(&config).context("configure record source")?;
    let source_label = source.describe();
    let worker = SupplyHandle::spawn(source).context("start supply worker")?;

    let mut state = initialize(&config);
    state.source_label = source_label;

    let guard = TerminalGuard::enter()?;
    let result = run(&mut state, &worker);
    drop(guard);
    worker.detach();

    if let Err(e) = &result {
        tracing::error!(error = %e, "podshelf exited with an error");
    }
    result
}

/// Runs the event loop until a quit action.
fn run(state: &mut AppState, worker: &SupplyHandle) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let (cols, rows) = terminal::size().context("query terminal size")?;
    let (mut rows, mut cols) = (usize::from(rows), usize::from(cols));

    if execute_actions(&dispatch(state, &Event::Refresh), worker)? {
        return Ok(());
    }
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            stdout.write_all(podshelf::ui::render(state, rows, cols).as_bytes())?;
            stdout.flush()?;
            needs_redraw = false;
        }

        let mut pending = Vec::new();
        if event::poll(TICK_RATE)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(ev) = map_key(state, &key, Instant::now()) {
                        pending.push(ev);
                    }
                }
                TermEvent::Resize(new_cols, new_rows) => {
                    cols = usize::from(new_cols);
                    rows = usize::from(new_rows);
                    tracing::debug!(rows, cols, "terminal resized");
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        while let Some(response) = worker.try_recv()? {
            pending.push(Event::WorkerResponse(response));
        }
        pending.push(Event::Tick(Instant::now()));

        for ev in pending {
            let (render, actions) = dispatch_with_render(state, &ev);
            needs_redraw |= render;
            if execute_actions(&actions, worker)? {
                tracing::debug!("quit requested");
                return Ok(());
            }
        }
    }
}

fn dispatch(state: &mut AppState, event: &Event) -> Vec<Action> {
    dispatch_with_render(state, event).1
}

/// Handles one event, logging instead of aborting on handler errors.
fn dispatch_with_render(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match handle_event(state, event) {
        Ok((should_render, actions)) => {
            if !actions.is_empty() {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
            }
            (should_render, actions)
        }
        Err(e) => {
            tracing::warn!(error = %e, "error handling event");
            (false, Vec::new())
        }
    }
}

/// Executes side effects. Returns `true` when the app should exit.
fn execute_actions(actions: &[Action], worker: &SupplyHandle) -> anyhow::Result<bool> {
    for action in actions {
        match action {
            Action::Quit => return Ok(true),
            Action::PostToWorker(request) => {
                worker.post(request.clone()).context("post to supply worker")?;
            }
        }
    }
    Ok(false)
}

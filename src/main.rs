//! Terminal runner (default binary).
//!
//! Renders the session with the framebuffer renderer, feeds it key edges from
//! crossterm and ticks it on a fixed 16ms cadence with the real elapsed time.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use falling_blocks::core::{RepeatTiming, Session, SessionConfig};
use falling_blocks::input::{is_restart, should_quit, KeyInput, KeyTracker};
use falling_blocks::term::{Frame, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_INTERVAL_MS, TICK_MS,
};

#[derive(Debug, Parser)]
#[command(version, about = "Falling blocks in the terminal")]
struct Cli {
    #[arg(long, help = "Seed for the piece sequence (default: from the clock)")]
    seed: Option<u32>,

    #[arg(long, default_value_t = BOARD_WIDTH, help = "Board width in cells")]
    width: usize,

    #[arg(long, default_value_t = BOARD_HEIGHT, help = "Board height in cells")]
    height: usize,

    #[arg(long, default_value_t = DEFAULT_REPEAT_DELAY_MS as u64, help = "Hold time before a move key repeats")]
    repeat_delay_ms: u64,

    #[arg(long, default_value_t = DEFAULT_REPEAT_INTERVAL_MS as u64, help = "Time between move repeats")]
    repeat_interval_ms: u64,

    #[arg(long, help = "Write logs to this file (the screen belongs to the game)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_board_size(self.width, self.height)
            .with_repeat(RepeatTiming {
                initial_delay: Duration::from_millis(self.repeat_delay_ms),
                repeat_interval: Duration::from_millis(self.repeat_interval_ms),
            })
    }

    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(cli.level())
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(cli.session_config(), seed).context("invalid configuration")?;
    info!(seed, width = cli.width, height = cli.height, "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.score(), lines = session.lines(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut tracker = KeyTracker::default();
    tracker.set_reports_release(term.reports_key_release());

    let mut frame = Frame::new(0, 0);
    let mut snapshot = session.snapshot();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_restart(key) {
                            for input in tracker.release_all() {
                                apply_input(session, input);
                            }
                            session.restart();
                            last_tick = Instant::now();
                            continue;
                        }
                    }
                    if let Some(input) = tracker.on_key(key, Instant::now()) {
                        apply_input(session, input);
                    }
                }
                Event::FocusLost => {
                    for input in tracker.release_all() {
                        apply_input(session, input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        for input in tracker.expire(now) {
            apply_input(session, input);
        }

        // Tick.
        let elapsed = now.saturating_duration_since(last_tick);
        if elapsed >= tick {
            last_tick = now;
            session.tick(elapsed);

            if let Some(lock) = session.take_last_event() {
                debug!(
                    kind = lock.kind.as_str(),
                    lines = lock.lines_cleared,
                    reward = lock.reward,
                    score = session.score(),
                    "lock"
                );
            }
        }
    }
}

fn apply_input(session: &mut Session, input: KeyInput) {
    match input {
        KeyInput::Down(action) => session.handle_key_down(action),
        KeyInput::Up(action) => session.handle_key_up(action),
    }
}

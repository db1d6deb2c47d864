//! Terminal gridfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `gridfall-term`.
//! With `--headless` it skips the terminal and drives a session with
//! generated input instead.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_gridfall::config::{GameConfig, Overrides};
use tui_gridfall::core::{GameSession, GameSnapshot, SimpleRng};
use tui_gridfall::headless;
use tui_gridfall::input::{handle_key_event, should_quit, should_restart};
use tui_gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_gridfall::types::{Speed, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Run without a terminal, feeding generated input.
    #[arg(long)]
    headless: bool,

    /// Frame limit for a headless run.
    #[arg(long, default_value_t = 100_000)]
    frames: u32,

    /// Write log output to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    // Logging to stderr would scribble over the alternate screen.
    let quiet = !args.headless && args.log_file.is_none();
    init_logging(args.log_file.as_deref(), quiet)?;

    let config = GameConfig::resolve(args.config.as_deref(), args.overrides)?;
    info!("starting with {:?}", config);

    if args.headless {
        return run_headless(&config, args.frames);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result? {
        println!("Game over");
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>, quiet: bool) -> Result<()> {
    let default_filter = if quiet { "off" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn new_session(config: &GameConfig, speed: Speed, seed: u32) -> Result<GameSession> {
    Ok(GameSession::with_source(
        config.grid()?,
        speed,
        SimpleRng::new(seed),
    ))
}

fn run_headless(config: &GameConfig, frames: u32) -> Result<()> {
    let seed = config.seed_or_clock();
    let mut session = new_session(config, config.speed()?, seed)?;
    let report = headless::run(&mut session, frames, seed.wrapping_add(1));

    print!("{}", headless::render_text(&report.snapshot));
    println!(
        "seed {}: {} frame(s), {} piece(s) locked, {} line(s) cleared",
        seed, report.frames, report.pieces_locked, report.lines_cleared
    );
    if session.is_game_over() {
        println!("Game over");
    }
    Ok(())
}

/// Interactive loop. Returns whether the last session ended in game over.
fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<bool> {
    let mut seed = config.seed_or_clock();
    let mut session = new_session(config, config.speed()?, seed)?;
    info!("session seed {}", seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(session.is_game_over());
                    }
                    if should_restart(key) {
                        // The core has no reset; a restart is a new session.
                        seed = seed.wrapping_add(1);
                        session = new_session(config, session.speed(), seed)?;
                        info!("restarted with seed {}", seed);
                    } else if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

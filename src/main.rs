//! Terminal Blockfall runner.
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall::term`.
//! Logs go to a file when `--log-file` is given; stdout is the game screen.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockfall::config::{Config, Settings};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{game_over_choice, handle_key_event, should_quit, GameOverChoice};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between gravity steps
    #[arg(long)]
    gravity_ms: Option<u32>,

    /// JSON config file; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, ...)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let flags = Config {
            seed: self.seed,
            gravity_ms: self.gravity_ms,
            log_file: self.log_file,
            verbose: (self.verbose > 0).then_some(self.verbose),
        };
        Ok(file.merge(flags).resolve())
    }
}

fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = match settings.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let settings = Cli::parse().settings()?;
    init_logging(&settings)?;
    info!(seed = settings.seed, gravity_ms = settings.gravity_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut game = GameState::new(settings.seed).with_gravity_ms(settings.gravity_ms);
    let view = GameView::default();

    let mut snap: GameSnapshot = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if game.game_over() {
                        match game_over_choice(key) {
                            Some(GameOverChoice::Retry) => game.reset(),
                            Some(GameOverChoice::Quit) => return Ok(()),
                            None => {}
                        }
                    } else if should_quit(key) {
                        return Ok(());
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

//! Terminal runner (default binary).
//!
//! Plays the external collaborators of the rules engine: it supplies the clock,
//! maps keys to commands and draws each frame.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::Rng;

use blockfall::core::{Clock, GameSession, SessionConfig, SystemClock};
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::term::TerminalRenderer;
use blockfall::types::{DEFAULT_HEIGHT, DEFAULT_TICK_MS, DEFAULT_WIDTH};

/// Frame cadence; gravity is paced separately by the session's tick length.
const FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells.
    #[arg(long, env = "BLOCKFALL_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: u16,
    /// Grid height in cells.
    #[arg(long, env = "BLOCKFALL_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: u16,
    /// Milliseconds between gravity steps.
    #[arg(long, env = "BLOCKFALL_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,
    /// Piece sequence seed. Reusing a seed replays the same pieces.
    #[arg(short, long, env = "BLOCKFALL_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let config = SessionConfig::new(args.width, args.height, args.tick_ms);

    let mut game = GameSession::new(config, seed).context("invalid session configuration")?;
    eprintln!(
        "[blockfall] starting {}x{} grid, tick {}ms, seed {}",
        config.width, config.height, config.tick_ms, seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[blockfall] exit: score {}, rows {}, seed {}",
        game.score(),
        game.rows_cleared(),
        seed
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameSession) -> Result<()> {
    let clock = SystemClock::new();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        game.on_frame(&clock);

        let status = if game.is_spawn_blocked() {
            "STACK FULL - r to restart"
        } else {
            "q quit  r restart"
        };
        term.draw(&game.snapshot(), Some(status))?;

        let frame_start = clock.now_ms();
        while clock.now_ms().saturating_sub(frame_start) < FRAME_MS {
            if !event::poll(frame)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if is_restart(key) {
                game.restart();
                continue;
            }
            if let Some(command) = handle_key_event(key) {
                game.handle_command(command);
            }
        }
    }
}

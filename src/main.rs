//! Headless stackfall runner (default binary).
//!
//! Plays a scripted autoplay session at a fixed 120 Hz step with no terminal
//! or window attached, then records the high score. Useful as a smoke test of
//! the engine and the store on a real machine.
//!
//! Usage: `stackfall [CONFIG_PATH]`. Set `RUST_LOG=debug` for per-piece logs.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};

use stackfall::core::GameState;
use stackfall::shake::{ScreenShake, SHAKE_DECAY};
use stackfall::store::{load_config, HighScoreStore};
use stackfall::types::{Direction, RotateDirection};

/// 1/120 s
const FRAME: Duration = Duration::from_nanos(8_333_333);
/// Ten minutes of simulated play
const MAX_FRAMES: u64 = 120 * 60 * 10;
/// Frames each piece spends under control before it is hard dropped
const DROP_AFTER_FRAMES: u32 = 6;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("failed to load config")?;

    let store = HighScoreStore::at_default_path();
    let best = store.load();
    info!("starting headless run (high score {best})");

    let shake = Rc::new(RefCell::new(ScreenShake::new()));
    let sink = Rc::clone(&shake);
    let mut game = GameState::with_effects(
        config,
        Box::new(move |amount: f32| sink.borrow_mut().add(amount)),
    );

    let mut autoplay = Autoplay::default();
    let mut frames = 0u64;
    let mut peak_shake = 0.0f32;

    while !game.dead() && frames < MAX_FRAMES {
        autoplay.step(&mut game);
        game.update(FRAME);
        frames += 1;

        let cleared = game.take_cleared_rows();
        if !cleared.is_empty() {
            debug!("frame {frames}: cleared rows {cleared:?}");
        }

        let mut shake = shake.borrow_mut();
        peak_shake = peak_shake.max(shake.magnitude());
        shake.update(SHAKE_DECAY);
    }

    info!(
        "run over after {} frames ({:.1}s): {} pieces, score {}, lines {}, level {}, peak shake {:.1}",
        frames,
        frames as f64 * FRAME.as_secs_f64(),
        autoplay.pieces,
        game.score(),
        game.lines(),
        game.level(),
        peak_shake
    );

    if store
        .record(game.score())
        .with_context(|| format!("failed to save high score to {}", store.path().display()))?
    {
        info!("new high score {}", game.score());
    }

    Ok(())
}

/// Scripted player: spreads pieces across the board, rotating and holding on a
/// fixed schedule, and hard drops each one after a few frames.
#[derive(Debug, Default)]
struct Autoplay {
    pieces: u64,
    frames_on_piece: u32,
    shifted: u32,
}

impl Autoplay {
    fn step(&mut self, game: &mut GameState) {
        if game.is_clearing() {
            return;
        }

        // Column offset from spawn for this piece, -4..=4
        let target = (self.pieces * 3 % 9) as i32 - 4;
        let direction = if target < 0 { Direction::Left } else { Direction::Right };

        match self.frames_on_piece {
            0 if self.pieces % 7 == 3 => {
                game.hold();
            }
            1 => {
                for _ in 0..self.pieces % 4 {
                    game.rotate(RotateDirection::Clockwise);
                }
            }
            _ => {}
        }

        if self.frames_on_piece >= 2 && self.shifted < target.unsigned_abs() {
            if game.move_piece(direction) {
                self.shifted += 1;
            } else {
                self.shifted = target.unsigned_abs();
            }
        }

        self.frames_on_piece += 1;
        if self.frames_on_piece >= DROP_AFTER_FRAMES && game.hard_drop() {
            self.pieces += 1;
            self.frames_on_piece = 0;
            self.shifted = 0;
        }
    }
}

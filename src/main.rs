//! Terminal brick-game Tetris.
//!
//! Wires the deterministic engine to a crossterm front-end: keyboard events
//! become engine actions, an 80 ms tick drives gravity, and every frame is
//! redrawn from a snapshot.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use crossterm::event::{self, Event, KeyEventKind};

use brick_tetris::core::{FileStore, GameState};
use brick_tetris::input::{is_forced_quit, map_key};
use brick_tetris::term::{GameView, TerminalRenderer};
use brick_tetris::types::{UserAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term);
    // Always restore the terminal, even when the loop errored.
    let exit = term.exit();
    result?;
    exit
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let store = FileStore::new(high_score_path());
    let mut state = GameState::new(seed, Box::new(store));
    let view = GameView::new();

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let mut action = UserAction::None;

        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if is_forced_quit(key) {
                        return Ok(());
                    }
                    action = map_key(key);
                    // A repeat is a held key; Drop keeps its held semantics
                    // for the whole press so the piece slams down.
                    let held = key.kind == KeyEventKind::Repeat || action == UserAction::Drop;
                    state.apply_action(action, held);
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            state.advance();
        }

        term.draw(&view, &state.snapshot())?;

        if state.should_exit(action) {
            return Ok(());
        }
    }
}

/// High-score file location, overridable for tests and sandboxes.
fn high_score_path() -> PathBuf {
    match env::var_os("BRICK_TETRIS_HOME") {
        Some(dir) => PathBuf::from(dir).join("highscore.txt"),
        None => PathBuf::from("game_info").join("highscore.txt"),
    }
}

//! Terminal falling-block game runner.
//!
//! Owns the clock and the event loop: player commands are applied as
//! they arrive, gravity is evaluated once per tick after them, then the
//! presenter draws. The engine never reads the clock itself; every
//! time-gated call receives the elapsed-milliseconds timestamp.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::Engine;
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{GameView, TerminalRenderer};
use tui_blockfall::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut engine = Engine::new(GameConfig::default(), seed)?;
    let view = GameView;

    let start = Instant::now();
    let now_ms = |start: Instant| start.elapsed().as_millis() as u64;

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(&view.render(&engine))?;

        // Input with timeout until next tick. Presses and terminal
        // auto-repeats both feed the engine; its per-command cooldowns
        // pace held keys.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply(action, now_ms(start));
                    }
                }
            }
        }

        // Gravity runs after input so a late command can still rescue a
        // piece in the same frame.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.gravity_tick(now_ms(start));
        }
    }
}

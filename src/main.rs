//! Terminal Blockfall runner (default binary).
//!
//! Owns the cooperative frame loop: input events are delivered to the
//! session once per frame, followed by one gravity/lock-delay update, and
//! the resulting snapshot is painted through the diffing renderer. Core
//! event notifications become terminal-bell cues.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameSession;
use blockfall::input::{map_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, InputEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(time_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        session.handle_event(InputEvent::Quit);
                        return Ok(());
                    }
                    if let Some(input) = map_key_event(key) {
                        session.handle_event(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        // Sound cues from the simulation. The bell is the only output
        // device here, so every cue maps to it.
        for game_event in session.take_events() {
            match game_event {
                GameEvent::Rotated | GameEvent::LinesCleared(_) | GameEvent::GameOver => {
                    term.bell()?
                }
            }
        }
    }
}

/// Seed the piece sequence from wall-clock time so each run differs.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

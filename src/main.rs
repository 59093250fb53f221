//! Terminal Four Blocks runner (default binary).
//!
//! The host loop for the engine: it polls crossterm for key presses, feeds
//! elapsed time to the gravity clock, applies actions and ticks to the
//! `GameState`, and redraws through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use four_blocks::config::AppConfig;
use four_blocks::core::{GameState, GravityClock, TickOutcome, UniformPieces};
use four_blocks::input::{handle_key_event, should_quit};
use four_blocks::logging;
use four_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use four_blocks::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    log::info!(
        "starting: gravity {}ms, seed {:?}",
        config.gravity_ms,
        config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let source = match config.seed {
        Some(seed) => UniformPieces::seeded(seed),
        None => UniformPieces::from_entropy(),
    };
    let mut game_state = GameState::with_source(source);
    let mut gravity = GravityClock::new(config.gravity_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!(
                            "quit at piece {} after {} locks",
                            game_state.piece_id(),
                            game_state.locked_count()
                        );
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        let outcome = game_state.apply_action(action);
                        log::trace!("{} -> {:?}", action.as_str(), outcome);
                        if outcome.restarts_gravity() {
                            gravity.restart();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();

            if game_state.paused() || game_state.game_over() {
                gravity.restart();
                continue;
            }

            for _ in 0..gravity.advance(elapsed.as_millis() as u32) {
                if game_state.tick() == TickOutcome::Idle {
                    break;
                }
            }
        }
    }
}

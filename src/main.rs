//! Terminal runner for duotris.
//!
//! Single-threaded frame loop: poll input with a timeout, apply mapped
//! actions synchronously, tick the simulation with measured elapsed time,
//! render a snapshot. The terminal is always restored on exit.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use duotris::core::{DuelLayout, GameSnapshot, GameState};
use duotris::input::{handle_key_event, should_quit};
use duotris::settings::JsonFileSettings;
use duotris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use duotris::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

/// Spacing adjustment step for the +/- keys, in cells.
const SPACING_STEP: f32 = 1.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn settings_path() -> String {
    std::env::var("DUOTRIS_SETTINGS").unwrap_or_else(|_| "duotris-settings.json".to_string())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut settings = JsonFileSettings::load(settings_path());
    let mut layout = DuelLayout::new(BOARD_WIDTH, BOARD_HEIGHT, &settings);
    let mut game = GameState::new(BOARD_WIDTH, BOARD_HEIGHT, clock_seed());

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, &layout, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with a timeout until the next frame.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match key.code {
                        // Spacing preference, persisted on change.
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            let next = (layout.internal_spacing() + SPACING_STEP).min(8.0);
                            layout.set_internal_spacing(next, &mut settings);
                        }
                        KeyCode::Char('-') => {
                            let next = (layout.internal_spacing() - SPACING_STEP).max(0.0);
                            layout.set_internal_spacing(next, &mut settings);
                        }
                        _ => {
                            if let Some(action) = handle_key_event(key, game.waiting_for_start()) {
                                game.apply_action(action);
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        // Tick with measured elapsed time.
        if last_tick.elapsed() >= frame {
            let delta = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            game.tick(delta);
        }
    }
}

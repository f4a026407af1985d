//! Terminal Simon Says runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The engine runs
//! on a fixed timestep; each tick hands it the real elapsed time so the
//! playback delays stay accurate.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use simon_says::audio::player_for;
use simon_says::core::GameSnapshot;
use simon_says::engine::Engine;
use simon_says::input::{handle_key_event, should_quit, start_control};
use simon_says::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use simon_says::types::{GameIntent, TICK_MS};
use simon_says::{logging, GameConfig};

/// Repaint an unchanged board at least this often.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut engine = Engine::new(config.seed, player_for(config.sound)).with_strict_mode(config.strict);
    info!(
        seed = config.seed,
        strict = config.strict,
        sound = config.sound.as_str(),
        "simon says ready"
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(games = engine.games(), best = engine.best_steps(), "quit");
                        return Ok(());
                    }

                    if let Some(intent) = handle_key_event(key) {
                        let intent = match intent {
                            GameIntent::Start => start_control(engine.state()),
                            other => other,
                        };
                        engine.apply_intent(intent);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            engine.tick(elapsed.as_millis() as u32);
        }
    }
}

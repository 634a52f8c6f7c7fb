//! Terminal platformer runner (default binary).
//!
//! Fixed 60 FPS loop: drain terminal events, step the world with the held
//! keys, compose the frame and flush the diff to the terminal.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};
use tracing::{error, info};

use tui_platformer::core::WorldSnapshot;
use tui_platformer::engine::{Config, FramePacer, Session};
use tui_platformer::input::{display_event, HeldKeys};
use tui_platformer::logging;
use tui_platformer::term::{
    Canvas, Compositor, FrameBuffer, GameView, Sprite, TerminalRenderer, Viewport,
};
use tui_platformer::types::{DisplayEvent, TARGET_FPS};

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config.log_path)?;
    info!(?config, "starting");

    let sprite = Sprite::load(&config.sprite_path).inspect_err(|e| error!("{e:#}"))?;

    install_terminal_restore_hook();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &sprite);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, sprite: &Sprite) -> Result<()> {
    let size = terminal::size().context("failed to query terminal size")?;
    let mut session = Session::new(config.seed, sprite.size(), size);

    let mut held = HeldKeys::new()
        .with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_release_events(term.reports_key_releases());

    let view = GameView::default();
    let mut compositor = Compositor::new();
    let mut display = Canvas::new(0, 0);
    let mut snapshot = WorldSnapshot::default();
    let mut fb = FrameBuffer::new(size.0, size.1);
    let mut pacer = FramePacer::new(TARGET_FPS);

    while session.is_running() {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Key(key) = ev {
                held.handle_key_event(key);
            }
            if let Some(display_ev) = display_event(&ev) {
                if matches!(
                    display_ev,
                    DisplayEvent::ToggleFullscreen | DisplayEvent::Resize { .. }
                ) {
                    term.invalidate();
                }
                session.handle_event(display_ev);
            }
        }
        if !session.is_running() {
            break;
        }

        held.update(pacer.frame_ms());
        session.step(held.snapshot());

        session.snapshot_into(&mut snapshot);
        let (px_w, px_h) = session.display().surface_pixels();
        display.resize(px_w, px_h);
        compositor.compose(&snapshot, sprite, &mut display);

        let (cols, rows) = session.display().terminal_size();
        view.render_into(
            &display,
            !session.display().is_fullscreen(),
            Viewport::new(cols, rows),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        pacer.wait();
    }

    let world = session.world();
    info!(frames = world.frame(), resets = world.resets(), "shutting down");
    Ok(())
}

/// Leave raw mode and the alternate screen before the panic message prints.
fn install_terminal_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        previous(info);
    }));
}

use tui_platformer::core::WorldSnapshot;
use tui_platformer::engine::Session;
use tui_platformer::term::{Canvas, Compositor, FrameBuffer, GameView, Rgb, Sprite, Viewport};
use tui_platformer::types::{DisplayEvent, BACKGROUND_COLOR};

const HERO: Rgb = Rgb::new(200, 10, 10);

fn hero() -> Sprite {
    Sprite::from_pixels(30, 40, vec![Some(HERO); 30 * 40]).unwrap()
}

/// Compose and render the current session frame the way the binary does.
fn render(session: &Session, sprite: &Sprite) -> FrameBuffer {
    let mut snap = WorldSnapshot::default();
    session.snapshot_into(&mut snap);

    let (px_w, px_h) = session.display().surface_pixels();
    let mut display = Canvas::new(px_w, px_h);
    Compositor::new().compose(&snap, sprite, &mut display);

    let (cols, rows) = session.display().terminal_size();
    GameView::default().render(
        &display,
        !session.display().is_fullscreen(),
        Viewport::new(cols, rows),
    )
}

#[test]
fn windowed_frame_has_border_corners() {
    let session = Session::new(1, (30, 40), (82, 27));
    let fb = render(&session, &hero());

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(81, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 26).unwrap().ch, '└');
    assert_eq!(fb.get(81, 26).unwrap().ch, '┘');
    assert!(fb.row_text(0).contains("tui-platformer"));
}

#[test]
fn windowed_surface_is_half_blocks_inside_border() {
    let session = Session::new(1, (30, 40), (82, 27));
    let fb = render(&session, &hero());

    for y in 1..26 {
        for x in 1..81 {
            assert_eq!(fb.get(x, y).unwrap().ch, '▀', "cell ({x}, {y})");
        }
    }

    // Top-left of the surface shows sky.
    let sky = fb.get(1, 1).unwrap();
    assert_eq!(sky.style.fg, BACKGROUND_COLOR);
    assert_eq!(sky.style.bg, BACKGROUND_COLOR);
}

#[test]
fn player_is_drawn_at_surface_centre() {
    let session = Session::new(1, (30, 40), (82, 27));
    let fb = render(&session, &hero());

    let cell = fb.get(41, 13).unwrap();
    assert_eq!(cell.style.fg, HERO);
    assert_eq!(cell.style.bg, HERO);
}

#[test]
fn fullscreen_drops_the_border() {
    let mut session = Session::new(1, (30, 40), (82, 27));
    session.handle_event(DisplayEvent::ToggleFullscreen);
    let fb = render(&session, &hero());

    assert_eq!((fb.width(), fb.height()), (82, 27));
    assert_eq!(fb.get(0, 0).unwrap().ch, '▀');
    assert_eq!(fb.get(81, 26).unwrap().ch, '▀');
}

#[test]
fn resize_changes_framebuffer_size() {
    let mut session = Session::new(1, (30, 40), (82, 27));
    session.handle_event(DisplayEvent::Resize {
        width: 42,
        height: 12,
    });
    let fb = render(&session, &hero());

    assert_eq!((fb.width(), fb.height()), (42, 12));
    assert_eq!(fb.get(41, 11).unwrap().ch, '┘');
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut session = Session::new(1, (30, 40), (82, 27));
    for (w, h) in [(0, 0), (1, 1), (2, 2), (3, 1)] {
        session.handle_event(DisplayEvent::Resize {
            width: w,
            height: h,
        });
        let fb = render(&session, &hero());
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

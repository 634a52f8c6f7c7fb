use tui_platformer::core::{PlatformKind, World};
use tui_platformer::types::{
    FrameInput, GRAVITY, JUMP_FORCE, MOVE_SPEED, NUM_PLATFORMS, PLATFORM_HEIGHT, PLATFORM_MAX_WIDTH,
    PLATFORM_MIN_WIDTH, PLATFORM_SLOTS, PLAYER_START, SCREEN_HEIGHT, SCREEN_WIDTH,
};

const IDLE: FrameInput = FrameInput {
    left: false,
    right: false,
    jump: false,
};
const RIGHT: FrameInput = FrameInput {
    left: false,
    right: true,
    jump: false,
};
const LEFT: FrameInput = FrameInput {
    left: true,
    right: false,
    jump: false,
};
const JUMP: FrameInput = FrameInput {
    left: false,
    right: false,
    jump: true,
};

fn world() -> World {
    World::new(12345, 30.0, 40.0)
}

/// Step without input until the player lands. Returns the slot.
fn land(world: &mut World) -> usize {
    for _ in 0..200 {
        if let Some(slot) = world.step(IDLE).landed_on {
            return slot;
        }
    }
    panic!("player never landed");
}

#[test]
fn gravity_accumulates_while_airborne() {
    let mut w = world();
    let start_y = w.player().rect().y;

    let mut expected_vy = 0.0;
    let mut expected_y = start_y;
    for _ in 0..10 {
        let report = w.step(IDLE);
        assert_eq!(report.landed_on, None);
        expected_vy += GRAVITY;
        expected_y += expected_vy;
        assert_eq!(w.player().vy, expected_vy);
        assert_eq!(w.player().rect().y, expected_y);
    }
}

#[test]
fn player_screen_column_never_moves() {
    let mut w = world();
    let x = w.player().rect().x;
    for i in 0..300 {
        let input = if i % 3 == 0 { LEFT } else { RIGHT };
        w.step(input);
        assert_eq!(w.player().rect().x, x);
    }
}

#[test]
fn landing_snaps_to_platform_top_and_stays() {
    let mut w = world();
    let slot = land(&mut w);

    let top = w.platforms()[slot].rect().top();
    assert_eq!(w.player().rect().bottom(), top);
    assert_eq!(w.player().vy, 0.0);
    assert!(!w.player().jumping);

    for _ in 0..60 {
        let report = w.step(IDLE);
        assert_eq!(report.landed_on, Some(slot));
        assert_eq!(w.player().rect().bottom(), top);
    }
}

#[test]
fn held_jump_does_not_retrigger_mid_air() {
    let mut w = world();
    land(&mut w);

    w.step(JUMP);
    assert!(w.player().jumping);
    assert_eq!(w.player().vy, -JUMP_FORCE + GRAVITY);

    w.step(JUMP);
    assert_eq!(w.player().vy, -JUMP_FORCE + 2.0 * GRAVITY);
}

#[test]
fn jump_rises_through_platforms_then_lands_again() {
    let mut w = world();
    land(&mut w);

    w.step(JUMP);
    let mut landed = None;
    for _ in 0..200 {
        let report = w.step(IDLE);
        if report.landed_on.is_some() {
            landed = report.landed_on;
            break;
        }
    }
    assert!(landed.is_some());
    assert!(!w.player().jumping);
    assert_eq!(w.player().vy, 0.0);
}

#[test]
fn horizontal_input_scrolls_platforms_and_camera() {
    let mut w = world();
    let before: Vec<f32> = w.platforms().iter().map(|p| p.rect().x).collect();

    let report = w.step(RIGHT);
    assert!(report.recycled.is_empty());
    assert_eq!(w.camera_offset(), MOVE_SPEED);
    assert_eq!(w.player().vx, MOVE_SPEED);
    for (p, x) in w.platforms().iter().zip(&before) {
        assert_eq!(p.rect().x, x - MOVE_SPEED);
    }

    w.step(LEFT);
    w.step(LEFT);
    assert_eq!(w.camera_offset(), -MOVE_SPEED);
    assert_eq!(w.player().vx, -MOVE_SPEED);

    w.step(IDLE);
    assert_eq!(w.player().vx, 0.0);
}

#[test]
fn left_wins_when_both_directions_held() {
    let mut w = world();
    w.step(FrameInput {
        left: true,
        right: true,
        jump: false,
    });
    assert_eq!(w.camera_offset(), -MOVE_SPEED);
}

#[test]
fn long_scroll_recycles_only_floating_platforms() {
    let mut w = world();
    let mut recycled_total = 0;

    for _ in 0..600 {
        let report = w.step(RIGHT);
        assert!(!report.recycled.contains(&0));
        recycled_total += report.recycled.len();

        assert_eq!(w.platforms().len(), PLATFORM_SLOTS);
        assert_eq!(w.platforms()[0].kind(), PlatformKind::Ground);
        for p in &w.platforms()[1..] {
            assert_eq!(p.kind(), PlatformKind::Floating);
            assert_eq!(p.rect().h, PLATFORM_HEIGHT);
            assert!(p.rect().w >= PLATFORM_MIN_WIDTH as f32);
            assert!(p.rect().w <= PLATFORM_MAX_WIDTH as f32);
            // Anything fully past the left edge would have been replaced.
            assert!(p.rect().right() >= 0.0);
        }
    }

    assert!(recycled_total >= NUM_PLATFORMS);
}

#[test]
fn recycled_platform_enters_from_the_far_edge() {
    let mut w = world();
    for _ in 0..600 {
        let report = w.step(LEFT);
        if report.fell_through {
            continue;
        }
        for &slot in &report.recycled {
            let r = w.platforms()[slot].rect();
            assert_eq!(r.x, -r.w);
            assert!(r.y >= 20.0 && r.y <= SCREEN_HEIGHT - 20.0);
        }
    }
}

#[test]
fn falling_below_screen_resets_layout_but_not_camera() {
    let mut w = world();
    for _ in 0..4 {
        w.step(RIGHT);
    }
    let camera = w.camera_offset();

    let mut rect = w.player().rect();
    rect.y = SCREEN_HEIGHT - rect.h + 5.0;
    w.player_mut().set_rect(rect);

    let report = w.step(IDLE);
    assert!(report.fell_through);
    assert_eq!(w.resets(), 1);
    assert_eq!(w.player().rect().center(), PLAYER_START);
    assert_eq!(w.player().vy, 0.0);
    assert!(!w.player().jumping);
    assert_eq!(w.camera_offset(), camera);

    assert_eq!(w.platforms()[0].rect().x, 0.0);
    for (slot, p) in w.platforms().iter().enumerate().skip(1) {
        let (x, y) = World::initial_layout(slot, p.rect().w);
        assert_eq!((p.rect().x, p.rect().y), (x, y));
    }
}

#[test]
fn same_seed_same_run() {
    let inputs = [RIGHT, RIGHT, JUMP, IDLE, LEFT, RIGHT, JUMP, RIGHT];
    let mut a = world();
    let mut b = world();
    for i in 0..500 {
        let input = inputs[i % inputs.len()];
        assert_eq!(a.step(input), b.step(input));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn platforms_start_on_screen() {
    let w = world();
    for p in w.platforms() {
        let r = p.rect();
        assert!(r.right() > 0.0 && r.left() < SCREEN_WIDTH);
        assert!(r.bottom() <= SCREEN_HEIGHT);
    }
}

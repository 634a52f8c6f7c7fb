//! World module - owns the player and platforms and drives one frame
//!
//! Platforms live in a fixed slot array: slot 0 is the ground, slots
//! `1..=NUM_PLATFORMS` are floating platforms. Recycling overwrites a slot in
//! place, so iteration order (and therefore collision tie-breaking) is stable.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::entity::Entity;
use crate::platform::Platform;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::snapshot::{PlatformSnapshot, PlayerSnapshot, WorldSnapshot};
use crate::types::{
    Direction, FrameInput, GROUND_HEIGHT, MOVE_SPEED, NUM_PLATFORMS, PLATFORM_HEIGHT,
    PLATFORM_SLOTS, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// What happened during one [`World::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Slot the player landed on this frame
    pub landed_on: Option<usize>,
    /// Slots replaced because they scrolled off screen
    pub recycled: ArrayVec<usize, PLATFORM_SLOTS>,
    /// The player dropped below the screen and everything was reset
    pub fell_through: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    player: Player,
    platforms: Vec<Platform>,
    /// Horizontal pan accumulated from movement input. Never reset.
    camera_offset: f32,
    rng: SimpleRng,
    frame: u64,
    resets: u32,
}

impl World {
    /// Build the start state for a player sprite of the given size.
    pub fn new(seed: u32, player_width: f32, player_height: f32) -> Self {
        let mut rng = SimpleRng::new(seed);

        let mut platforms = Vec::with_capacity(PLATFORM_SLOTS);
        platforms.push(Platform::ground(player_height));
        for _ in 0..NUM_PLATFORMS {
            platforms.push(Platform::random_floating(&mut rng));
        }

        let mut world = Self {
            player: Player::new(player_width, player_height),
            platforms,
            camera_offset: 0.0,
            rng,
            frame: 0,
            resets: 0,
        };
        world.apply_initial_layout();
        world
    }

    /// Start position of the floating platform in `slot`.
    ///
    /// Columns are evenly spaced across the screen (integer column width) and
    /// each slot sits one platform height above the previous one.
    pub fn initial_layout(slot: usize, width: f32) -> (f32, f32) {
        let column = SCREEN_WIDTH as i32 / (NUM_PLATFORMS as i32 + 1);
        let x = column * (slot as i32 + 1) - width as i32 / 2;
        let y = SCREEN_HEIGHT - GROUND_HEIGHT - PLATFORM_HEIGHT * (slot as f32 + 1.0);
        (x as f32, y)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera_offset
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform_mut(&mut self, slot: usize) -> Option<&mut Platform> {
        self.platforms.get_mut(slot)
    }

    /// Advance one frame.
    ///
    /// Order: scroll/recycle, jump, gravity, integrate, collide, fall-through
    /// reset, platform drift.
    pub fn step(&mut self, input: FrameInput) -> StepReport {
        let mut report = StepReport::default();

        match input.horizontal() {
            Some(Direction::Left) => {
                self.player.vx = -MOVE_SPEED;
                self.camera_offset -= MOVE_SPEED;
                self.scroll(MOVE_SPEED, &mut report.recycled);
            }
            Some(Direction::Right) => {
                self.player.vx = MOVE_SPEED;
                self.camera_offset += MOVE_SPEED;
                self.scroll(-MOVE_SPEED, &mut report.recycled);
            }
            None => self.player.vx = 0.0,
        }

        if input.jump {
            self.player.try_jump();
        }

        self.player.apply_gravity();
        self.player.update();
        report.landed_on = self.player.collide_with_platforms(&self.platforms);

        if self.player.rect().bottom() > SCREEN_HEIGHT {
            self.reset_after_fall();
            report.fell_through = true;
        }

        for platform in &mut self.platforms {
            platform.update();
        }

        self.frame += 1;
        report
    }

    /// Shift every platform by `dx` and recycle floating platforms that left
    /// the screen on the far side.
    fn scroll(&mut self, dx: f32, recycled: &mut ArrayVec<usize, PLATFORM_SLOTS>) {
        for (slot, platform) in self.platforms.iter_mut().enumerate() {
            platform.shift_x(dx);
            if platform.is_ground() {
                continue;
            }

            let rect = platform.rect();
            let gone = if dx > 0.0 {
                rect.left() > SCREEN_WIDTH
            } else {
                rect.right() < 0.0
            };
            if gone {
                *platform = respawn_beyond_edge(&mut self.rng, dx);
                let _ = recycled.try_push(slot);
            }
        }
    }

    fn reset_after_fall(&mut self) {
        self.player.reset();
        let ground_y = Platform::ground_y(self.player.rect().h);

        for (slot, platform) in self.platforms.iter_mut().enumerate() {
            if platform.is_ground() {
                platform.set_position(0.0, ground_y);
            } else {
                let (x, y) = Self::initial_layout(slot, platform.rect().w);
                platform.set_position(x, y);
            }
            platform.set_velocity(0.0, 0.0);
        }

        self.resets += 1;
        debug!(
            resets = self.resets,
            frame = self.frame,
            camera_offset = self.camera_offset,
            "player fell through, layout reset"
        );
    }

    fn apply_initial_layout(&mut self) {
        for (slot, platform) in self.platforms.iter_mut().enumerate().skip(1) {
            let (x, y) = Self::initial_layout(slot, platform.rect().w);
            platform.set_position(x, y);
        }
    }

    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        let rect = self.player.rect();
        out.player = PlayerSnapshot {
            rect,
            vx: self.player.vx,
            vy: self.player.vy,
            jumping: self.player.jumping,
        };
        for (dst, src) in out.platforms.iter_mut().zip(self.platforms.iter()) {
            *dst = PlatformSnapshot {
                rect: src.rect(),
                color: src.color(),
                kind: src.kind(),
            };
        }
        out.camera_offset = self.camera_offset;
        out.frame = self.frame;
        out.resets = self.resets;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snap = WorldSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Fresh platform placed just past the edge the world is scrolling in from.
///
/// `dx > 0` means platforms move right, so the replacement enters from the left.
fn respawn_beyond_edge(rng: &mut SimpleRng, dx: f32) -> Platform {
    let mut platform = Platform::random_floating(rng);
    let width = platform.rect().w;
    let x = if dx > 0.0 { -width } else { SCREEN_WIDTH + width };
    let y = rng.range_inclusive(GROUND_HEIGHT as i32, (SCREEN_HEIGHT - PLATFORM_HEIGHT) as i32);
    platform.set_position(x, y as f32);
    platform
}

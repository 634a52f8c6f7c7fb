//! Player entity - the controllable sprite
//!
//! The player keeps a fixed screen column; horizontal intent scrolls the
//! world instead. Vertically it jumps, accumulates gravity every frame and
//! lands on platforms only while falling.

use crate::collision::first_contact;
use crate::entity::Entity;
use crate::platform::Platform;
use crate::types::{Rect, GRAVITY, JUMP_FORCE, MOVE_SPEED, PLAYER_START};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub jumping: bool,
}

impl Player {
    /// Create a player of the given sprite size at the start position.
    pub fn new(width: f32, height: f32) -> Self {
        let mut player = Self {
            rect: Rect::new(0.0, 0.0, width, height),
            vx: MOVE_SPEED,
            vy: 0.0,
            jumping: false,
        };
        player.reset();
        player
    }

    /// Return to the start position and velocity.
    pub fn reset(&mut self) {
        self.rect.set_center(PLAYER_START.0, PLAYER_START.1);
        self.vx = MOVE_SPEED;
        self.vy = 0.0;
        self.jumping = false;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Start a jump unless one is already in progress.
    ///
    /// Returns `true` when the jump was triggered.
    pub fn try_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.vy = -JUMP_FORCE;
        true
    }

    /// Accelerate downwards. Applied every frame, airborne or not.
    pub fn apply_gravity(&mut self) {
        self.vy += GRAVITY;
    }

    /// Land on the first overlapping platform when falling.
    ///
    /// Overlaps while rising (or at rest) are ignored, so platforms are
    /// passable from below. Returns the slot landed on.
    pub fn collide_with_platforms(&mut self, platforms: &[Platform]) -> Option<usize> {
        let hit = first_contact(&self.rect, platforms)?;
        if self.vy <= 0.0 {
            return None;
        }
        self.rect.set_bottom(platforms[hit].rect().top());
        self.vy = 0.0;
        self.jumping = false;
        Some(hit)
    }
}

impl Entity for Player {
    /// Integrate vertical speed. The screen column stays fixed.
    fn update(&mut self) {
        self.rect.y += self.vy;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

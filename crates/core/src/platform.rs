//! Platform entity - rectangular obstacles the player can land on
//!
//! Slot 0 of the world is always the ground: full width, never recycled.
//! The remaining slots hold floating platforms that can drift (bouncing off
//! the screen edges) and are replaced when they scroll off screen.

use crate::entity::Entity;
use crate::rng::SimpleRng;
use crate::types::{
    Rect, Rgb, GROUND_COLOR, GROUND_HEIGHT, PALETTE, PLATFORM_HEIGHT, PLATFORM_MAX_WIDTH,
    PLATFORM_MIN_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Distinguishes the fixed ground from recyclable platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Ground,
    Floating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
    color: Rgb,
    vx: f32,
    vy: f32,
    kind: PlatformKind,
}

impl Platform {
    /// Create a floating platform at a random on-screen position with zero velocity.
    pub fn create(rng: &mut SimpleRng, color: Rgb, width: f32, height: f32) -> Self {
        let x = rng.range_inclusive(0, (SCREEN_WIDTH - width) as i32) as f32;
        let y = rng.range_inclusive(0, (SCREEN_HEIGHT - height) as i32) as f32;
        Self::floating(Rect::new(x, y, width, height), color)
    }

    /// Create a floating platform with a random palette color and width.
    pub fn random_floating(rng: &mut SimpleRng) -> Self {
        let color = *rng.choose(&PALETTE).unwrap_or(&GROUND_COLOR);
        let width = rng.range_inclusive(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH) as f32;
        Self::create(rng, color, width, PLATFORM_HEIGHT)
    }

    pub fn floating(rect: Rect, color: Rgb) -> Self {
        Self {
            rect,
            color,
            vx: 0.0,
            vy: 0.0,
            kind: PlatformKind::Floating,
        }
    }

    /// The ground spans the whole screen and sits one player height above the bottom.
    pub fn ground(player_height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, Self::ground_y(player_height), SCREEN_WIDTH, GROUND_HEIGHT),
            color: GROUND_COLOR,
            vx: 0.0,
            vy: 0.0,
            kind: PlatformKind::Ground,
        }
    }

    pub fn ground_y(player_height: f32) -> f32 {
        SCREEN_HEIGHT - GROUND_HEIGHT - player_height
    }

    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    pub fn is_ground(&self) -> bool {
        self.kind == PlatformKind::Ground
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vx = vx;
        self.vy = vy;
    }

    /// Move without touching the size.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn shift_x(&mut self, dx: f32) {
        self.rect.x += dx;
    }
}

impl Entity for Platform {
    /// Apply drift, then bounce off whichever screen edges were crossed.
    fn update(&mut self) {
        self.rect.x += self.vx;
        self.rect.y += self.vy;

        if self.rect.left() < 0.0 || self.rect.right() > SCREEN_WIDTH {
            self.vx = -self.vx;
        }
        if self.rect.top() < 0.0 || self.rect.bottom() > SCREEN_HEIGHT {
            self.vy = -self.vy;
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

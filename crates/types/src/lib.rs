//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Screen Dimensions
//!
//! The world is simulated in screen pixels:
//!
//! - **Width**: 800 pixels
//! - **Height**: 600 pixels
//! - **Player start**: centre at (400, 300)
//!
//! # Physics Constants
//!
//! All speeds are in pixels per frame:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_SPEED` | 5 | Horizontal scroll per frame |
//! | `JUMP_FORCE` | 10 | Upward speed at the start of a jump |
//! | `GRAVITY` | 0.5 | Downward acceleration per frame |
//! | `TARGET_FPS` | 60 | Fixed frame rate |
//!
//! # Examples
//!
//! ```
//! use tui_platformer_types::{Rect, SCREEN_WIDTH, SCREEN_HEIGHT};
//!
//! let mut r = Rect::new(0.0, 0.0, 30.0, 40.0);
//! r.set_center(400.0, 300.0);
//! assert_eq!(r.left(), 385.0);
//! assert_eq!(r.top(), 280.0);
//!
//! assert_eq!(SCREEN_WIDTH, 800.0);
//! assert_eq!(SCREEN_HEIGHT, 600.0);
//! ```

/// Screen (and world) width in pixels
pub const SCREEN_WIDTH: f32 = 800.0;

/// Screen (and world) height in pixels
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Horizontal scroll speed in pixels per frame
pub const MOVE_SPEED: f32 = 5.0;

/// Initial upward speed of a jump
pub const JUMP_FORCE: f32 = 10.0;

/// Downward acceleration added to the player every frame
pub const GRAVITY: f32 = 0.5;

/// Number of floating platforms (the ground is extra)
pub const NUM_PLATFORMS: usize = 10;

/// Total platform slots: the ground plus the floating platforms
pub const PLATFORM_SLOTS: usize = NUM_PLATFORMS + 1;

/// Height of every floating platform
pub const PLATFORM_HEIGHT: f32 = 20.0;

/// Height of the ground platform
pub const GROUND_HEIGHT: f32 = 20.0;

/// Narrowest floating platform (inclusive)
pub const PLATFORM_MIN_WIDTH: i32 = 100;

/// Widest floating platform (inclusive)
pub const PLATFORM_MAX_WIDTH: i32 = 200;

/// Player start position (centre)
pub const PLAYER_START: (f32, f32) = (400.0, 300.0);

/// Fixed frame rate
pub const TARGET_FPS: u32 = 60;

/// Zoom applied to the composed frame before it is blitted
pub const ZOOM: u32 = 2;

/// Display pixels covered by one terminal column
pub const PIXELS_PER_COLUMN: u32 = 10;

/// Display pixels covered by half a terminal row (one half-block glyph half)
pub const PIXELS_PER_HALF_ROW: u32 = 12;

/// Sky blue behind everything
pub const BACKGROUND_COLOR: Rgb = Rgb::new(135, 206, 235);

/// Color of the ground platform
pub const GROUND_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Colors a floating platform can be drawn in
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(75, 0, 130),    // indigo
    Rgb::new(238, 130, 238), // violet
    Rgb::new(255, 192, 203), // pink
    Rgb::new(128, 128, 128), // gray
    Rgb::new(255, 255, 255), // white
];


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in screen pixels.
///
/// `x`/`y` is the top-left corner. Edges follow screen conventions: `y` grows
/// downwards, so `bottom() > top()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, cx: f32, cy: f32) {
        self.x = cx - self.w / 2.0;
        self.y = cy - self.h / 2.0;
    }

    /// Move the rect vertically so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test. Rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Horizontal movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Snapshot of the held movement keys for one frame.
///
/// Produced by the input layer, consumed once per frame by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl FrameInput {
    /// Horizontal intent for this frame. Left and right are exclusive and left
    /// is checked first.
    pub fn horizontal(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Discrete events delivered by the input source, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Stop the frame loop
    Quit,
    /// Switch between the framed window and the whole terminal
    ToggleFullscreen,
    /// The terminal was resized (columns, rows)
    Resize { width: u16, height: u16 },
}

use crate::platform::PlatformKind;
use crate::types::{Rect, Rgb, PLATFORM_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSnapshot {
    pub rect: Rect,
    pub color: Rgb,
    pub kind: PlatformKind,
}

impl Default for PlatformSnapshot {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            color: Rgb::default(),
            kind: PlatformKind::Floating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub jumping: bool,
}

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldSnapshot {
    pub player: PlayerSnapshot,
    pub platforms: [PlatformSnapshot; PLATFORM_SLOTS],
    pub camera_offset: f32,
    pub frame: u64,
    pub resets: u32,
}

impl WorldSnapshot {
    /// Iterate platforms in slot order (ground first).
    pub fn platforms(&self) -> impl Iterator<Item = &PlatformSnapshot> {
        self.platforms.iter()
    }
}

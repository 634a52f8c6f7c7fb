//! Shared update/bounds contract for everything that lives in the world.

use crate::types::Rect;

/// Something that advances once per frame and occupies a rectangle.
pub trait Entity {
    /// Advance one frame.
    fn update(&mut self);

    /// Current bounds in screen pixels, used for collision and rendering.
    fn bounds(&self) -> Rect;
}

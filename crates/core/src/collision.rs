//! Collision detection between a body and the platform slots.

use crate::entity::Entity;
use crate::platform::Platform;
use crate::types::Rect;

/// Index of the first platform (in slot order) whose bounds overlap `bounds`.
///
/// Slot order is stable, so ties resolve the same way every frame.
pub fn first_contact(bounds: &Rect, platforms: &[Platform]) -> Option<usize> {
    platforms
        .iter()
        .position(|platform| platform.bounds().intersects(bounds))
}

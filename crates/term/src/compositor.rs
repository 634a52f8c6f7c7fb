//! Compositor: draws a world snapshot into an off-screen buffer, zooms it
//! and blits it onto the display surface at the camera offset.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::core::WorldSnapshot;
use crate::sprite::Sprite;
use crate::types::{BACKGROUND_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH, ZOOM};

pub struct Compositor {
    /// Off-screen buffer at world resolution.
    scratch: Canvas,
    zoom: u32,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            scratch: Canvas::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            zoom: ZOOM,
        }
    }

    /// The off-screen world image from the last [`Compositor::compose`].
    pub fn scratch(&self) -> &Canvas {
        &self.scratch
    }

    /// Top-left of the zoomed image on the display.
    ///
    /// Centres the zoomed screen and pans by the camera offset at zoom scale.
    pub fn blit_offset(&self, camera_offset: f32) -> (i64, i64) {
        let half_w = SCREEN_WIDTH as i64 / 2;
        let half_h = SCREEN_HEIGHT as i64 / 2;
        let pan = (camera_offset * self.zoom as f32).floor() as i64;
        (-half_w - pan, -half_h)
    }

    /// Compose one frame onto `display`.
    pub fn compose(&mut self, snap: &WorldSnapshot, sprite: &Sprite, display: &mut Canvas) {
        self.scratch.fill(BACKGROUND_COLOR);
        for platform in snap.platforms() {
            let r = platform.rect;
            self.scratch.fill_rect(r.x, r.y, r.w, r.h, platform.color);
        }
        let player = snap.player.rect;
        self.scratch.blit_sprite(sprite, player.x, player.y);

        display.fill(BACKGROUND_COLOR);
        let (dx, dy) = self.blit_offset(snap.camera_offset);
        display.blit_zoomed(&self.scratch, self.zoom, dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::World;
    use crate::types::{Rgb, FrameInput, MOVE_SPEED};

    const HERO: Rgb = Rgb::new(1, 2, 3);

    fn hero(w: u32, h: u32) -> Sprite {
        Sprite::from_pixels(w, h, vec![Some(HERO); (w * h) as usize]).unwrap()
    }

    #[test]
    fn blit_offset_centres_and_pans() {
        let c = Compositor::new();
        assert_eq!(c.blit_offset(0.0), (-400, -300));
        assert_eq!(c.blit_offset(10.0), (-420, -300));
        assert_eq!(c.blit_offset(-MOVE_SPEED), (-390, -300));
    }

    #[test]
    fn scratch_has_platforms_and_player_at_world_positions() {
        let world = World::new(3, 30.0, 40.0);
        let snap = world.snapshot();
        let sprite = hero(30, 40);
        let mut display = Canvas::new(800, 600);
        let mut c = Compositor::new();
        c.compose(&snap, &sprite, &mut display);

        let player = snap.player.rect;
        assert_eq!(
            c.scratch().get(player.x as i64, player.y as i64),
            Some(HERO)
        );

        let ground = snap.platforms[0];
        assert_eq!(
            c.scratch().get(10, ground.rect.y as i64 + 1),
            Some(ground.color)
        );
        assert_eq!(c.scratch().get(0, 0), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn display_shows_zoomed_centre() {
        let world = World::new(3, 30.0, 40.0);
        let snap = world.snapshot();
        let sprite = hero(30, 40);
        let mut display = Canvas::new(800, 600);
        let mut c = Compositor::new();
        c.compose(&snap, &sprite, &mut display);

        // World (400, 300) is the player centre; at zoom 2 with offset
        // (-400, -300) it lands on display (400, 300).
        assert_eq!(display.get(400, 300), Some(HERO));
        // World (385, 280) (player top-left) maps to display (370, 260).
        assert_eq!(display.get(370, 260), Some(HERO));
        assert_eq!(display.get(369, 260), c.scratch().get(384, 280));
    }

    #[test]
    fn camera_offset_pans_display() {
        let mut world = World::new(3, 30.0, 40.0);
        world.step(FrameInput {
            right: true,
            ..FrameInput::default()
        });
        let snap = world.snapshot();
        let sprite = hero(30, 40);
        let mut display = Canvas::new(800, 600);
        let mut c = Compositor::new();
        c.compose(&snap, &sprite, &mut display);

        // camera_offset = 5 shifts the image 10 display pixels left.
        let (cx, cy) = snap.player.rect.center();
        let dx = (cx * 2.0) as i64 - 400 - 10;
        let dy = (cy * 2.0) as i64 - 300;
        assert_eq!(display.get(dx, dy), Some(HERO));
    }
}

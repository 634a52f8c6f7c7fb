//! Session - one running game
//!
//! Owns the [`World`], the display state and the running flag. The binary
//! drains terminal events into [`Session::handle_event`], then calls
//! [`Session::step`] once per frame with the held-key snapshot.

use tracing::{debug, info};

use crate::core::{StepReport, World, WorldSnapshot};
use crate::display::DisplayState;
use crate::types::{DisplayEvent, FrameInput};

#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    display: DisplayState,
    running: bool,
}

impl Session {
    /// Start a session for a player sprite of the given size.
    pub fn new(seed: u32, sprite_size: (u32, u32), terminal_size: (u16, u16)) -> Self {
        let world = World::new(seed, sprite_size.0 as f32, sprite_size.1 as f32);
        info!(
            seed,
            sprite_width = sprite_size.0,
            sprite_height = sprite_size.1,
            "session started"
        );
        Self {
            world,
            display: DisplayState::new(terminal_size.0, terminal_size.1),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Apply a discrete event. Display changes take effect this frame.
    pub fn handle_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Quit => {
                info!(frame = self.world.frame(), "quit requested");
                self.running = false;
            }
            DisplayEvent::ToggleFullscreen => {
                self.display.toggle_fullscreen();
            }
            DisplayEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.display.resize(width, height);
            }
        }
    }

    /// Advance the simulation one frame. Does nothing once quit was requested.
    pub fn step(&mut self, input: FrameInput) -> StepReport {
        if !self.running {
            return StepReport::default();
        }
        self.world.step(input)
    }

    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        self.world.snapshot_into(out);
    }
}

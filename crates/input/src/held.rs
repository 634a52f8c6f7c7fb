//! Held-key tracking for terminal environments.
//!
//! The simulation samples "is left/right/jump held" once per frame. Terminals
//! that only report presses (and auto-repeat them) need a timeout to decide
//! when a key was let go; terminals with the keyboard enhancement protocol
//! report releases and the timeout is switched off.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{held_key, HeldKey};
use crate::types::FrameInput;

// Must outlast the terminal's initial auto-repeat delay, otherwise a held key
// flickers off between the first press and the first repeat.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 400;

/// One key's held flag plus the time since it was last seen.
#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    held: bool,
    idle_ms: u32,
}

impl KeySlot {
    fn press(&mut self) {
        self.held = true;
        self.idle_ms = 0;
    }

    fn release(&mut self) {
        self.held = false;
        self.idle_ms = 0;
    }

    fn age(&mut self, elapsed_ms: u32, timeout_ms: u32) {
        if !self.held {
            return;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > timeout_ms {
            self.release();
        }
    }
}

/// Tracks which movement keys are currently held.
///
/// Left and right are independent; when both are held the simulation gives
/// left priority (see [`FrameInput::horizontal`]).
#[derive(Debug, Clone)]
pub struct HeldKeys {
    left: KeySlot,
    right: KeySlot,
    jump: KeySlot,
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            left: KeySlot::default(),
            right: KeySlot::default(),
            jump: KeySlot::default(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Declare whether the terminal reports key releases.
    pub fn with_release_events(mut self, release_events: bool) -> Self {
        self.release_events = release_events;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed a key event. Returns `true` when it was a movement key.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let Some(held) = held_key(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(held),
            KeyEventKind::Release => self.release(held),
        }
        true
    }

    fn slot_mut(&mut self, key: HeldKey) -> &mut KeySlot {
        match key {
            HeldKey::Left => &mut self.left,
            HeldKey::Right => &mut self.right,
            HeldKey::Jump => &mut self.jump,
        }
    }

    pub fn press(&mut self, key: HeldKey) {
        self.slot_mut(key).press();
    }

    pub fn release(&mut self, key: HeldKey) {
        self.slot_mut(key).release();
    }

    /// Advance the release timeout by one frame.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events {
            return;
        }
        let timeout = self.key_release_timeout_ms;
        for slot in [&mut self.left, &mut self.right, &mut self.jump] {
            slot.age(elapsed_ms, timeout);
        }
    }

    /// Held-key state for the current frame.
    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            left: self.left.held,
            right: self.right.held,
            jump: self.jump.held,
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::DisplayEvent`]s and a held-key
//! snapshot ([`crate::types::FrameInput`]) suitable for terminal environments
//! (including terminals without key-release events).

pub mod held;
pub mod map;

pub use tui_platformer_types as types;

pub use held::{HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{display_event, held_key, should_quit, HeldKey};

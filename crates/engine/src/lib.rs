//! Engine module - glue between input, simulation and display
//!
//! - [`config`]: environment-driven settings
//! - [`display`]: windowed/fullscreen mode and terminal size
//! - [`pacing`]: fixed 60 Hz frame pacing
//! - [`session`]: one running game (world + display + running flag)

pub mod config;
pub mod display;
pub mod pacing;
pub mod session;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use config::Config;
pub use display::{DisplayMode, DisplayState};
pub use pacing::FramePacer;
pub use session::Session;

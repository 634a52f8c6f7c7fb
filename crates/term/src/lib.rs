//! Terminal rendering for the platformer.
//!
//! The world is first composed into a pixel [`Canvas`] the size of the game
//! surface, then downsampled into a [`FrameBuffer`] of half-block cells and
//! flushed to the terminal as a diff.
//!
//! Pipeline:
//! - [`Compositor`]: world snapshot + sprite -> 800x600 scratch -> zoomed display canvas
//! - [`GameView`]: display canvas -> framebuffer (optionally framed)
//! - [`TerminalRenderer`]: framebuffer -> escape sequences on stdout

pub mod canvas;
pub mod compositor;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprite;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use canvas::Canvas;
pub use compositor::Compositor;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite::Sprite;

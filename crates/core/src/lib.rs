//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the platform demo's rules and per-frame update.
//! It has **zero dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: Same seed produces identical platform layouts and recycles
//! - **Testable**: Every physics rule is a plain method on plain data
//! - **Fast**: [`World::step`] does not allocate
//!
//! # Module Structure
//!
//! - [`entity`]: The `update` + `bounds` contract shared by platforms and the player
//! - [`platform`]: Ground and floating platforms with edge-bounce drift
//! - [`player`]: Jump, gravity and landing
//! - [`collision`]: First-contact search over the platform slots
//! - [`world`]: Frame controller owning the player, platforms and camera offset
//! - [`rng`]: Seeded LCG behind every random placement
//! - [`snapshot`]: Copyable read-only view for renderers
//!
//! # Frame Order
//!
//! 1. Horizontal input scrolls every platform and recycles those that left the screen
//! 2. Jump input (ignored while already airborne from a jump)
//! 3. Gravity, then vertical integration
//! 4. Landing on the first overlapping platform while falling
//! 5. Fall-through reset when the player drops below the screen
//! 6. Platform drift with edge bounce
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::World;
//! use tui_platformer_types::{FrameInput, GRAVITY};
//!
//! let mut world = World::new(12345, 30.0, 40.0);
//! world.step(FrameInput::default());
//!
//! assert_eq!(world.player().vy, GRAVITY);
//! assert_eq!(world.player().vx, 0.0);
//! ```

pub mod collision;
pub mod entity;
pub mod platform;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod world;

pub use tui_platformer_types as types;

// Re-export commonly used types for convenience
pub use collision::first_contact;
pub use entity::Entity;
pub use platform::{Platform, PlatformKind};
pub use player::Player;
pub use rng::SimpleRng;
pub use snapshot::{PlatformSnapshot, PlayerSnapshot, WorldSnapshot};
pub use world::{StepReport, World};

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only (one tick per rendered frame)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies; side effects are
//!   reported as [`GameEvent`]s for the frame loop to act on

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{rects_intersect, Rect};
pub use state::{Block, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};

//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per tick, driven by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Wall, hit_offset, paddle_contact, resolve_paddle, resolve_wall};
pub use state::{Ball, GameEvent, MatchPhase, Paddle, Playfield, Score, Side, SimState};
pub use tick::{TickInput, tick};

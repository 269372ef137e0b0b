//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No clocks: the session loop owns the frame delay wait
//! - Stable iteration order (bricks by creation order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod paddle;
pub mod scoreboard;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickColor, BrickField};
pub use paddle::Paddle;
pub use scoreboard::Scoreboard;
pub use state::{GameEvent, GameState, PaddleCommand, SessionState, Wall};
pub use tick::tick;

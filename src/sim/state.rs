//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, owned by one `GameState`.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{BrickColor, BrickField};
use super::paddle::Paddle;
use super::scoreboard::Scoreboard;
use crate::settings::Settings;

/// Session lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Running,
    Won,
    Lost,
}

impl SessionState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SessionState::Running
    }
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Left,
    Right,
}

/// Something that happened during a tick, for presenters and logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce(Wall),
    /// Paddle hit; carries the new frame delay
    PaddleHit { frame_delay: f64 },
    BrickDestroyed { id: u32, color: BrickColor, points: u32 },
    /// Ball fell past the bottom; carries lives left
    LifeLost { lives: u8 },
    Won,
    Lost,
}

/// Discrete paddle step from the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub scoreboard: Scoreboard,
    pub phase: SessionState,
    /// Ticks processed so far
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self {
            ball: Ball::new(&settings),
            paddle: Paddle::new(&settings),
            bricks: BrickField::new(&settings),
            scoreboard: Scoreboard::new(settings.starting_lives),
            phase: SessionState::Running,
            time_ticks: 0,
            settings,
        }
    }

    /// Apply a paddle command. Ignored once the session is over.
    pub fn apply(&mut self, command: PaddleCommand) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        match command {
            PaddleCommand::Left => self.paddle.move_left(),
            PaddleCommand::Right => self.paddle.move_right(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

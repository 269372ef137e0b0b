//! Entity state to drawable primitives

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Ball, Brick, BrickColor, GameState, Paddle, SessionState};

/// Colors for game elements (RGBA)
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Brick row colour as RGBA
fn brick_rgba(color: BrickColor) -> [f32; 4] {
    let rgb = color.rgb();
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { half_extents: Vec2 },
}

/// Anything the presenter can draw
pub trait Renderable {
    /// Centre point
    fn position(&self) -> Vec2;
    fn shape(&self) -> Shape;
    fn color(&self) -> [f32; 4];

    fn primitive(&self) -> Primitive {
        Primitive {
            pos: self.position(),
            shape: self.shape(),
            color: self.color(),
        }
    }
}

impl Renderable for Ball {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Circle {
            radius: self.radius,
        }
    }

    fn color(&self) -> [f32; 4] {
        colors::BALL
    }
}

impl Renderable for Paddle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Rect {
            half_extents: Vec2::new(self.half_width, self.height / 2.0),
        }
    }

    fn color(&self) -> [f32; 4] {
        colors::PADDLE
    }
}

impl Renderable for Brick {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Rect {
            half_extents: self.size / 2.0,
        }
    }

    fn color(&self) -> [f32; 4] {
        brick_rgba(self.color)
    }
}

/// A positioned, coloured shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub pos: Vec2,
    pub shape: Shape,
    pub color: [f32; 4],
}

impl Primitive {
    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = match self.shape {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rect { half_extents } => half_extents,
        };
        (self.pos - half, self.pos + half)
    }
}

/// Everything a presenter needs to draw one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: SessionState,
    /// Draw order: live bricks, then paddle, then ball
    pub primitives: Vec<Primitive>,
    /// `Score: {score} | Lives: {lives}`
    pub status: String,
    /// Centred terminal banner
    pub banner: Option<String>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let mut primitives = Vec::with_capacity(state.bricks.remaining() + 2);
        primitives.extend(state.bricks.iter().map(|b| b.primitive()));
        primitives.push(state.paddle.primitive());
        primitives.push(state.ball.primitive());

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            primitives,
            status: state.scoreboard.status_line(),
            banner: state.scoreboard.banner().map(str::to_owned),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick;

    #[test]
    fn test_capture_initial_frame() {
        let state = GameState::new(Settings::default());
        let frame = Frame::capture(&state);

        assert_eq!(frame.primitives.len(), 57);
        assert_eq!(frame.status, "Score: 0 | Lives: 3");
        assert_eq!(frame.banner, None);

        let ball = frame.primitives.last().unwrap();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert!(matches!(ball.shape, Shape::Circle { .. }));

        let paddle = &frame.primitives[55];
        assert_eq!(paddle.bounds(), (Vec2::new(-50.0, -260.0), Vec2::new(50.0, -240.0)));

        assert_eq!(frame.primitives[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_destroyed_bricks_are_not_drawn() {
        let mut state = GameState::new(Settings::default());
        state.ball.pos = Vec2::new(-10.0, 130.0);
        tick(&mut state);

        let frame = Frame::capture(&state);
        assert_eq!(frame.primitives.len(), 56);
        assert_eq!(frame.status, "Score: 2 | Lives: 3");
    }

    #[test]
    fn test_banner_on_terminal_state() {
        let mut state = GameState::new(Settings::default());
        state.scoreboard.lives = 1;
        state.ball.pos = Vec2::new(200.0, -285.0);
        state.ball.vel = Vec2::new(10.0, -10.0);
        tick(&mut state);

        let frame = Frame::capture(&state);
        assert_eq!(frame.phase, SessionState::Lost);
        assert_eq!(frame.banner.as_deref(), Some("GAME OVER"));
    }

    #[test]
    fn test_frame_serializes() {
        let frame = Frame::capture(&GameState::new(Settings::default()));
        let json = frame.to_json().unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}

//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Horizontal paddle on a fixed line near the bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub half_width: f32,
    pub height: f32,
    /// Distance moved per command
    step: f32,
    /// Centre must stay strictly inside ±limit
    limit: f32,
}

impl Paddle {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(0.0, settings.paddle_y),
            half_width: settings.paddle_half_width,
            height: settings.paddle_height,
            step: settings.paddle_step,
            limit: settings.paddle_limit(),
        }
    }

    /// Step left unless that would cross the left clamp. Returns whether it moved.
    pub fn move_left(&mut self) -> bool {
        let new_x = self.pos.x - self.step;
        if new_x > -self.limit {
            self.pos.x = new_x;
            true
        } else {
            false
        }
    }

    /// Step right unless that would cross the right clamp. Returns whether it moved.
    pub fn move_right(&mut self) -> bool {
        let new_x = self.pos.x + self.step;
        if new_x < self.limit {
            self.pos.x = new_x;
            true
        } else {
            false
        }
    }
}

//! The ball
//!
//! Moves by a fixed displacement per tick. Difficulty comes from the frame
//! delay: each paddle hit shortens the wait between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Floor for the frame delay. Geometric decay never reaches zero in exact
/// arithmetic; this keeps float underflow from getting there either.
pub const MIN_FRAME_DELAY: f64 = f64::MIN_POSITIVE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Seconds to wait before the next tick (always > 0)
    frame_delay: f64,
    initial_frame_delay: f64,
    speed_decay: f64,
}

impl Ball {
    /// Ball at the centre, heading up and to the right
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::splat(settings.ball_speed),
            radius: settings.ball_radius,
            frame_delay: settings.initial_frame_delay,
            initial_frame_delay: settings.initial_frame_delay,
            speed_decay: settings.speed_decay,
        }
    }

    #[inline]
    pub fn frame_delay(&self) -> f64 {
        self.frame_delay
    }

    /// Move one step. Bounds are the caller's concern.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Top wall, paddle and brick bounces
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Side wall bounces
    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Shorten the frame delay by the decay factor.
    ///
    /// Unbounded: a long enough rally makes the interval negligible, but it
    /// stays positive.
    pub fn accelerate(&mut self) {
        self.frame_delay = (self.frame_delay * self.speed_decay).max(MIN_FRAME_DELAY);
    }

    /// Back to the centre at launch speed after a lost life.
    ///
    /// The vertical direction flips so the ball heads away from where it
    /// was lost.
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.frame_delay = self.initial_frame_delay;
        self.reflect_vertical();
    }
}

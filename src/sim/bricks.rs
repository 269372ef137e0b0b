//! Brick grid
//!
//! Bricks are laid out row-major, red row on top. Only live bricks are kept
//! in the field, so collision scans cost O(live bricks).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Row colours, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl BrickColor {
    pub const ROWS: [BrickColor; 5] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Blue,
    ];

    /// Colour of the given grid row (0 = top)
    pub fn for_row(row: usize) -> Self {
        Self::ROWS[row % Self::ROWS.len()]
    }

    pub fn points(self) -> u32 {
        match self {
            BrickColor::Red => 10,
            BrickColor::Orange => 8,
            BrickColor::Yellow => 6,
            BrickColor::Green => 4,
            BrickColor::Blue => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BrickColor::Red => "red",
            BrickColor::Orange => "orange",
            BrickColor::Yellow => "yellow",
            BrickColor::Green => "green",
            BrickColor::Blue => "blue",
        }
    }

    /// Packed 0xRRGGBB
    pub fn rgb(self) -> u32 {
        match self {
            BrickColor::Red => 0xFF0000,
            BrickColor::Orange => 0xFFA500,
            BrickColor::Yellow => 0xFFFF00,
            BrickColor::Green => 0x00FF00,
            BrickColor::Blue => 0x0000FF,
        }
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Creation order, also the collision scan order
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BrickColor,
    /// Cleared only when the field removes the brick
    alive: bool,
}

impl Brick {
    #[inline]
    pub fn points(&self) -> u32 {
        self.color.points()
    }

    /// `true` while the brick is still in its field
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Live bricks in creation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    hit_radius: f32,
    total: usize,
}

impl BrickField {
    /// Build the full grid
    pub fn new(settings: &Settings) -> Self {
        let mut bricks = Vec::with_capacity(settings.brick_rows * settings.brick_cols);
        let mut id = 0;
        for row in 0..settings.brick_rows {
            let color = BrickColor::for_row(row);
            for col in 0..settings.brick_cols {
                let pos = Vec2::new(
                    settings.brick_origin.x + col as f32 * settings.brick_spacing.x,
                    settings.brick_origin.y - row as f32 * settings.brick_spacing.y,
                );
                bricks.push(Brick {
                    id,
                    pos,
                    size: settings.brick_size,
                    color,
                    alive: true,
                });
                id += 1;
            }
        }

        let total = bricks.len();
        log::debug!(
            "Brick field: {} rows x {} cols = {} bricks",
            settings.brick_rows,
            settings.brick_cols,
            total
        );

        Self {
            bricks,
            hit_radius: settings.brick_hit_radius,
            total,
        }
    }

    /// Destroy the first live brick within the hit radius of `ball_pos`.
    ///
    /// Returns the destroyed brick, or `None` when nothing is in range. At
    /// most one brick goes per call; on overlap the earliest-created wins.
    pub fn collide(&mut self, ball_pos: Vec2) -> Option<Brick> {
        let index = self
            .bricks
            .iter()
            .position(|b| b.pos.distance(ball_pos) < self.hit_radius)?;

        let mut brick = self.bricks.remove(index);
        brick.alive = false;
        Some(brick)
    }

    /// Points of the brick destroyed by the ball, or 0 if none was hit
    pub fn collide_and_score(&mut self, ball_pos: Vec2) -> u32 {
        self.collide(ball_pos).map(|b| b.points()).unwrap_or(0)
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bricks.len()
    }

    /// Bricks in the full grid
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Live bricks in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }
}

//! Game settings
//!
//! Every tuning value the simulation reads, fixed at initialization time.
//! Defaults come from [`crate::consts`]; overrides can be parsed from JSON.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings rejected at load time
#[derive(Debug)]
pub enum SettingsError {
    /// Malformed JSON
    Parse(serde_json::Error),
    /// Well-formed but out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Side walls at ±side_bound
    pub side_bound: f32,
    pub top_bound: f32,
    pub bottom_bound: f32,

    // === Paddle ===
    pub paddle_y: f32,
    pub paddle_half_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub paddle_edge: f32,
    pub paddle_line: f32,
    pub paddle_hit_radius: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Seconds
    pub initial_frame_delay: f64,
    pub speed_decay: f64,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    /// Centre of the first (top-left) brick
    pub brick_origin: Vec2,
    pub brick_spacing: Vec2,
    pub brick_size: Vec2,
    pub brick_hit_radius: f32,

    // === Scoreboard ===
    pub starting_lives: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            side_bound: SIDE_BOUND,
            top_bound: TOP_BOUND,
            bottom_bound: BOTTOM_BOUND,

            paddle_y: PADDLE_Y,
            paddle_half_width: PADDLE_HALF_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            paddle_edge: PADDLE_EDGE,
            paddle_line: PADDLE_LINE,
            paddle_hit_radius: PADDLE_HIT_RADIUS,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            initial_frame_delay: INITIAL_FRAME_DELAY,
            speed_decay: SPEED_DECAY,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_origin: Vec2::new(BRICK_ORIGIN_X, BRICK_ORIGIN_Y),
            brick_spacing: Vec2::new(BRICK_SPACING_X, BRICK_SPACING_Y),
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_hit_radius: BRICK_HIT_RADIUS,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.initial_frame_delay.is_nan() || self.initial_frame_delay <= 0.0 {
            return Err(SettingsError::Invalid("initial_frame_delay must be positive"));
        }
        if self.speed_decay.is_nan() || self.speed_decay <= 0.0 || self.speed_decay > 1.0 {
            return Err(SettingsError::Invalid("speed_decay must be in (0, 1]"));
        }
        if self.brick_rows == 0 || self.brick_rows > BRICK_ROWS {
            return Err(SettingsError::Invalid("brick_rows must be between 1 and 5"));
        }
        if self.brick_cols == 0 {
            return Err(SettingsError::Invalid("brick_cols must be at least 1"));
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid("starting_lives must be at least 1"));
        }
        if self.bottom_bound >= self.top_bound {
            return Err(SettingsError::Invalid("bottom_bound must be below top_bound"));
        }
        if self.side_bound <= 0.0 {
            return Err(SettingsError::Invalid("side_bound must be positive"));
        }
        if self.paddle_edge <= self.paddle_half_width {
            return Err(SettingsError::Invalid("paddle_edge must exceed paddle_half_width"));
        }
        if self.paddle_step.is_nan() || self.paddle_step <= 0.0 {
            return Err(SettingsError::Invalid("paddle_step must be positive"));
        }
        if self.paddle_hit_radius.is_nan() || self.paddle_hit_radius <= 0.0 {
            return Err(SettingsError::Invalid("paddle_hit_radius must be positive"));
        }
        if self.brick_hit_radius.is_nan() || self.brick_hit_radius <= 0.0 {
            return Err(SettingsError::Invalid("brick_hit_radius must be positive"));
        }
        Ok(())
    }

    /// Largest |x| the paddle centre may take (exclusive)
    #[inline]
    pub fn paddle_limit(&self) -> f32 {
        self.paddle_edge - self.paddle_half_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.brick_rows * settings.brick_cols, 55);
        assert_eq!(settings.paddle_limit(), 300.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "starting_lives": 5, "brick_cols": 4 }"#).unwrap();
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.brick_cols, 4);
        assert_eq!(settings.brick_rows, BRICK_ROWS);
        assert_eq!(settings.initial_frame_delay, INITIAL_FRAME_DELAY);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "speed_decay": 1.5 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "initial_frame_delay": 0.0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "brick_rows": 6 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "starting_lives": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_disabled_collision_surfaces() {
        // Each of these would leave the paddle frozen or a hit test unreachable
        for json in [
            r#"{ "paddle_step": 0.0 }"#,
            r#"{ "paddle_step": -20.0 }"#,
            r#"{ "paddle_hit_radius": -5.0 }"#,
            r#"{ "brick_hit_radius": 0.0 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(SettingsError::Invalid(_))),
                "{} should be rejected",
                json
            );
        }

        let settings = Settings {
            brick_hit_radius: f32::NAN,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid("brick_hit_radius must be positive"))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }
}

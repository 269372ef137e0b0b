//! Breakout - classic brick breaker game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, scoreboard, tick)
//! - `session`: Real-time loop, shutdown token and input serialization
//! - `renderer`: Entity state to drawable primitives
//! - `settings`: Initialization-time tuning values
//! - `demo`: Headless presenter and autopilot input

pub mod demo;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{
    Pacer, PresentError, Presenter, Session, SessionError, SessionHandle, SessionOutcome,
    ShutdownToken, ThreadPacer,
};
pub use settings::{Settings, SettingsError};
pub use sim::{GameEvent, GameState, PaddleCommand, SessionState};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Ball bounces off the side walls past |x| > SIDE_BOUND
    pub const SIDE_BOUND: f32 = 380.0;
    pub const TOP_BOUND: f32 = 280.0;
    /// Ball below this line costs a life
    pub const BOTTOM_BOUND: f32 = -290.0;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = -250.0;
    pub const PADDLE_HALF_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_STEP: f32 = 20.0;
    /// Paddle centre must stay strictly inside ±(PADDLE_EDGE - PADDLE_HALF_WIDTH)
    pub const PADDLE_EDGE: f32 = 350.0;
    /// Ball must be below this line for a paddle hit to register
    pub const PADDLE_LINE: f32 = -230.0;
    pub const PADDLE_HIT_RADIUS: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis displacement per tick
    pub const BALL_SPEED: f32 = 10.0;
    /// Seconds between ticks at launch
    pub const INITIAL_FRAME_DELAY: f64 = 0.1;
    /// Frame delay multiplier per paddle hit
    pub const SPEED_DECAY: f64 = 0.9;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 11;
    pub const BRICK_ORIGIN_X: f32 = -360.0;
    pub const BRICK_ORIGIN_Y: f32 = 250.0;
    pub const BRICK_SPACING_X: f32 = 65.0;
    pub const BRICK_SPACING_Y: f32 = 25.0;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_HIT_RADIUS: f32 = 40.0;

    pub const STARTING_LIVES: u8 = 3;
}

//! Headless adapter
//!
//! Stands in for a window: a presenter that logs the HUD and an autopilot
//! that plays by tracking the ball. Used by the binary and by tests.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::renderer::Frame;
use crate::session::{PresentError, Presenter, SessionError, SessionHandle};
use crate::sim::{GameEvent, GameState, PaddleCommand};

/// Logs status changes instead of drawing
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_status: String,
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_status(&self) -> &str {
        &self.last_status
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame, events: &[GameEvent]) -> Result<(), PresentError> {
        self.frames += 1;

        for event in events {
            log::trace!("tick {}: {:?}", frame.tick, event);
        }

        if frame.status != self.last_status {
            log::info!("{}", frame.status);
            self.last_status.clone_from(&frame.status);
        }

        if let Some(banner) = &frame.banner {
            log::info!("*** {} ***", banner);
        }

        Ok(())
    }
}

/// Computer player feeding paddle commands
pub struct Autopilot {
    handle: SessionHandle,
    rng: Pcg32,
    /// Chance of sitting out a step (0-1)
    hesitation: f64,
    /// Request shutdown once this many ticks have run
    tick_limit: Option<u64>,
}

impl Autopilot {
    pub fn new(handle: SessionHandle, seed: u64) -> Self {
        Self {
            handle,
            rng: Pcg32::seed_from_u64(seed),
            hesitation: 0.3,
            tick_limit: None,
        }
    }

    pub fn with_hesitation(mut self, hesitation: f64) -> Self {
        self.hesitation = hesitation.clamp(0.0, 1.0);
        self
    }

    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }

    /// Pick a move that brings the paddle under the ball
    pub fn decide(&mut self, state: &GameState) -> Option<PaddleCommand> {
        let offset = state.ball.pos.x - state.paddle.pos.x;
        if offset.abs() < state.settings.paddle_step / 2.0 {
            return None;
        }
        if self.rng.random_bool(self.hesitation) {
            return None;
        }
        Some(if offset < 0.0 {
            PaddleCommand::Left
        } else {
            PaddleCommand::Right
        })
    }

    /// One look at the game and at most one command.
    ///
    /// Returns `false` once there is nothing left to play.
    pub fn step(&mut self) -> Result<bool, SessionError> {
        if self.handle.shutdown_token().is_requested() {
            return Ok(false);
        }

        let (command, ticks, over) = {
            let handle = self.handle.clone();
            handle.with_state(|state| {
                (
                    self.decide(state),
                    state.time_ticks,
                    state.phase.is_terminal(),
                )
            })?
        };

        if over {
            return Ok(false);
        }

        if let Some(limit) = self.tick_limit {
            if ticks >= limit {
                log::info!("Autopilot tick limit {} reached, closing", limit);
                self.handle.request_shutdown();
                return Ok(false);
            }
        }

        if let Some(command) = command {
            self.handle.send(command)?;
        }
        Ok(true)
    }

    /// Play on a background thread, one step every `interval`
    pub fn spawn(mut self, interval: Duration) -> JoinHandle<Result<(), SessionError>> {
        thread::spawn(move || {
            while self.step()? {
                thread::sleep(interval);
            }
            Ok(())
        })
    }
}

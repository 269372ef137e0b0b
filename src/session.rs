//! Real-time session loop
//!
//! Owns the only clock in the game: wait the ball's frame delay, tick,
//! present. Input from the adapter goes through the same mutex as the tick,
//! so a paddle command always lands between two ticks.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::renderer::Frame;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GameState, PaddleCommand, SessionState, tick};

/// Cooperative stop flag, set by the adapter when its window goes away
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Presenter failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// Surface is gone (window closed). Ends the session cleanly.
    Closed,
    Failed(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::Closed => write!(f, "presentation surface closed"),
            PresentError::Failed(msg) => write!(f, "presentation failed: {}", msg),
        }
    }
}

impl std::error::Error for PresentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A thread panicked while holding the game state
    Poisoned,
    /// Presenter fault other than a closed surface
    Presenter(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Poisoned => write!(f, "game state lock poisoned"),
            SessionError::Presenter(msg) => write!(f, "presenter error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { score: u64 },
    Lost { score: u64 },
    /// Stopped by the adapter before a terminal state
    Shutdown,
}

/// Draws frames. Called after every tick, outside the state lock.
pub trait Presenter {
    fn present(&mut self, frame: &Frame, events: &[GameEvent]) -> Result<(), PresentError>;
}

/// Waits out the frame delay
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

impl<F: FnMut(Duration)> Pacer for F {
    fn wait(&mut self, delay: Duration) {
        self(delay)
    }
}

/// Shared access to the game for the loop and the input adapter
#[derive(Debug, Clone)]
pub struct SessionHandle {
    state: Arc<Mutex<GameState>>,
    shutdown: ShutdownToken,
}

impl SessionHandle {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_state(GameState::new(settings)))
    }

    /// Wrap an existing state as-is
    pub fn from_state(state: GameState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            shutdown: ShutdownToken::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState>, SessionError> {
        self.state.lock().map_err(|_| SessionError::Poisoned)
    }

    /// Apply a paddle command now. Returns whether the paddle moved.
    pub fn send(&self, command: PaddleCommand) -> Result<bool, SessionError> {
        Ok(self.lock()?.apply(command))
    }

    pub fn on_move_left(&self) -> Result<bool, SessionError> {
        self.send(PaddleCommand::Left)
    }

    pub fn on_move_right(&self) -> Result<bool, SessionError> {
        self.send(PaddleCommand::Right)
    }

    /// Read the state under the lock
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> Result<R, SessionError> {
        Ok(f(&*self.lock()?))
    }

    pub fn shutdown_token(&self) -> ShutdownToken {
        self.shutdown.clone()
    }

    /// Same as the adapter's close handler
    pub fn request_shutdown(&self) {
        self.shutdown.request();
    }
}

/// The game loop
pub struct Session<P, C> {
    handle: SessionHandle,
    presenter: P,
    pacer: C,
}

impl<P: Presenter, C: Pacer> Session<P, C> {
    pub fn new(handle: SessionHandle, presenter: P, pacer: C) -> Self {
        Self {
            handle,
            presenter,
            pacer,
        }
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Run until a terminal state or a shutdown request.
    ///
    /// A closed presenter counts as a shutdown request. Any other presenter
    /// fault stops the loop and is returned.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let shutdown = self.handle.shutdown_token();

        let frame = self.handle.with_state(|state| {
            log::info!(
                "Session starting: {} bricks, {} lives",
                state.bricks.remaining(),
                state.scoreboard.lives
            );
            Frame::capture(state)
        })?;
        if let Some(outcome) = self.present(&frame, &[])? {
            return Ok(outcome);
        }

        loop {
            if shutdown.is_requested() {
                log::info!("Shutdown requested, stopping session");
                return Ok(SessionOutcome::Shutdown);
            }

            let delay = self.handle.with_state(|state| state.ball.frame_delay())?;
            self.pacer
                .wait(Duration::try_from_secs_f64(delay).unwrap_or_default());

            // The surface may have gone away while we slept
            if shutdown.is_requested() {
                log::info!("Shutdown requested, stopping session");
                return Ok(SessionOutcome::Shutdown);
            }

            let (frame, events, phase, score) = {
                let mut state = self.handle.lock()?;
                let events = tick(&mut state);
                (
                    Frame::capture(&state),
                    events,
                    state.phase,
                    state.scoreboard.score,
                )
            };

            if let Some(outcome) = self.present(&frame, &events)? {
                return Ok(outcome);
            }

            match phase {
                SessionState::Running => {}
                SessionState::Won => {
                    log::info!("Session won with score {}", score);
                    return Ok(SessionOutcome::Won { score });
                }
                SessionState::Lost => {
                    log::info!("Session lost with score {}", score);
                    return Ok(SessionOutcome::Lost { score });
                }
            }
        }
    }

    /// `Some(Shutdown)` when the surface has closed
    fn present(
        &mut self,
        frame: &Frame,
        events: &[GameEvent],
    ) -> Result<Option<SessionOutcome>, SessionError> {
        match self.presenter.present(frame, events) {
            Ok(()) => Ok(None),
            Err(PresentError::Closed) => {
                log::warn!("Presentation surface closed at tick {}", frame.tick);
                self.handle.request_shutdown();
                Ok(Some(SessionOutcome::Shutdown))
            }
            Err(PresentError::Failed(msg)) => {
                log::error!("Presenter failed at tick {}: {}", frame.tick, msg);
                self.handle.request_shutdown();
                Err(SessionError::Presenter(msg))
            }
        }
    }
}

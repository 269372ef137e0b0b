use std::time::Duration;

use breakout::demo::{Autopilot, LogPresenter};
use breakout::renderer::Frame;
use breakout::sim::{GameEvent, SessionState};
use breakout::{
    PresentError, Presenter, Session, SessionHandle, SessionOutcome, Settings, ThreadPacer,
};

/// Keeps events and the last frame for inspection
#[derive(Default)]
struct Collector {
    events: Vec<GameEvent>,
    last: Option<Frame>,
    frames: usize,
}

impl Presenter for Collector {
    fn present(&mut self, frame: &Frame, events: &[GameEvent]) -> Result<(), PresentError> {
        self.events.extend_from_slice(events);
        self.last = Some(frame.clone());
        self.frames += 1;
        Ok(())
    }
}

#[test]
fn test_autopilot_session_keeps_books() {
    let handle = SessionHandle::new(Settings::default()).unwrap();
    let mut pilot = Autopilot::new(handle.clone(), 2024).with_tick_limit(20_000);
    let pacer = move |_: Duration| {
        pilot.step().unwrap();
    };
    let mut session = Session::new(handle.clone(), Collector::default(), pacer);

    let outcome = session.run().unwrap();
    let collector = session.presenter();

    let destroyed: Vec<u32> = collector
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::BrickDestroyed { points, .. } => Some(*points),
            _ => None,
        })
        .collect();
    let lives_lost = collector
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
        .count();

    handle
        .with_state(|state| {
            // Every destroyed brick was counted once, and paid once
            assert_eq!(state.bricks.remaining() + destroyed.len(), 55);
            let paid = destroyed.iter().map(|&p| u64::from(p)).sum::<u64>();
            assert_eq!(state.scoreboard.score, paid);
            assert_eq!(usize::from(state.scoreboard.lives) + lives_lost, 3);

            match outcome {
                SessionOutcome::Won { score } => {
                    assert_eq!(state.phase, SessionState::Won);
                    assert!(state.bricks.is_cleared());
                    assert_eq!(score, state.scoreboard.score);
                }
                SessionOutcome::Lost { score } => {
                    assert_eq!(state.phase, SessionState::Lost);
                    assert_eq!(state.scoreboard.lives, 0);
                    assert_eq!(score, state.scoreboard.score);
                }
                SessionOutcome::Shutdown => {
                    assert_eq!(state.phase, SessionState::Running);
                    assert!(state.time_ticks >= 20_000);
                }
            }
        })
        .unwrap();

    // Terminal frames carry the banner
    let last = collector.last.as_ref().unwrap();
    match outcome {
        SessionOutcome::Won { .. } => assert_eq!(last.banner.as_deref(), Some("YOU WIN!")),
        SessionOutcome::Lost { .. } => assert_eq!(last.banner.as_deref(), Some("GAME OVER")),
        SessionOutcome::Shutdown => assert_eq!(last.banner, None),
    }
}

#[test]
fn test_idle_player_loses_all_lives() {
    let handle = SessionHandle::new(Settings::default()).unwrap();
    // Paddle parked at the far left, never moves
    for _ in 0..20 {
        handle.on_move_left().unwrap();
    }
    let mut session = Session::new(handle.clone(), Collector::default(), |_: Duration| {});

    let outcome = session.run().unwrap();
    assert!(matches!(outcome, SessionOutcome::Lost { .. }));

    let events = &session.presenter().events;
    let lives: Vec<u8> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::LifeLost { lives } => Some(*lives),
            _ => None,
        })
        .collect();
    assert_eq!(lives, vec![2, 1, 0]);
    assert_eq!(events.last(), Some(&GameEvent::Lost));
}

#[test]
fn test_threaded_autopilot_and_close() {
    let settings = Settings {
        initial_frame_delay: 0.001,
        ..Settings::default()
    };
    let handle = SessionHandle::new(settings).unwrap();
    let pilot = Autopilot::new(handle.clone(), 9).with_tick_limit(200);
    let input = pilot.spawn(Duration::from_millis(1));

    let mut session = Session::new(handle.clone(), LogPresenter::new(), ThreadPacer);
    let outcome = session.run().unwrap();
    handle.request_shutdown();
    input.join().unwrap().unwrap();

    assert!(session.presenter().frames() >= 1);
    let (ticks, phase) = handle.with_state(|s| (s.time_ticks, s.phase)).unwrap();
    match outcome {
        SessionOutcome::Shutdown => assert_eq!(phase, SessionState::Running),
        _ => assert!(phase.is_terminal()),
    }
    assert!(ticks > 0);
}

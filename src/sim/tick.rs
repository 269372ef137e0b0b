//! Simulation tick
//!
//! One fixed-order pass over the collision surfaces. The wait before each
//! tick belongs to the session loop, not here.

use super::state::{GameEvent, GameState, SessionState, Wall};

/// Advance the game by one tick and report what happened.
///
/// Every check runs every tick, even after an earlier one fired, so a wall
/// bounce and a brick hit in the same tick both reflect the ball.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_terminal() {
        return events;
    }

    state.time_ticks += 1;
    let settings = &state.settings;
    let ball = &mut state.ball;

    ball.advance();

    // Top wall
    if ball.pos.y > settings.top_bound {
        ball.reflect_vertical();
        events.push(GameEvent::WallBounce(Wall::Top));
    }

    // Side walls
    if ball.pos.x > settings.side_bound || ball.pos.x < -settings.side_bound {
        ball.reflect_horizontal();
        let wall = if ball.pos.x > 0.0 { Wall::Right } else { Wall::Left };
        events.push(GameEvent::WallBounce(wall));
    }

    // Paddle. Only distance and height are checked, so a ball off the end of
    // the paddle or already under it still bounces.
    if ball.pos.distance(state.paddle.pos) < settings.paddle_hit_radius
        && ball.pos.y < settings.paddle_line
    {
        ball.reflect_vertical();
        ball.accelerate();
        log::debug!(
            "Paddle hit at x={:.0}, frame delay now {:.4}s",
            ball.pos.x,
            ball.frame_delay()
        );
        events.push(GameEvent::PaddleHit {
            frame_delay: ball.frame_delay(),
        });
    }

    // Bricks
    if let Some(brick) = state.bricks.collide(ball.pos) {
        let points = brick.points();
        state.scoreboard.add_score(points);
        ball.reflect_vertical();
        log::debug!(
            "Brick {} ({}) destroyed for {} points, {} left",
            brick.id,
            brick.color.as_str(),
            points,
            state.bricks.remaining()
        );
        events.push(GameEvent::BrickDestroyed {
            id: brick.id,
            color: brick.color,
            points,
        });
    }

    // Win
    if state.bricks.is_cleared() {
        state.scoreboard.announce_win();
        state.phase = SessionState::Won;
        log::info!("All bricks cleared, final score {}", state.scoreboard.score);
        events.push(GameEvent::Won);
    }

    // Bottom edge
    if ball.pos.y < settings.bottom_bound {
        ball.reset();
        state.scoreboard.lose_life();
        log::info!("Ball lost, {} lives left", state.scoreboard.lives);
        events.push(GameEvent::LifeLost {
            lives: state.scoreboard.lives,
        });

        // A win earlier in this tick stands
        if state.scoreboard.is_defeated() && !state.phase.is_terminal() {
            state.scoreboard.announce_defeat();
            state.phase = SessionState::Lost;
            log::info!("Out of lives, final score {}", state.scoreboard.score);
            events.push(GameEvent::Lost);
        }
    }

    events
}

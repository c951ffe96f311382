//! Per-frame state update
//!
//! Core game loop that advances the match by one rendered frame.

use super::collision::{bounce_paddles, bounce_walls};
use super::kinematics::{accelerate, frame_dt, integrate};
use super::paddle::Side;
use super::serve::{ServeSource, serve_velocity};
use super::state::{Ball, MatchEvent, MatchState};
use crate::config::GoalPolicy;

/// Advance the match to `now_ms`, drawing any serve from the state's own RNG
pub fn update(state: &MatchState, now_ms: f64) -> MatchState {
    let mut rng = state.rng.to_rng();
    update_with(state, now_ms, &mut rng)
}

/// Advance the match to `now_ms` with an explicit serve source.
///
/// Playing order: paddles, paddle bounce, wall bounce, integration, goal
/// check. Bounces look at the ball's pre-tick position so a reflection shows
/// up in the following integration. While paused only the paddles move.
pub fn update_with(state: &MatchState, now_ms: f64, serve: &mut impl ServeSource) -> MatchState {
    let config = &state.config;
    let dt = frame_dt(state.time_ms, now_ms, config.max_dt);
    let y_bounds = config.y_bounds();

    let left = state.left.advance(y_bounds, dt);
    let right = state.right.advance(y_bounds, dt);

    let mut next = MatchState {
        // A clock that steps backwards must not rewind the time base
        time_ms: if now_ms.is_finite() { now_ms.max(state.time_ms) } else { state.time_ms },
        left,
        right,
        events: Vec::new(),
        ..state.clone()
    };

    if state.paused {
        return next;
    }

    let (ball, hit) = bounce_paddles(
        &state.ball,
        &next.left,
        &next.right,
        config.reflection,
        config.deflection_scale,
    );
    if let Some(side) = hit {
        next.events.push(MatchEvent::PaddleHit { side });
    }

    let (ball, wall) = bounce_walls(&ball, &config.area());
    if wall {
        next.events.push(MatchEvent::WallBounce);
    }

    let vel = accelerate(ball.vel, config.ball_acceleration, dt);
    let ball = Ball {
        pos: integrate(ball.pos, vel, dt),
        vel,
        ..ball
    };

    match goal_scorer(&ball, state) {
        Some(scorer) => score_goal(next, scorer, serve),
        None => MatchState { ball, ..next },
    }
}

/// The player credited if the ball is at or past a side wall
fn goal_scorer(ball: &Ball, state: &MatchState) -> Option<Side> {
    let x_bounds = state.config.x_bounds();
    if ball.pos.x >= x_bounds.upper {
        Some(Side::Left)
    } else if ball.pos.x <= x_bounds.lower {
        Some(Side::Right)
    } else {
        None
    }
}

fn score_goal(mut next: MatchState, scorer: Side, serve: &mut impl ServeSource) -> MatchState {
    let config = next.config;
    next.score = next.score.point_for(scorer);
    next.ball = Ball::centered(&config, serve_velocity(config.serve, config.ball_speed, serve));
    next.rng = next.rng.advanced();
    next.paused = config.on_goal == GoalPolicy::PauseForServe;
    next.events.push(MatchEvent::Goal { scorer });

    log::info!(
        "Goal for {:?}! Score {}-{}",
        scorer,
        next.score.left,
        next.score.right
    );
    next
}

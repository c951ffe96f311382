//! Ball-tracking paddle controller
//!
//! Stands in for a player in the demo binary and in long-running tests. It
//! only ever produces paddle speed commands, the same input a keyboard host
//! would send.

use crate::sim::{Command, MatchState, Side};

/// How an automated player chases the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoplay {
    pub side: Side,
    /// Top speed as a fraction of the configured paddle speed
    pub skill: f32,
    /// No movement while the ball is this close to the paddle center
    pub dead_zone: f32,
}

impl Autoplay {
    pub fn new(side: Side, skill: f32) -> Self {
        Self {
            side,
            skill: skill.clamp(0.0, 1.0),
            dead_zone: 4.0,
        }
    }

    /// Speed to hold this tick
    pub fn paddle_speed(&self, state: &MatchState) -> f32 {
        let paddle = state.paddle(self.side);
        let ball = &state.ball;

        // Drift back to the middle while the ball travels away
        let approaching = ball.vel.x * self.side.away() < 0.0;
        let target = if approaching && !state.paused {
            ball.pos.y
        } else {
            state.config.height / 2.0
        };

        let delta = target - paddle.center.y;
        if delta.abs() <= self.dead_zone {
            return 0.0;
        }
        delta.signum() * state.config.paddle_speed * self.skill
    }

    pub fn command(&self, state: &MatchState) -> Command {
        Command::SetPaddleSpeed {
            side: self.side,
            speed: self.paddle_speed(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::sim::{Ball, update};
    use glam::Vec2;

    #[test]
    fn test_chases_approaching_ball() {
        let state = MatchState::new(MatchConfig::default(), 0.0, 1);
        // Opening serve heads right and down
        let right = Autoplay::new(Side::Right, 1.0);
        let ball = Ball {
            pos: Vec2::new(300.0, 400.0),
            ..state.ball
        };
        let state = MatchState { ball, ..state };
        assert_eq!(right.paddle_speed(&state), 500.0);

        let left = Autoplay::new(Side::Left, 0.5);
        // Ball moving away from the left paddle, which is already centered
        assert_eq!(left.paddle_speed(&state), 0.0);
    }

    #[test]
    fn test_returns_to_center() {
        let state = MatchState::new(MatchConfig::default(), 0.0, 1);
        let state = MatchState {
            left: crate::sim::Paddle {
                center: Vec2::new(10.0, 400.0),
                ..state.left
            },
            ..state
        };
        let left = Autoplay::new(Side::Left, 1.0);
        assert_eq!(left.paddle_speed(&state), -500.0);
    }

    #[test]
    fn test_autoplay_rally_keeps_invariants() {
        let mut state = MatchState::new(MatchConfig::default(), 0.0, 2024);
        let players = [Autoplay::new(Side::Left, 1.0), Autoplay::new(Side::Right, 0.6)];
        let mut t = 0.0;
        let mut hits = 0;
        for _ in 0..60 * 120 {
            t += 1000.0 / 60.0;
            if state.paused {
                state = state.toggle_pause();
            }
            for player in &players {
                state = state.apply(player.command(&state));
            }
            state = update(&state, t);
            hits += state
                .events
                .iter()
                .filter(|e| matches!(e, crate::sim::MatchEvent::PaddleHit { .. }))
                .count();

            for paddle in [&state.left, &state.right] {
                assert!(paddle.top() >= 0.0 && paddle.bottom() <= 500.0);
            }
            assert!(state.ball.pos.x > 0.0 && state.ball.pos.x < 500.0);
            assert!(state.ball.pos.y.is_finite());
        }
        assert!(hits > 0, "no rallies in two minutes");
    }
}

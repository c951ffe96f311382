//! Match state and core simulation types
//!
//! A `MatchState` is a value: every tick and every command builds a new one
//! from the old, so the host can swap its single copy between frames without
//! the renderer ever seeing a half-updated state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::{Paddle, Side};
use super::serve::RngState;
use crate::config::MatchConfig;
use crate::velocity_at_angle;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Fraction of speed kept after a wall bounce
    pub restitution: f32,
}

impl Ball {
    /// Ball at the field center with the given velocity
    pub fn centered(config: &MatchConfig, vel: Vec2) -> Self {
        Self {
            pos: config.area().center(),
            vel,
            radius: config.ball_radius,
            restitution: config.restitution,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Copy with one point added for `side`
    pub fn point_for(&self, side: Side) -> Score {
        match side {
            Side::Left => Score {
                left: self.left.saturating_add(1),
                ..*self
            },
            Side::Right => Score {
                right: self.right.saturating_add(1),
                ..*self
            },
        }
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    PaddleHit { side: Side },
    WallBounce,
    Goal { scorer: Side },
}

/// Commands from the input collaborator, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SetPaddleSpeed { side: Side, speed: f32 },
    TogglePause,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Timestamp of the last tick (ms, host clock)
    pub time_ms: f64,
    pub config: MatchConfig,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Waiting for a serve or paused by a player
    pub paused: bool,
    pub rng: RngState,
    /// Events from the last tick only
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl MatchState {
    /// Fresh match: ball centered on its opening serve, paddles centered
    pub fn new(config: MatchConfig, now_ms: f64, seed: u64) -> Self {
        let ball = Ball::centered(
            &config,
            velocity_at_angle(config.ball_speed, config.initial_angle),
        );
        let mid_y = config.height / 2.0;
        let left = Paddle::new(
            Vec2::new(config.paddle_inset, mid_y),
            config.paddle_width,
            config.paddle_height,
        );
        let right = Paddle::new(
            Vec2::new(config.width - config.paddle_inset, mid_y),
            config.paddle_width,
            config.paddle_height,
        );

        log::info!(
            "New match {}x{} (reflection={}, serve={:?}, on_goal={:?}, seed={})",
            config.width,
            config.height,
            config.reflection.as_str(),
            config.serve,
            config.on_goal,
            seed
        );

        Self {
            time_ms: now_ms,
            config,
            ball,
            left,
            right,
            score: Score::default(),
            paused: false,
            rng: RngState::new(seed),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Copy with one paddle's speed replaced; takes effect on the next tick
    pub fn set_paddle_speed(&self, side: Side, speed: f32) -> MatchState {
        let mut next = self.clone();
        match side {
            Side::Left => next.left = self.left.with_speed(speed),
            Side::Right => next.right = self.right.with_speed(speed),
        }
        next
    }

    /// Copy with the pause flag flipped
    pub fn toggle_pause(&self) -> MatchState {
        log::debug!("Pause toggled: {} -> {}", self.paused, !self.paused);
        MatchState {
            paused: !self.paused,
            ..self.clone()
        }
    }

    pub fn apply(&self, command: Command) -> MatchState {
        match command {
            Command::SetPaddleSpeed { side, speed } => self.set_paddle_speed(side, speed),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.config.width,
            height: self.config.height,
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
            },
            left: PaddleRect::from(&self.left),
            right: PaddleRect::from(&self.right),
            score: self.score,
            paused: self.paused,
        }
    }
}

/// Ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Paddle rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Paddle> for PaddleRect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.center.x - paddle.width / 2.0,
            y: paddle.top(),
            width: paddle.width,
            height: paddle.height,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub ball: BallView,
    pub left: PaddleRect,
    pub right: PaddleRect,
    pub score: Score,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::new(MatchConfig::default(), 1000.0, 1);
        assert_eq!(state.ball.pos, Vec2::new(250.0, 250.0));
        assert_eq!(state.ball.radius, 5.0);
        assert!((state.ball.speed() - 300.0).abs() < 1e-3);
        assert_eq!(state.left.center, Vec2::new(10.0, 250.0));
        assert_eq!(state.right.center, Vec2::new(490.0, 250.0));
        assert_eq!(state.left.height, 100.0);
        assert_eq!(state.score, Score::default());
        assert!(!state.paused);
        assert_eq!(state.time_ms, 1000.0);
    }

    #[test]
    fn test_commands_copy_on_write() {
        let state = MatchState::new(MatchConfig::default(), 0.0, 1);
        let moved = state.set_paddle_speed(Side::Right, -500.0);
        assert_eq!(moved.right.speed, -500.0);
        assert_eq!(state.right.speed, 0.0);
        assert_eq!(moved.left, state.left);

        let paused = moved.apply(Command::TogglePause);
        assert!(paused.paused);
        assert!(!moved.paused);
        assert!(!paused.toggle_pause().paused);

        let stopped = state.apply(Command::SetPaddleSpeed {
            side: Side::Left,
            speed: f32::INFINITY,
        });
        assert_eq!(stopped.left.speed, 0.0);
    }

    #[test]
    fn test_score_point_for() {
        let score = Score::default().point_for(Side::Left).point_for(Side::Left);
        assert_eq!(score, Score { left: 2, right: 0 });
        let maxed = Score { left: u32::MAX, right: 0 }.point_for(Side::Left);
        assert_eq!(maxed.left, u32::MAX);
    }

    #[test]
    fn test_snapshot_rects() {
        let state = MatchState::new(MatchConfig::default(), 0.0, 1);
        let snap = state.snapshot();
        assert_eq!(
            snap.left,
            PaddleRect {
                x: 7.5,
                y: 200.0,
                width: 5.0,
                height: 100.0
            }
        );
        assert_eq!(snap.right.x, 487.5);
        assert_eq!(snap.ball.x, 250.0);
        assert!(!snap.paused);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":{\"left\":0,\"right\":0}"));
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = MatchState::new(MatchConfig::default(), 12.5, 99)
            .set_paddle_speed(Side::Left, 500.0);
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_command_json() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"set_paddle_speed","side":"left","speed":-500}"#)
                .unwrap();
        assert_eq!(
            cmd,
            Command::SetPaddleSpeed {
                side: Side::Left,
                speed: -500.0
            }
        );
    }
}

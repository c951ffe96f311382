//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every operation takes a state and returns a new one
//! - Seeded or injected randomness only
//! - No rendering, input or platform dependencies

pub mod bounds;
pub mod collision;
pub mod kinematics;
pub mod paddle;
pub mod serve;
pub mod state;
pub mod tick;

pub use bounds::{Area, Bounds};
pub use collision::{bounce_axis, bounce_paddles, bounce_walls, paddle_contact};
pub use kinematics::{frame_dt, integrate};
pub use paddle::{Paddle, Side};
pub use serve::{FixedServe, RngState, ServeSource, serve_velocity};
pub use state::{Ball, BallView, Command, MatchEvent, MatchState, PaddleRect, Score, Snapshot};
pub use tick::{update, update_with};

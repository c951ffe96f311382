//! Collision detection and response
//!
//! Walls reflect one velocity component; paddles either flip the horizontal
//! component or relaunch the ball at an angle that depends on where it struck.
//! Nothing here moves the ball: a bounce only changes velocity and the next
//! integration step carries the ball clear.

use glam::Vec2;

use super::bounds::{Area, Bounds};
use super::paddle::{Paddle, Side};
use super::state::Ball;
use crate::config::ReflectionPolicy;

/// Reflect one velocity component against an inclusive interval.
///
/// A component at or past `upper` still heading outward is reversed, and one
/// at or below `lower` likewise, with its magnitude scaled by `restitution`.
/// A component already pointing back into the interval is left alone, so an
/// overshooting ball loses speed once per bounce rather than once per tick.
///
/// Returns the new component and whether it was reflected.
#[inline]
pub fn bounce_axis(pos: f32, vel: f32, bounds: Bounds, restitution: f32) -> (f32, bool) {
    if pos >= bounds.upper && vel > 0.0 {
        (-vel * restitution, true)
    } else if pos <= bounds.lower && vel < 0.0 {
        (-vel * restitution, true)
    } else {
        (vel, false)
    }
}

/// Bounce the ball off the top and bottom of the field.
///
/// Returns the new ball and whether it was reflected off a wall.
pub fn bounce_walls(ball: &Ball, area: &Area) -> (Ball, bool) {
    let (vy, hit) = bounce_axis(ball.pos.y, ball.vel.y, area.y_bounds(), ball.restitution);
    (
        Ball {
            vel: Vec2::new(ball.vel.x, vy),
            ..*ball
        },
        hit,
    )
}

/// Whether the ball is striking the paddle on `side`.
///
/// The ball's leading edge must have crossed the near face without the ball
/// having passed behind the far face, its center must lie within the paddle's
/// vertical extent, and it must be travelling toward the paddle.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let within_y = ball.pos.y >= paddle.top() && ball.pos.y <= paddle.bottom();
    if !within_y {
        return false;
    }

    let leading = ball.pos.x - side.away() * ball.radius;
    let trailing = ball.pos.x + side.away() * ball.radius;
    let near = paddle.near_face(side);
    let far = paddle.far_face(side);

    match side {
        Side::Left => leading <= near && trailing >= far && ball.vel.x <= 0.0,
        Side::Right => leading >= near && trailing <= far && ball.vel.x >= 0.0,
    }
}

/// Flip the horizontal velocity to point away from `side`, magnitude kept
#[inline]
pub fn reflect_simple(vel: Vec2, side: Side) -> Vec2 {
    Vec2::new(side.away() * vel.x.abs(), vel.y)
}

/// Relaunch at an angle set by the contact point.
///
/// The offset from the paddle center, as a fraction of paddle height, lies in
/// `[-0.5, 0.5]`; it is scaled by `deflection_scale` to give the outgoing
/// angle. Speed is preserved.
pub fn reflect_angled(ball: &Ball, paddle: &Paddle, side: Side, deflection_scale: f32) -> Vec2 {
    let offset = ((ball.pos.y - paddle.center.y) / paddle.height).clamp(-0.5, 0.5);
    let angle = offset * deflection_scale;
    let speed = ball.vel.length();
    Vec2::new(side.away() * speed * angle.cos(), speed * angle.sin())
}

/// Test both paddles, left first, and reflect off the first one struck.
///
/// Returns the new ball and the side whose paddle was hit, if any.
pub fn bounce_paddles(
    ball: &Ball,
    left: &Paddle,
    right: &Paddle,
    policy: ReflectionPolicy,
    deflection_scale: f32,
) -> (Ball, Option<Side>) {
    for (paddle, side) in [(left, Side::Left), (right, Side::Right)] {
        if paddle_contact(ball, paddle, side) {
            let vel = match policy {
                ReflectionPolicy::Simple => reflect_simple(ball.vel, side),
                ReflectionPolicy::Angled => reflect_angled(ball, paddle, side, deflection_scale),
            };
            log::debug!(
                "Paddle hit ({:?}) at y={:.1}, vel {:?} -> {:?}",
                side,
                ball.pos.y,
                ball.vel,
                vel
            );
            return (Ball { vel, ..*ball }, Some(side));
        }
    }
    (*ball, None)
}

//! Collision detection and response for the rectangular playfield
//!
//! Walls reflect elastically with the ball clamped back inside the
//! bounds. Paddle deflection replaces the vertical velocity with a
//! function of the impact offset plus a share of the paddle's own
//! velocity (the spin mechanic).

use super::state::{Ball, Paddle, Side};
use crate::consts::{SPIN_OFFSET_FACTOR, SPIN_PADDLE_FACTOR};

/// Horizontal wall the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Reflect the ball off the top/bottom edges, if crossed
///
/// Clamps the position to the edge (accounting for the radius) and
/// inverts the vertical velocity. Horizontal velocity and vertical speed
/// magnitude are unchanged.
pub fn resolve_wall(ball: &mut Ball, field_height: f32) -> Option<Wall> {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.pos.y + ball.radius > field_height {
        ball.pos.y = field_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Normalized impact offset in [-1, 1]
///
/// Where the ball center struck relative to the paddle center, as a
/// fraction of the paddle half-height.
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    ((ball.pos.y - paddle.center_y()) / (paddle.height / 2.0)).clamp(-1.0, 1.0)
}

/// Check whether the ball is in contact with a paddle on `side`
///
/// Contact requires the ball center within the paddle's vertical span,
/// the leading edge past the paddle's trailing edge, and the ball
/// travelling toward that side. The travel gate guarantees at most one
/// horizontal inversion per contact: once deflected, the ball no longer
/// approaches the paddle and cannot re-trigger.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let within_span = ball.pos.y > paddle.y && ball.pos.y < paddle.y + paddle.height;
    if !within_span {
        return false;
    }
    match side {
        Side::Player => ball.vel.x < 0.0 && ball.pos.x - ball.radius < paddle.x + paddle.width,
        Side::Opponent => ball.vel.x > 0.0 && ball.pos.x + ball.radius > paddle.x,
    }
}

/// Deflect the ball off `paddle`
///
/// Repositions the ball just outside the paddle face, inverts the
/// horizontal velocity, and recomputes the vertical velocity as
/// `ball_speed * offset * 1.15 + paddle.vy * 0.05`.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, ball_speed: f32) {
    match side {
        Side::Player => ball.pos.x = paddle.x + paddle.width + ball.radius,
        Side::Opponent => ball.pos.x = paddle.x - ball.radius,
    }
    ball.vel.x = -ball.vel.x;

    let offset = hit_offset(ball, paddle);
    ball.vel.y = ball_speed * offset * SPIN_OFFSET_FACTOR + paddle.vy * SPIN_PADDLE_FACTOR;
}

//! Collision detection and response for walls and paddles
//!
//! Both paddles and walls are axis-aligned, so responses are sign flips and
//! position clamps rather than general reflections.

use super::state::{Ball, Paddle, Side};
use crate::tuning::Tuning;

/// Bounce the ball off the top and bottom walls.
///
/// Returns true if the ball touched a wall. Only the sign of vy changes.
pub fn wall_collision(ball: &mut Ball, court_height: f32) -> bool {
    let mut hit = false;
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y + ball.radius > court_height {
        ball.pos.y = court_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

/// Return the ball off `paddle` if its leading edge crossed the paddle face.
///
/// On a hit the ball is pushed back onto the face (no tunneling or sticking),
/// vx points away from the paddle and grows by `paddle_speedup`, and vy picks
/// up english proportional to how far from the paddle center it struck.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, side: Side, tuning: &Tuning) -> bool {
    let crossed = match side {
        Side::Player => ball.pos.x - ball.radius < tuning.player_face_x(),
        Side::Ai => ball.pos.x + ball.radius > tuning.ai_face_x(),
    };
    if !crossed || !paddle.spans(ball.pos.y) {
        return false;
    }

    let speed_x = ball.vel.x.abs() + tuning.paddle_speedup;
    match side {
        Side::Player => {
            ball.pos.x = tuning.player_face_x() + ball.radius;
            ball.vel.x = speed_x;
        }
        Side::Ai => {
            ball.pos.x = tuning.ai_face_x() - ball.radius;
            ball.vel.x = -speed_x;
        }
    }
    ball.vel.y += english(ball.pos.y, paddle, tuning.english_factor);
    true
}

/// Vertical deflection for a hit at `y`: zero at the center, up to
/// +/- `factor` at the tips.
#[inline]
pub fn english(y: f32, paddle: &Paddle, factor: f32) -> f32 {
    let half = paddle.height / 2.0;
    (y - paddle.center_y()) / half * factor
}

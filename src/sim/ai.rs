//! AI paddle controller
//!
//! A bang-bang tracker with a dead zone plus constant jitter. The jitter is
//! what makes it beatable: it never settles exactly on the ball.

use super::rng::RandomSource;
use super::state::Paddle;
use crate::tuning::Tuning;

/// Directed move for this step, before jitter
pub fn steer(paddle: &Paddle, target_y: f32, tuning: &Tuning) -> f32 {
    let center = paddle.center_y();
    if center < target_y - tuning.ai_dead_zone {
        tuning.ai_speed
    } else if center > target_y + tuning.ai_dead_zone {
        -tuning.ai_speed
    } else {
        0.0
    }
}

/// Move the AI paddle one step toward `target_y`
pub fn track(paddle: &mut Paddle, target_y: f32, tuning: &Tuning, rng: &mut impl RandomSource) {
    paddle.y += steer(paddle, target_y, tuning);
    paddle.y += rng.next_symmetric(tuning.ai_jitter);
    paddle.clamp_to(tuning.court_height);
}

//! Shape generation for 2D primitives
//!
//! All shapes are emitted in court space (y down) as triangle lists.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::{Vertex, colors};
use crate::consts::PADDLE_CORNER_RADIUS;
use crate::sim::{GamePhase, GameState, Paddle};

/// Dash and gap length of the center line
const DASH_LENGTH: f32 = 16.0;
const DASH_GAP: f32 = 14.0;
const MID_LINE_WIDTH: f32 = 6.0;
/// How far the glow extends past a shape
const GLOW_SIZE: f32 = 4.0;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Quarter-circle fan around `center`, starting at `start_angle`
fn corner(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let a1 = start_angle + (i as f32 / segments as f32) * FRAC_PI_2;
        let a2 = start_angle + ((i + 1) as f32 / segments as f32) * FRAC_PI_2;
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * a1.cos(),
            center.y + radius * a1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * a2.cos(),
            center.y + radius * a2.sin(),
            color,
        ));
    }
    vertices
}

/// Generate vertices for a filled rectangle with rounded corners.
///
/// The radius is limited to half the shorter side.
pub fn rounded_rect(min: Vec2, size: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let max = min + size;
    if r == 0.0 {
        return rect(min, max, color);
    }

    // Cross made of a tall and a wide rectangle, then four corner fans
    let mut vertices = rect(Vec2::new(min.x + r, min.y), Vec2::new(max.x - r, max.y), color);
    vertices.extend(rect(Vec2::new(min.x, min.y + r), Vec2::new(max.x, max.y - r), color));

    let segments = 6;
    vertices.extend(corner(Vec2::new(max.x - r, max.y - r), r, 0.0, color, segments));
    vertices.extend(corner(Vec2::new(min.x + r, max.y - r), r, FRAC_PI_2, color, segments));
    vertices.extend(corner(Vec2::new(min.x + r, min.y + r), r, PI, color, segments));
    vertices.extend(corner(Vec2::new(max.x - r, min.y + r), r, PI + FRAC_PI_2, color, segments));
    vertices
}

/// Generate vertices for a dashed vertical line centered on `x`
pub fn dashed_vline(
    x: f32,
    height: f32,
    width: f32,
    dash: f32,
    gap: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < height {
        let end = (y + dash).min(height);
        vertices.extend(rect(
            Vec2::new(x - width / 2.0, y),
            Vec2::new(x + width / 2.0, end),
            color,
        ));
        y += dash + gap;
    }
    vertices
}

fn paddle(paddle: &Paddle) -> Vec<Vertex> {
    let min = Vec2::new(paddle.x, paddle.y);
    let size = Vec2::new(paddle.width, paddle.height);
    let mut vertices = rounded_rect(
        min - Vec2::splat(GLOW_SIZE),
        size + Vec2::splat(GLOW_SIZE * 2.0),
        PADDLE_CORNER_RADIUS + GLOW_SIZE,
        colors::GLOW,
    );
    vertices.extend(rounded_rect(min, size, PADDLE_CORNER_RADIUS, colors::PADDLE));
    vertices
}

/// Build the whole frame: mid line, paddles, ball, and the game-over dimmer
pub fn court_scene(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let mut vertices = dashed_vline(
        tuning.court_width / 2.0,
        tuning.court_height,
        MID_LINE_WIDTH,
        DASH_LENGTH,
        DASH_GAP,
        colors::MID_LINE,
    );

    vertices.extend(paddle(&state.player));
    vertices.extend(paddle(&state.ai));

    let ball = &state.ball;
    vertices.extend(circle(ball.pos, ball.radius + GLOW_SIZE, colors::GLOW, 24));
    vertices.extend(circle(ball.pos, ball.radius, colors::BALL, 24));

    if state.phase == GamePhase::GameOver {
        vertices.extend(rect(
            Vec2::ZERO,
            Vec2::new(tuning.court_width, tuning.court_height),
            colors::GAME_OVER_OVERLAY,
        ));
    }

    vertices
}

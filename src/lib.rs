//! Court Pong - a single-screen paddle game against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, AI paddle)
//! - `game`: Frame driver connecting input, simulation, rendering and HUD
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native input translation
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{GameLoop, Renderer, ScoreBoard};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Court dimensions (court space, y grows downward)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a paddle and its court edge
    pub const PADDLE_MARGIN: f32 = 18.0;
    /// Corner radius used when drawing paddles
    pub const PADDLE_CORNER_RADIUS: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve speed, also the bound of the random vertical serve component
    pub const BALL_SPEED: f32 = 6.0;
    /// Added to |vx| on every paddle hit
    pub const PADDLE_SPEEDUP: f32 = 0.2;
    /// Max vertical deflection per unit of off-center paddle contact
    pub const ENGLISH_FACTOR: f32 = 2.0;

    /// AI paddle
    pub const AI_SPEED: f32 = 4.0;
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const AI_JITTER: f32 = 1.0;

    /// First side to reach this many points wins
    pub const SCORE_TO_WIN: u32 = 7;
}

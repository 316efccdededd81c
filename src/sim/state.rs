//! Game state and core simulation types
//!
//! Everything the renderer and HUD read lives here. Randomness is not part of
//! the state; it is injected into the engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A side reached the win score; frozen until restart
    GameOver,
}

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human, left paddle
    Player,
    /// Computer, right paddle
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle; `speed_x` is the new |vx|
    PaddleHit { side: Side, speed_x: f32 },
    /// `scorer` won the point
    Scored { scorer: Side, score: Score },
    /// The match is decided
    MatchOver { winner: Side },
}

/// Both point counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// Add a point and return the side's new total
    pub fn award(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        };
        *counter += 1;
        *counter
    }
}

/// A vertical paddle. `x`/`y` are the top-left corner in court space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// A paddle for `side`, vertically centered
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Player => tuning.paddle_margin,
            Side::Ai => tuning.ai_face_x(),
        };
        Self {
            x,
            y: tuning.paddle_center_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    /// Vertical center
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `y` lies strictly between the paddle's top and bottom
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Keep the paddle inside the court
    pub fn clamp_to(&mut self, court_height: f32) {
        self.y = self.y.clamp(0.0, court_height - self.height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A ball at court center, served with a random velocity.
    ///
    /// The horizontal sign is `direction` times a random sign, so the
    /// direction argument biases nothing on its own; the vertical component is
    /// uniform in [-speed, speed).
    pub fn serve(tuning: &Tuning, direction: f32, rng: &mut impl RandomSource) -> Self {
        let vx = tuning.ball_speed * direction * rng.next_sign();
        let vy = rng.next_symmetric(tuning.ball_speed);
        Self {
            pos: Vec2::new(tuning.court_width / 2.0, tuning.court_height / 2.0),
            vel: Vec2::new(vx, vy),
            radius: tuning.ball_radius,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Constants for this match
    pub tuning: Tuning,
    /// Left paddle, driven by input
    pub player: Paddle,
    /// Right paddle, driven by the AI
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh match: 0-0, paddles centered, ball served in a random direction
    pub fn new(tuning: Tuning, rng: &mut impl RandomSource) -> Self {
        Self {
            player: Paddle::new(Side::Player, &tuning),
            ai: Paddle::new(Side::Ai, &tuning),
            ball: Ball::serve(&tuning, 1.0, rng),
            score: Score::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset score, paddles and phase, and serve a new ball
    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        self.score = Score::default();
        self.player = Paddle::new(Side::Player, &self.tuning);
        self.ai = Paddle::new(Side::Ai, &self.tuning);
        self.phase = GamePhase::Playing;
        let direction = rng.next_sign();
        self.ball = Ball::serve(&self.tuning, direction, rng);
        self.events.clear();
    }

    /// Move the player paddle so its center sits at `center_y`, clamped
    pub fn set_player_target(&mut self, center_y: f32) {
        // NaN from a broken input device would otherwise poison the paddle
        if !center_y.is_finite() {
            return;
        }
        self.player.y = center_y - self.player.height / 2.0;
        self.player.clamp_to(self.tuning.court_height);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The side that won, once the match is over
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        if self.score.player > self.score.ai {
            Some(Side::Player)
        } else {
            Some(Side::Ai)
        }
    }
}

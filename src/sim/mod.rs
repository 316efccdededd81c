//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Injected randomness only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod engine;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{paddle_collision, wall_collision};
pub use engine::Engine;
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Score, Side};
pub use tick::tick;

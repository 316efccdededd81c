//! Simulation engine: the game state plus the randomness that drives it

use rand_pcg::Pcg32;

use super::rng::{RandomSource, seeded};
use super::state::GameState;
use super::tick::tick;
use crate::tuning::Tuning;

/// Owns one match and its random source
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
}

impl Engine<Pcg32> {
    /// Engine with the production RNG for `seed`
    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, seeded(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Fresh match using `rng` for every random decision
    pub fn new(tuning: Tuning, mut rng: R) -> Self {
        let state = GameState::new(tuning, &mut rng);
        Self { state, rng }
    }

    /// Advance one frame
    pub fn step(&mut self) {
        tick(&mut self.state, &mut self.rng);
    }

    /// Back to 0-0 with centered paddles and a fresh serve
    pub fn restart(&mut self) {
        self.state.restart(&mut self.rng);
        log::info!("Match restarted");
    }

    /// Place the player paddle's center at `center_y` (court space, clamped)
    pub fn set_player_target(&mut self, center_y: f32) {
        self.state.set_player_target(center_y);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tests and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

//! Injectable randomness
//!
//! The simulation never touches ambient randomness. Everything random (serve
//! direction, serve angle, AI jitter) is drawn from a [`RandomSource`] handed
//! to the engine, so a seed or a scripted source replays a match exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples for the simulation
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_unit(&mut self) -> f32;

    /// +1.0 or -1.0 with equal probability
    fn next_sign(&mut self) -> f32 {
        if self.next_unit() > 0.5 { 1.0 } else { -1.0 }
    }

    /// Uniform sample in [-magnitude, magnitude)
    fn next_symmetric(&mut self, magnitude: f32) -> f32 {
        (self.next_unit() * 2.0 - 1.0) * magnitude
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Production RNG for a match seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        let samples = samples.into();
        assert!(!samples.is_empty(), "scripted random needs at least one sample");
        Self { samples, cursor: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

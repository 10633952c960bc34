use bevy::prelude::*;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform random draws used by flicker controllers.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn value(&mut self) -> f32;

    /// Uniform value in `[min, max)`. Never panics on an empty or reversed range.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.value() * (max - min)
    }
}

impl RandomSource for StdRng {
    fn value(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl RandomSource for ThreadRng {
    fn value(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Shared random source for every flickering light in the world.
/// Insert a seeded one before adding the plugin for reproducible runs.
#[derive(Resource)]
pub struct FlickerRng(pub StdRng);

impl FlickerRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for FlickerRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for FlickerRng {
    fn value(&mut self) -> f32 {
        self.0.value()
    }
}

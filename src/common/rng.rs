//! Gameplay randomness.
//!
//! Every random decision in the simulation (weapon rolls, spawn rolls, spawn positions,
//! patrol direction flips) draws from this one resource, so a fixed seed replays a run.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Resource, Debug)]
pub struct CombatRng(StdRng);

impl CombatRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Uniform in `[lo, hi)`; returns `lo` for an empty or inverted range.
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl Default for CombatRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

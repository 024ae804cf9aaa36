//! Random Source Adapters
//!
//! - `StdRngSource`: live draws from `rand`'s `StdRng`, seeded either from
//!   OS entropy or from a fixed `u64`.
//! - `ScriptedSource`: replays a fixed list of `(direction, bet_size)`
//!   draws, for deterministic runs and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::premium::Direction;
use crate::ports::random_source::RandomSource;

/// Live random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded from a fixed value; the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRngSource {
    fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    fn weighted_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays a fixed draw sequence, cycling when it runs out.
///
/// Scripted values are returned verbatim: the requested range and
/// probability are ignored. An empty script draws `low` and `false`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<(Direction, u64)>,
    next_size: usize,
    next_direction: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = (Direction, u64)>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next_size: 0,
            next_direction: 0,
        }
    }

    /// Number of scripted draws before the sequence repeats.
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_inclusive(&mut self, low: u64, _high: u64) -> u64 {
        if self.draws.is_empty() {
            return low;
        }
        let (_, size) = self.draws[self.next_size % self.draws.len()];
        self.next_size += 1;
        size
    }

    fn weighted_bool(&mut self, _probability: f64) -> bool {
        if self.draws.is_empty() {
            return false;
        }
        let (direction, _) = self.draws[self.next_direction % self.draws.len()];
        self.next_direction += 1;
        direction.is_yes()
    }
}

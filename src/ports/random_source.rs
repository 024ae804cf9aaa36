//! Random Source Port - Draw Capabilities Required by a Run
//!
//! The simulation never talks to an RNG directly. It asks a
//! `RandomSource` for exactly two kinds of draw, so tests can replay
//! fixed sequences and the binary can plug in a live generator.

/// Supplier of the random draws a trial needs.
///
/// Live implementors honour the ranges they are given. The use case
/// does not re-check the values it receives.
pub trait RandomSource {
  /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
  fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64;

  /// `true` with the given probability, which lies in [0, 1].
  fn weighted_bool(&mut self, probability: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
  fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64 {
    (**self).uniform_inclusive(low, high)
  }

  fn weighted_bool(&mut self, probability: f64) -> bool {
    (**self).weighted_bool(probability)
  }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
  fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64 {
    (**self).uniform_inclusive(low, high)
  }

  fn weighted_bool(&mut self, probability: f64) -> bool {
    (**self).weighted_bool(probability)
  }
}

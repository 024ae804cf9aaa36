//! Offered-premium arithmetic.
//!
//! An offer for outcome `o` is proportional to the part of the pot not yet
//! promised to `o`, damped by the premium rate and scaled by the bet's
//! weight in the pot, plus a flat return of the stake itself:
//!
//! ```text
//! offered[o] = (pot - promised[o]) * premium_rate * bet_weight + bet_size
//! ```
//!
//! All arithmetic here is `f64`.

use serde::{Deserialize, Serialize};

/// The outcome a bet is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Yes,
    No,
}

impl Direction {
    /// `true` maps to [`Direction::Yes`].
    pub fn from_bool(yes: bool) -> Self {
        if yes { Self::Yes } else { Self::No }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Yes => "yes",
            Self::No => "no",
        })
    }
}

/// When the pot absorbs a bet relative to the premium computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolUpdate {
    /// `pot += bet_size` first; weight and offers see the enlarged pot.
    #[default]
    BeforePremium,
    /// Weight and offers use the pot as it was; the bet is added afterwards.
    AfterPremium,
}

/// Parameters of the premium formula shared by every trial of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumParams {
    /// Seed value of the pot.
    pub initial_pool: f64,
    /// Damping multiplier in (0, 1).
    pub premium_rate: f64,
    /// Ordering of the pot increment.
    pub pool_update: PoolUpdate,
}

impl Default for PremiumParams {
    /// Pot of 10 with a 0.7 × 0.8 damping, pot updated first.
    fn default() -> Self {
        Self {
            initial_pool: 10.0,
            premium_rate: 0.56,
            pool_update: PoolUpdate::BeforePremium,
        }
    }
}

/// A bet's size as a fraction of the pot.
///
/// Returns `None` when the pot is not positive.
pub fn bet_weight(bet_size: u64, pot: f64) -> Option<f64> {
    if pot > 0.0 {
        Some(bet_size as f64 / pot)
    } else {
        None
    }
}

/// The premium offered to a bettor on an outcome that has `promised`
/// already committed against it.
pub fn offered_premium(
    pot: f64,
    promised: f64,
    premium_rate: f64,
    weight: f64,
    bet_size: u64,
) -> f64 {
    (pot - promised) * premium_rate * weight + bet_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_weight_zero_pot_undefined() {
        assert_eq!(bet_weight(5, 0.0), None);
        assert_eq!(bet_weight(5, -1.0), None);
    }

    #[test]
    fn test_bet_weight_fraction() {
        let w = bet_weight(50, 60.0).unwrap();
        assert!((w - 0.833_333).abs() < 1e-6, "got {w}");
    }

    #[test]
    fn test_offered_premium_matches_hand_computation() {
        let w = 50.0 / 60.0;
        let offer = offered_premium(60.0, 0.0, 0.56, w, 50);
        assert!((offer - 78.0).abs() < 1e-9, "got {offer}");
    }

    #[test]
    fn test_offer_shrinks_as_outcome_is_promised() {
        let w = 0.25;
        let fresh = offered_premium(100.0, 0.0, 0.5, w, 10);
        let loaded = offered_premium(100.0, 80.0, 0.5, w, 10);
        assert!(loaded < fresh);
        assert!(loaded >= 10.0, "stake is returned on top");
    }

    #[test]
    fn test_direction_from_bool() {
        assert_eq!(Direction::from_bool(true), Direction::Yes);
        assert_eq!(Direction::from_bool(false), Direction::No);
        assert_eq!(Direction::Yes.to_string(), "yes");
    }

    #[test]
    fn test_pool_update_serde_names() {
        let v: PoolUpdate = serde_json::from_str("\"after_premium\"").unwrap();
        assert_eq!(v, PoolUpdate::AfterPremium);
    }
}

//! Validated simulation parameters.
//!
//! `SimulationParams` can only be obtained through [`SimulationParams::new`]
//! (or `try_from` a [`RawSimulationParams`]), so every run starts from a
//! configuration that has already passed range checks.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::SimulationError;
use super::premium::{PoolUpdate, PremiumParams};

/// Inclusive bounds for uniformly drawn bet sizes.
///
/// Deserializing goes through [`BetSizeRange::new`], so a decoded range
/// is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BetSizeRange {
    low: u64,
    high: u64,
}

#[derive(Deserialize)]
struct RangeBounds {
    low: u64,
    high: u64,
}

impl<'de> Deserialize<'de> for BetSizeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RangeBounds { low, high } = RangeBounds::deserialize(deserializer)?;
        Self::new(low, high).map_err(serde::de::Error::custom)
    }
}

impl BetSizeRange {
    /// Builds a range, rejecting `low > high`.
    ///
    /// Zero is rejected as a lower bound as well: a zero bet has zero
    /// weight in the pot, and with `before_premium` ordering a positive
    /// bet also keeps the pot positive from the very first trial.
    pub fn new(low: u64, high: u64) -> Result<Self, SimulationError> {
        if low == 0 {
            return Err(SimulationError::config(
                "bet_size_range",
                "lower bound must be at least 1",
            ));
        }
        if low > high {
            return Err(SimulationError::config(
                "bet_size_range",
                format!("lower bound {low} exceeds upper bound {high}"),
            ));
        }
        Ok(Self { low, high })
    }

    /// Builds a range from signed bounds as they appear in config files.
    pub fn from_signed(low: i64, high: i64) -> Result<Self, SimulationError> {
        let low = u64::try_from(low).map_err(|_| {
            SimulationError::config("bet_size_range", format!("lower bound {low} is negative"))
        })?;
        let high = u64::try_from(high).map_err(|_| {
            SimulationError::config("bet_size_range", format!("upper bound {high} is negative"))
        })?;
        Self::new(low, high)
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Default for BetSizeRange {
    fn default() -> Self {
        Self { low: 1, high: 100 }
    }
}

/// Unvalidated parameters, as read from a config file or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSimulationParams {
    pub trial_count: i64,
    pub initial_pool: f64,
    pub direction_bias: f64,
    pub bet_size_range: [i64; 2],
    pub premium_rate: f64,
    pub pool_update: PoolUpdate,
    pub seed: Option<u64>,
}

impl Default for RawSimulationParams {
    fn default() -> Self {
        Self {
            trial_count: 100,
            initial_pool: 10.0,
            direction_bias: 0.5,
            bet_size_range: [1, 100],
            premium_rate: 0.56,
            pool_update: PoolUpdate::BeforePremium,
            seed: None,
        }
    }
}

/// Everything a run needs, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParams {
    trial_count: usize,
    direction_bias: f64,
    bet_size_range: BetSizeRange,
    premium: PremiumParams,
    seed: Option<u64>,
}

impl SimulationParams {
    /// Validates and assembles a parameter set.
    ///
    /// # Errors
    /// Returns [`SimulationError::Configuration`] when:
    /// - `trial_count` is zero
    /// - `direction_bias` is outside [0, 1]
    /// - `initial_pool` is negative or not finite
    /// - `premium_rate` is not strictly between 0 and 1
    pub fn new(
        trial_count: usize,
        direction_bias: f64,
        bet_size_range: BetSizeRange,
        premium: PremiumParams,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if trial_count == 0 {
            return Err(SimulationError::config("trial_count", "must be positive"));
        }
        if !(0.0..=1.0).contains(&direction_bias) {
            return Err(SimulationError::config(
                "direction_bias",
                format!("must be in [0, 1], got {direction_bias}"),
            ));
        }
        if !premium.initial_pool.is_finite() || premium.initial_pool < 0.0 {
            return Err(SimulationError::config(
                "initial_pool",
                format!("must be a non-negative number, got {}", premium.initial_pool),
            ));
        }
        if !(premium.premium_rate > 0.0 && premium.premium_rate < 1.0) {
            return Err(SimulationError::config(
                "premium_rate",
                format!("must be in (0, 1), got {}", premium.premium_rate),
            ));
        }

        Ok(Self {
            trial_count,
            direction_bias,
            bet_size_range,
            premium,
            seed,
        })
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    pub fn direction_bias(&self) -> f64 {
        self.direction_bias
    }

    pub fn bet_size_range(&self) -> BetSizeRange {
        self.bet_size_range
    }

    pub fn premium(&self) -> PremiumParams {
        self.premium
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimulationParams {
    /// 100 unbiased trials, bets in [1, 100], pot seeded with 10.
    fn default() -> Self {
        Self {
            trial_count: 100,
            direction_bias: 0.5,
            bet_size_range: BetSizeRange::default(),
            premium: PremiumParams::default(),
            seed: None,
        }
    }
}

impl TryFrom<RawSimulationParams> for SimulationParams {
    type Error = SimulationError;

    fn try_from(raw: RawSimulationParams) -> Result<Self, Self::Error> {
        let trial_count = usize::try_from(raw.trial_count).map_err(|_| {
            SimulationError::config(
                "trial_count",
                format!("must be positive, got {}", raw.trial_count),
            )
        })?;
        let [low, high] = raw.bet_size_range;
        let range = BetSizeRange::from_signed(low, high)?;
        let premium = PremiumParams {
            initial_pool: raw.initial_pool,
            premium_rate: raw.premium_rate,
            pool_update: raw.pool_update,
        };
        Self::new(trial_count, raw.direction_bias, range, premium, raw.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: SimulationError) -> &'static str {
        match err {
            SimulationError::Configuration { field, .. } => field,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_validate() {
        let params = SimulationParams::try_from(RawSimulationParams::default()).unwrap();
        assert_eq!(params, SimulationParams::default());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let raw = RawSimulationParams {
            trial_count: 0,
            ..Default::default()
        };
        assert_eq!(field_of(SimulationParams::try_from(raw).unwrap_err()), "trial_count");
    }

    #[test]
    fn test_negative_trials_rejected() {
        let raw = RawSimulationParams {
            trial_count: -3,
            ..Default::default()
        };
        assert_eq!(field_of(SimulationParams::try_from(raw).unwrap_err()), "trial_count");
    }

    #[test]
    fn test_bias_outside_unit_interval_rejected() {
        for bias in [-0.01, 1.01, f64::NAN] {
            let raw = RawSimulationParams {
                direction_bias: bias,
                ..Default::default()
            };
            assert_eq!(
                field_of(SimulationParams::try_from(raw).unwrap_err()),
                "direction_bias"
            );
        }
    }

    #[test]
    fn test_bias_edges_accepted() {
        for bias in [0.0, 1.0] {
            let raw = RawSimulationParams {
                direction_bias: bias,
                ..Default::default()
            };
            assert!(SimulationParams::try_from(raw).is_ok());
        }
    }

    #[test]
    fn test_negative_bet_bound_rejected() {
        let raw = RawSimulationParams {
            bet_size_range: [-1, 100],
            ..Default::default()
        };
        assert_eq!(
            field_of(SimulationParams::try_from(raw).unwrap_err()),
            "bet_size_range"
        );
    }

    #[test]
    fn test_inverted_bet_range_rejected() {
        assert!(BetSizeRange::new(10, 5).is_err());
        assert!(BetSizeRange::new(0, 5).is_err());
        assert!(BetSizeRange::new(7, 7).is_ok());
    }

    #[test]
    fn test_deserialized_range_is_validated() {
        let inverted = serde_json::from_str::<BetSizeRange>(r#"{"low":9,"high":2}"#);
        assert!(inverted.is_err());
        let zero = serde_json::from_str::<BetSizeRange>(r#"{"low":0,"high":2}"#);
        assert!(zero.is_err());

        let ok: BetSizeRange = serde_json::from_str(r#"{"low":2,"high":9}"#).unwrap();
        assert_eq!(ok, BetSizeRange::new(2, 9).unwrap());
        assert!(ok.contains(2) && ok.contains(9) && !ok.contains(10));
    }

    #[test]
    fn test_negative_pool_rejected() {
        let raw = RawSimulationParams {
            initial_pool: -1.0,
            ..Default::default()
        };
        assert_eq!(field_of(SimulationParams::try_from(raw).unwrap_err()), "initial_pool");
    }

    #[test]
    fn test_zero_pool_accepted() {
        let raw = RawSimulationParams {
            initial_pool: 0.0,
            ..Default::default()
        };
        assert!(SimulationParams::try_from(raw).is_ok());
    }

    #[test]
    fn test_premium_rate_bounds_exclusive() {
        for rate in [0.0, 1.0, 1.5] {
            let raw = RawSimulationParams {
                premium_rate: rate,
                ..Default::default()
            };
            assert_eq!(field_of(SimulationParams::try_from(raw).unwrap_err()), "premium_rate");
        }
    }
}

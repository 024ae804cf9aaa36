//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the accumulator and the percent
//! reduction keep their arithmetic invariants across random inputs.

use proptest::prelude::*;

use premium_sim::domain::accumulator::PremiumAccumulator;
use premium_sim::domain::percent::reduce_by_percent;
use premium_sim::domain::premium::{Direction, PoolUpdate, PremiumParams};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Yes), Just(Direction::No)]
}

fn draws(max_len: usize) -> impl Strategy<Value = Vec<(Direction, u64)>> {
    prop::collection::vec((direction(), 1u64..=100), 0..max_len)
}

fn pool_update() -> impl Strategy<Value = PoolUpdate> {
    prop_oneof![Just(PoolUpdate::BeforePremium), Just(PoolUpdate::AfterPremium)]
}

// ── Pool Properties ─────────────────────────────────────────

proptest! {
    /// Final pot is the seed plus every bet, whatever the directions.
    #[test]
    fn pot_is_seed_plus_bets(
        seed in 1.0f64..1000.0,
        rate in 0.01f64..0.99,
        order in pool_update(),
        seq in draws(200),
    ) {
        let mut acc = PremiumAccumulator::new(PremiumParams {
            initial_pool: seed,
            premium_rate: rate,
            pool_update: order,
        });
        acc.apply_all(seq.iter().copied()).unwrap();

        let total: u64 = seq.iter().map(|(_, size)| size).sum();
        let expected = seed + total as f64;
        prop_assert!(
            (acc.pool().pot() - expected).abs() < 1e-9 * expected.max(1.0),
            "pot {} != {}", acc.pool().pot(), expected
        );
        prop_assert!(acc.pool().pot() >= seed);
    }

    /// Bet weight is in (0, 1] when the pot absorbs the bet first.
    #[test]
    fn bet_weight_in_unit_interval(
        seed in 0.0f64..1000.0,
        seq in draws(100),
    ) {
        let mut acc = PremiumAccumulator::new(PremiumParams {
            initial_pool: seed,
            premium_rate: 0.56,
            pool_update: PoolUpdate::BeforePremium,
        });
        for (dir, size) in seq {
            let trial = acc.apply(dir, size).unwrap();
            prop_assert!(trial.bet_weight > 0.0);
            prop_assert!(trial.bet_weight <= 1.0);
        }
    }
}

// ── Ledger Properties ───────────────────────────────────────

proptest! {
    /// Exactly one side moves per trial, by exactly the chosen offer.
    #[test]
    fn exactly_one_side_moves_per_trial(
        rate in 0.01f64..0.99,
        seq in draws(100),
    ) {
        let mut acc = PremiumAccumulator::new(PremiumParams {
            premium_rate: rate,
            ..PremiumParams::default()
        });
        let mut chosen_total = 0.0;

        for (dir, size) in seq {
            let before = *acc.ledger();
            let trial = acc.apply(dir, size).unwrap();
            let after = *acc.ledger();

            let other = match dir {
                Direction::Yes => Direction::No,
                Direction::No => Direction::Yes,
            };
            prop_assert_eq!(after.promised(other), before.promised(other));
            prop_assert_eq!(
                after.promised(dir),
                before.promised(dir) + trial.accepted_premium()
            );
            prop_assert_eq!(after.bets(dir), before.bets(dir) + 1);
            chosen_total += trial.accepted_premium();
        }

        let ledger = acc.ledger();
        let sum = ledger.promised_yes() + ledger.promised_no();
        prop_assert!((sum - chosen_total).abs() < 1e-6 * chosen_total.abs().max(1.0));
    }

    /// Accepted offers are never negative, so neither ledger total ever
    /// shrinks, whichever pot the weight is taken against.
    #[test]
    fn ledger_totals_never_decrease(
        seed in 1.0f64..1000.0,
        rate in 0.01f64..0.99,
        order in pool_update(),
        seq in prop::collection::vec((direction(), 1u64..=1000), 0..150),
    ) {
        let mut acc = PremiumAccumulator::new(PremiumParams {
            initial_pool: seed,
            premium_rate: rate,
            pool_update: order,
        });

        for (dir, size) in seq {
            let before = *acc.ledger();
            let trial = acc.apply(dir, size).unwrap();
            let after = *acc.ledger();

            prop_assert!(trial.accepted_premium() >= 0.0, "offer {}", trial.accepted_premium());
            prop_assert!(after.promised(dir) >= before.promised(dir));
            prop_assert!(after.promised_yes() >= before.promised_yes());
            prop_assert!(after.promised_no() >= before.promised_no());
        }
    }

    /// Replaying the same draws yields bit-identical totals.
    #[test]
    fn replay_is_deterministic(seq in draws(150)) {
        let mut a = PremiumAccumulator::new(PremiumParams::default());
        let mut b = PremiumAccumulator::new(PremiumParams::default());
        a.apply_all(seq.iter().copied()).unwrap();
        b.apply_all(seq.iter().copied()).unwrap();

        let (sa, sb) = (a.summary(), b.summary());
        prop_assert_eq!(sa.pot.to_bits(), sb.pot.to_bits());
        prop_assert_eq!(sa.promised_premium_yes.to_bits(), sb.promised_premium_yes.to_bits());
        prop_assert_eq!(sa.promised_premium_no.to_bits(), sb.promised_premium_no.to_bits());
    }
}

// ── Percent Reduction Properties ────────────────────────────

proptest! {
    /// Reduction never grows the value and always takes at least one unit.
    #[test]
    fn reduction_is_bounded(value in any::<u128>(), percent in 0u8..=100) {
        let reduced = reduce_by_percent(value, percent);
        prop_assert!(reduced <= value);
        if value > 0 {
            prop_assert!(reduced < value);
        }
    }

    /// Larger percentages never leave more behind.
    #[test]
    fn reduction_monotone_in_percent(value in 0u128..1_000_000_000, p in 0u8..100) {
        prop_assert!(reduce_by_percent(value, p + 1) <= reduce_by_percent(value, p));
    }
}

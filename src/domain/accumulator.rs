//! Premium accumulator — pool and outcome ledger state machine.
//!
//! Holds the only mutable state of a simulation run: the pot and the two
//! promised-premium totals. Every trial is applied through
//! [`PremiumAccumulator::apply`]; state carries forward from trial to trial,
//! so trials must be applied strictly in order.

use serde::Serialize;
use tracing::trace;

use super::error::SimulationError;
use super::premium::{self, Direction, PoolUpdate, PremiumParams};

/// Running stake total. Never decreases below its seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pool {
    seed: f64,
    pot: f64,
}

impl Pool {
    pub fn new(seed: f64) -> Self {
        Self { seed, pot: seed }
    }

    pub fn pot(&self) -> f64 {
        self.pot
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    fn add(&mut self, bet_size: u64) {
        self.pot += bet_size as f64;
    }
}

/// Premium promised per outcome, plus how many bets each side received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OutcomeLedger {
    promised_yes: f64,
    promised_no: f64,
    bets_yes: u64,
    bets_no: u64,
}

impl OutcomeLedger {
    pub fn promised(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Yes => self.promised_yes,
            Direction::No => self.promised_no,
        }
    }

    pub fn promised_yes(&self) -> f64 {
        self.promised_yes
    }

    pub fn promised_no(&self) -> f64 {
        self.promised_no
    }

    pub fn bets(&self, direction: Direction) -> u64 {
        match direction {
            Direction::Yes => self.bets_yes,
            Direction::No => self.bets_no,
        }
    }

    fn accumulate(&mut self, direction: Direction, premium: f64) {
        match direction {
            Direction::Yes => {
                self.promised_yes += premium;
                self.bets_yes += 1;
            }
            Direction::No => {
                self.promised_no += premium;
                self.bets_no += 1;
            }
        }
    }
}

/// Observation of a single applied bet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trial {
    pub direction: Direction,
    pub bet_size: u64,
    pub bet_weight: f64,
    pub offered_yes: f64,
    pub offered_no: f64,
}

impl Trial {
    /// Offer for the given outcome.
    pub fn offered(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Yes => self.offered_yes,
            Direction::No => self.offered_no,
        }
    }

    /// The offer that was actually accumulated.
    pub fn accepted_premium(&self) -> f64 {
        self.offered(self.direction)
    }
}

/// Final state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub trials: usize,
    pub pot: f64,
    pub promised_premium_yes: f64,
    pub promised_premium_no: f64,
    pub bets_yes: u64,
    pub bets_no: u64,
}

/// Applies bets to a pool and ledger.
#[derive(Debug, Clone)]
pub struct PremiumAccumulator {
    params: PremiumParams,
    pool: Pool,
    ledger: OutcomeLedger,
    trials: usize,
}

impl PremiumAccumulator {
    /// Fresh accumulator: pot at `initial_pool`, both ledgers at zero.
    pub fn new(params: PremiumParams) -> Self {
        Self {
            params,
            pool: Pool::new(params.initial_pool),
            ledger: OutcomeLedger::default(),
            trials: 0,
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn ledger(&self) -> &OutcomeLedger {
        &self.ledger
    }

    /// Number of trials applied so far.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Applies one bet and returns what was observed.
    ///
    /// On error, pool and ledger are left exactly as they were.
    ///
    /// # Errors
    /// [`SimulationError::ArithmeticDomain`] if the pot used for the bet
    /// weight is not positive.
    pub fn apply(&mut self, direction: Direction, bet_size: u64) -> Result<Trial, SimulationError> {
        let pot = match self.params.pool_update {
            PoolUpdate::BeforePremium => self.pool.pot() + bet_size as f64,
            PoolUpdate::AfterPremium => self.pool.pot(),
        };

        let weight = premium::bet_weight(bet_size, pot).ok_or(
            SimulationError::ArithmeticDomain {
                trial: self.trials,
                pot,
            },
        )?;

        let rate = self.params.premium_rate;
        let offered_yes =
            premium::offered_premium(pot, self.ledger.promised_yes, rate, weight, bet_size);
        let offered_no =
            premium::offered_premium(pot, self.ledger.promised_no, rate, weight, bet_size);

        let trial = Trial {
            direction,
            bet_size,
            bet_weight: weight,
            offered_yes,
            offered_no,
        };

        self.pool.add(bet_size);
        self.ledger.accumulate(direction, trial.accepted_premium());
        self.trials += 1;

        trace!(
            trial = self.trials - 1,
            %direction,
            bet_size,
            bet_weight = weight,
            offered_yes,
            offered_no,
            pot = self.pool.pot(),
            "Bet applied"
        );

        Ok(trial)
    }

    /// Applies a fixed sequence of draws, stopping at the first error.
    pub fn apply_all<I>(&mut self, draws: I) -> Result<Vec<Trial>, SimulationError>
    where
        I: IntoIterator<Item = (Direction, u64)>,
    {
        draws
            .into_iter()
            .map(|(direction, bet_size)| self.apply(direction, bet_size))
            .collect()
    }

    /// Snapshot of the current totals.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            trials: self.trials,
            pot: self.pool.pot(),
            promised_premium_yes: self.ledger.promised_yes,
            promised_premium_no: self.ledger.promised_no,
            bets_yes: self.ledger.bets_yes,
            bets_no: self.ledger.bets_no,
        }
    }
}

//! Simulation Runner - Sequential Trial Loop
//!
//! Drives a `PremiumAccumulator` for `trial_count` trials:
//! - draws a bet size and a direction from the `RandomSource`
//! - applies the bet to the pool and ledger
//! - forwards every observation to the `TrialSink`
//!
//! Trials are strictly sequential: each one sees the pool and ledger
//! left by the previous trial. A domain error aborts the run.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::adapters::rng::StdRngSource;
use crate::domain::accumulator::{PremiumAccumulator, RunSummary};
use crate::domain::error::SimulationError;
use crate::domain::params::SimulationParams;
use crate::domain::premium::Direction;
use crate::ports::random_source::RandomSource;
use crate::ports::trial_sink::TrialSink;

/// Mean, minimum and maximum of one quantity across batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
  pub mean: f64,
  pub min: f64,
  pub max: f64,
}

impl Spread {
  fn of(values: &[f64]) -> Self {
    let n = values.len().max(1) as f64;
    Self {
      mean: values.iter().sum::<f64>() / n,
      min: values.iter().copied().fold(f64::INFINITY, f64::min),
      max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
  }
}

/// Aggregate of several independent runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
  /// Number of runs executed.
  pub runs: usize,
  /// Final pot across runs.
  pub pot: Spread,
  /// Final promised premium on "yes" across runs.
  pub promised_premium_yes: Spread,
  /// Final promised premium on "no" across runs.
  pub promised_premium_no: Spread,
  /// Share of all bets, over all runs, that went to "yes".
  pub yes_fraction: f64,
}

impl BatchSummary {
  fn from_runs(summaries: &[RunSummary]) -> Self {
    let pots: Vec<f64> = summaries.iter().map(|s| s.pot).collect();
    let yes: Vec<f64> = summaries.iter().map(|s| s.promised_premium_yes).collect();
    let no: Vec<f64> = summaries.iter().map(|s| s.promised_premium_no).collect();
    let bets_yes: u64 = summaries.iter().map(|s| s.bets_yes).sum();
    let bets_total: u64 = summaries.iter().map(|s| s.bets_yes + s.bets_no).sum();

    Self {
      runs: summaries.len(),
      pot: Spread::of(&pots),
      promised_premium_yes: Spread::of(&yes),
      promised_premium_no: Spread::of(&no),
      yes_fraction: if bets_total == 0 {
        0.0
      } else {
        bets_yes as f64 / bets_total as f64
      },
    }
  }
}

/// Runs simulations for one validated parameter set.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
  params: SimulationParams,
}

impl SimulationRunner {
  /// Create a runner for already-validated parameters.
  pub fn new(params: SimulationParams) -> Self {
    Self { params }
  }

  /// Run `trial_count` trials with the given source and sink.
  ///
  /// # Errors
  /// Returns error if a trial hits a non-positive pot
  /// ([`SimulationError::ArithmeticDomain`], downcastable) or the sink
  /// fails to record an observation.
  pub fn run<R, S>(&self, source: &mut R, sink: &mut S) -> Result<RunSummary>
  where
    R: RandomSource + ?Sized,
    S: TrialSink + ?Sized,
  {
    let range = self.params.bet_size_range();
    let bias = self.params.direction_bias();
    let mut accumulator = PremiumAccumulator::new(self.params.premium());

    info!(
      trials = self.params.trial_count(),
      initial_pool = self.params.premium().initial_pool,
      premium_rate = self.params.premium().premium_rate,
      pool_update = ?self.params.premium().pool_update,
      direction_bias = bias,
      "Simulation started"
    );

    for index in 0..self.params.trial_count() {
      let bet_size = source.uniform_inclusive(range.low(), range.high());
      let direction = Direction::from_bool(source.weighted_bool(bias));

      let trial = accumulator.apply(direction, bet_size).inspect_err(|e| {
        error!(trial = index, error = %e, "Simulation aborted");
      })?;

      sink
        .record_trial(index, &trial)
        .with_context(|| format!("Failed to record trial {index}"))?;
    }

    let summary = accumulator.summary();
    sink
      .record_summary(&summary)
      .context("Failed to record run summary")?;

    info!(
      pot = summary.pot,
      promised_yes = summary.promised_premium_yes,
      promised_no = summary.promised_premium_no,
      "Simulation finished"
    );

    Ok(summary)
  }

  /// Run with a live `StdRng` source, seeded if the parameters carry a seed.
  pub fn run_live<S>(&self, sink: &mut S) -> Result<RunSummary>
  where
    S: TrialSink + ?Sized,
  {
    let mut source = StdRngSource::from_seed_option(self.params.seed());
    self.run(&mut source, sink)
  }

  /// Run `runs` independent simulations, each with a fresh pool and ledger.
  ///
  /// Run `i` draws from a source seeded with `seed + i` when the
  /// parameters carry a seed, from OS entropy otherwise. Observations of
  /// every run go to the same sink, trial indices restarting at zero.
  ///
  /// # Errors
  /// Returns error if `runs` is zero or any run fails.
  pub fn run_batch<S>(&self, runs: usize, sink: &mut S) -> Result<BatchSummary>
  where
    S: TrialSink + ?Sized,
  {
    if runs == 0 {
      return Err(SimulationError::config("runs", "must be positive").into());
    }

    let mut summaries = Vec::with_capacity(runs);
    for i in 0..runs {
      let seed = self.params.seed().map(|s| s.wrapping_add(i as u64));
      let mut source = StdRngSource::from_seed_option(seed);
      let summary = self
        .run(&mut source, sink)
        .with_context(|| format!("Batch run {i} failed"))?;
      summaries.push(summary);
    }

    let batch = BatchSummary::from_runs(&summaries);
    info!(
      runs = batch.runs,
      mean_yes = batch.promised_premium_yes.mean,
      mean_no = batch.promised_premium_no.mean,
      yes_fraction = batch.yes_fraction,
      "Batch finished"
    );
    Ok(batch)
  }
}

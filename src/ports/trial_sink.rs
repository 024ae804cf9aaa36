//! Trial Sink Port - Observation Output Interface
//!
//! Receives every trial's observable values and the final totals of a
//! run. Formatting (text, JSON lines, log events) is entirely up to the
//! implementor.

use crate::domain::accumulator::{RunSummary, Trial};

/// Consumer of run observations.
pub trait TrialSink {
  /// Called once per applied trial, in order.
  ///
  /// # Errors
  /// Returns error if the observation could not be written; the run
  /// is aborted.
  fn record_trial(&mut self, index: usize, trial: &Trial) -> anyhow::Result<()>;

  /// Called once after the last trial.
  fn record_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()>;
}

impl<S: TrialSink + ?Sized> TrialSink for &mut S {
  fn record_trial(&mut self, index: usize, trial: &Trial) -> anyhow::Result<()> {
    (**self).record_trial(index, trial)
  }

  fn record_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
    (**self).record_summary(summary)
  }
}

impl<S: TrialSink + ?Sized> TrialSink for Box<S> {
  fn record_trial(&mut self, index: usize, trial: &Trial) -> anyhow::Result<()> {
    (**self).record_trial(index, trial)
  }

  fn record_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
    (**self).record_summary(summary)
  }
}

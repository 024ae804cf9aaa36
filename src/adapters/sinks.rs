//! Trial Sink Adapters
//!
//! Output formats for run observations:
//! - `TextSink`: human-readable lines, one per trial, then the totals
//! - `JsonLinesSink`: one self-contained JSON object per line
//! - `TracingSink`: structured `tracing` events
//! - `MemorySink`: keeps everything in memory
//! - `NullSink`: discards everything

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::accumulator::{RunSummary, Trial};
use crate::ports::trial_sink::TrialSink;

/// Plain text output, close to what a person would print by hand.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TrialSink for TextSink<W> {
    fn record_trial(&mut self, index: usize, trial: &Trial) -> Result<()> {
        writeln!(
            self.out,
            "trial {index:>4}  {:<3}  bet size: {:>4}  bet weight: {:.4}  \
             offer premium yes: {:.4}  offer premium no: {:.4}",
            trial.direction, trial.bet_size, trial.bet_weight, trial.offered_yes, trial.offered_no,
        )
        .context("Failed to write trial line")
    }

    fn record_summary(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(
            self.out,
            "promised premium yes: {:.4} ({} bets)\npromised premium no: {:.4} ({} bets)\npot: {:.4}",
            summary.promised_premium_yes,
            summary.bets_yes,
            summary.promised_premium_no,
            summary.bets_no,
            summary.pot,
        )
        .context("Failed to write run summary")?;
        self.out.flush().context("Failed to flush output")
    }
}

#[derive(Serialize)]
struct IndexedTrial<'a> {
    index: usize,
    #[serde(flatten)]
    trial: &'a Trial,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Trial(IndexedTrial<'a>),
    Summary(&'a RunSummary),
}

/// One JSON object per line, tagged with an `event` field.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record<'_>) -> Result<()> {
        let mut json = serde_json::to_string(record).context("Failed to serialize record")?;
        json.push('\n');
        self.out
            .write_all(json.as_bytes())
            .context("Failed to write record")
    }
}

impl<W: Write> TrialSink for JsonLinesSink<W> {
    fn record_trial(&mut self, index: usize, trial: &Trial) -> Result<()> {
        self.write_record(&Record::Trial(IndexedTrial { index, trial }))
    }

    fn record_summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.write_record(&Record::Summary(summary))?;
        self.out.flush().context("Failed to flush output")
    }
}

/// Emits observations as log events.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TrialSink for TracingSink {
    fn record_trial(&mut self, index: usize, trial: &Trial) -> Result<()> {
        debug!(
            trial = index,
            direction = %trial.direction,
            bet_size = trial.bet_size,
            bet_weight = trial.bet_weight,
            offered_yes = trial.offered_yes,
            offered_no = trial.offered_no,
            "Trial"
        );
        Ok(())
    }

    fn record_summary(&mut self, summary: &RunSummary) -> Result<()> {
        info!(
            trials = summary.trials,
            pot = summary.pot,
            promised_yes = summary.promised_premium_yes,
            promised_no = summary.promised_premium_no,
            bets_yes = summary.bets_yes,
            bets_no = summary.bets_no,
            "Run summary"
        );
        Ok(())
    }
}

/// Collects observations for later inspection.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub trials: Vec<(usize, Trial)>,
    pub summary: Option<RunSummary>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrialSink for MemorySink {
    fn record_trial(&mut self, index: usize, trial: &Trial) -> Result<()> {
        self.trials.push((index, *trial));
        Ok(())
    }

    fn record_summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.summary = Some(*summary);
        Ok(())
    }
}

/// Drops every observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TrialSink for NullSink {
    fn record_trial(&mut self, _index: usize, _trial: &Trial) -> Result<()> {
        Ok(())
    }

    fn record_summary(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}

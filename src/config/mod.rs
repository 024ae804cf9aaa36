//! Configuration Module - TOML-based Simulator Configuration
//!
//! Loads and validates configuration from a TOML file. Every section and
//! field has a default, so an empty file (or no file at all) describes
//! the stock run: 100 unbiased bets of 1..=100 against a pot of 10.

pub mod loader;

use serde::Deserialize;

use crate::domain::error::SimulationError;
use crate::domain::params::{RawSimulationParams, SimulationParams};

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Log output settings.
  pub logging: LoggingConfig,
  /// Simulation parameters, validated on load.
  pub simulation: RawSimulationParams,
  /// Where trial observations go.
  pub output: OutputConfig,
}

impl AppConfig {
  /// Validated simulation parameters.
  ///
  /// # Errors
  /// Returns [`SimulationError::Configuration`] for out-of-range values.
  pub fn simulation_params(&self) -> Result<SimulationParams, SimulationError> {
    SimulationParams::try_from(self.simulation.clone())
  }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins.
  pub level: String,
  /// Emit JSON log lines instead of the human-readable format.
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

/// Observation output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  /// Output format for trial observations and totals.
  pub format: OutputFormat,
}

/// Output formats understood by the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Human-readable lines on stdout.
  #[default]
  Text,
  /// One JSON object per line on stdout.
  Json,
  /// Structured log events only.
  Log,
  /// Final totals only (no per-trial output).
  None,
}

fn default_log_level() -> String {
  "info".to_string()
}

//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the TOML config, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    trials = config.simulation.trial_count,
    initial_pool = config.simulation.initial_pool,
    premium_rate = config.simulation.premium_rate,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Simulation parameters in range (trial count, bias, bounds, pool, rate)
/// - A known log level
fn validate_config(config: &AppConfig) -> Result<()> {
  config.simulation_params()?;

  let level = config.logging.level.to_ascii_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "logging.level must be one of {LOG_LEVELS:?}, got {:?}",
    config.logging.level
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::OutputFormat;
  use crate::domain::error::SimulationError;
  use crate::domain::premium::PoolUpdate;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_empty_config_is_stock_run() {
    let config = parse_config("").unwrap();
    let params = config.simulation_params().unwrap();
    assert_eq!(params.trial_count(), 100);
    assert_eq!(params.premium().initial_pool, 10.0);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.logging.level, "info");
  }

  #[test]
  fn test_full_config() {
    let config = parse_config(
      r#"
      [logging]
      level = "debug"
      json = true

      [simulation]
      trial_count = 250
      initial_pool = 20.0
      direction_bias = 0.95
      bet_size_range = [5, 50]
      premium_rate = 0.49
      pool_update = "after_premium"
      seed = 7

      [output]
      format = "json"
      "#,
    )
    .unwrap();

    let params = config.simulation_params().unwrap();
    assert_eq!(params.trial_count(), 250);
    assert_eq!(params.direction_bias(), 0.95);
    assert_eq!(params.bet_size_range().low(), 5);
    assert_eq!(params.bet_size_range().high(), 50);
    assert_eq!(params.premium().pool_update, PoolUpdate::AfterPremium);
    assert_eq!(params.seed(), Some(7));
    assert!(config.logging.json);
    assert_eq!(config.output.format, OutputFormat::Json);
  }

  #[test]
  fn test_out_of_range_bias_is_configuration_error() {
    let err = parse_config("[simulation]\ndirection_bias = 1.5\n").unwrap_err();
    let domain = err.downcast_ref::<SimulationError>().unwrap();
    assert!(domain.is_configuration());
  }

  #[test]
  fn test_negative_bound_is_configuration_error() {
    let err = parse_config("[simulation]\nbet_size_range = [-5, 10]\n").unwrap_err();
    assert!(err.downcast_ref::<SimulationError>().is_some());
  }

  #[test]
  fn test_unknown_log_level_rejected() {
    assert!(parse_config("[logging]\nlevel = \"loud\"\n").is_err());
  }
}

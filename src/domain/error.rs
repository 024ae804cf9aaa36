//! Domain error taxonomy.
//!
//! Both variants are fatal for a run: configuration problems are caught
//! before the first trial, arithmetic problems abort the run in place.

use thiserror::Error;

/// Errors raised by the simulation domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A configuration value is out of its accepted range.
    #[error("configuration error: `{field}` {reason}")]
    Configuration {
        /// Name of the offending option.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// The pool was not positive when a bet weight had to be computed.
    #[error("arithmetic domain error at trial {trial}: bet weight undefined for pot {pot}")]
    ArithmeticDomain {
        /// Zero-based index of the failing trial.
        trial: usize,
        /// Pool value at the moment of division.
        pot: f64,
    },
}

impl SimulationError {
    /// Shorthand for building a [`SimulationError::Configuration`].
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this error was raised during validation, before any trial ran.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

//! Domain layer - Core simulation logic and models.
//!
//! Pure arithmetic and state: no I/O and no randomness. Random draws and
//! output are supplied by the `ports` layer.

pub mod accumulator;
pub mod error;
pub mod params;
pub mod percent;
pub mod premium;

// Re-export core types for convenience
pub use accumulator::{OutcomeLedger, Pool, PremiumAccumulator, RunSummary, Trial};
pub use error::SimulationError;
pub use params::{BetSizeRange, RawSimulationParams, SimulationParams};
pub use percent::{reduce_by_5_percent, reduce_by_percent};
pub use premium::{Direction, PoolUpdate, PremiumParams};

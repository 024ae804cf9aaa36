//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `SimulationRunner`: single runs and batches of independent runs

pub mod simulation;

pub use simulation::{BatchSummary, SimulationRunner, Spread};

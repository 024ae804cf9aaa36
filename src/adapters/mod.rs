//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! dependencies (`rand`, `std::io` writers, `tracing`).
//!
//! Adapter categories:
//! - `rng`: live and scripted random sources
//! - `sinks`: text, JSON lines, log and in-memory output

pub mod rng;
pub mod sinks;

pub use rng::{ScriptedSource, StdRngSource};
pub use sinks::{JsonLinesSink, MemorySink, NullSink, TextSink, TracingSink};

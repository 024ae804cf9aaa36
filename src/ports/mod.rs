//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use cases require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `RandomSource`: uniform integer and weighted boolean draws
//! - `TrialSink`: per-trial observations and final totals

pub mod random_source;
pub mod trial_sink;

pub use random_source::RandomSource;
pub use trial_sink::TrialSink;

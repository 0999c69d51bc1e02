//! `epi-disease` — disease parameters and stochastic course sampling.
//!
//! Everything here is pure sampling and lookup: the [`Disease`] struct holds
//! validated parameters and pre-built distributions, and its methods draw
//! stage durations, severities, and transmission outcomes from a caller-
//! provided RNG.  It keeps no mutable state of its own, so a single instance
//! is shared read-only across the whole tick loop.

pub mod disease;


pub use disease::{Disease, DiseaseParams};

//! `epi-pop` — the age-structured population.
//!
//! Holds per-age state counters (who is susceptible, infected, detected,
//! hospitalized, …), population-wide mobility modifiers, and the daily
//! contact-count sampler.  The counter mutation API is called only from the
//! sequential apply phase of the tick loop, which is what keeps the per-age
//! bookkeeping consistent without atomics.

pub mod population;

#[cfg(test)]
mod tests;

pub use population::Population;

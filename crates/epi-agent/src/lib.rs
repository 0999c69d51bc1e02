//! `epi-agent` — agent storage for the epi epidemic simulator.
//!
//! # Why two structs?
//!
//! The exposure-planning phase needs `&mut AgentRngs` (exclusive mutable
//! access to each agent's RNG) and `&PersonStore` (shared read access to all
//! agent state) simultaneously.  Rust's borrow checker forbids this if both
//! live inside a single struct.  Keeping RNGs in a separate [`AgentRngs`]
//! struct resolves the conflict cleanly:
//!
//! ```ignore
//! // epi-sim planning pass (simplified):
//! let people: &PersonStore = &sim.people;
//! let plans = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| plan_agent(&people.people[i], rng))
//!     .collect::<Vec<_>>();
//! ```

pub mod person;
pub mod store;

#[cfg(test)]
mod tests;

pub use person::{Person, MAX_INFECTEES};
pub use store::{AgentRngs, PersonStore};

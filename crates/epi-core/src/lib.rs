//! `epi-core` — foundational types for the epi epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (`rand`/`rand_distr`,
//! `chrono`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                 |
//! | [`day`]     | `Day`, `SimCalendar`                                      |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`classed`] | `ClassedValues` — small class-indexed lookup tables       |
//! | [`health`]  | `HealthState`, `Severity`, `TestingMode`                  |
//! | [`problem`] | `SimProblem` — fatal in-tick invariant violations         |
//! | [`error`]   | `EpiError`, `EpiResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.      |

pub mod classed;
pub mod day;
pub mod error;
pub mod health;
pub mod ids;
pub mod problem;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use classed::ClassedValues;
pub use day::{Day, SimCalendar};
pub use error::{EpiError, EpiResult};
pub use health::{HealthState, Severity, TestingMode};
pub use ids::AgentId;
pub use problem::SimProblem;
pub use rng::{AgentRng, SimRng};

//! `epi-sim` — tick loop orchestrator for the epi epidemic simulator.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for each simulated day:
//!   ① Interventions — parameter changes scheduled for today are applied.
//!   ② Testing       — healthcare drains yesterday's testing queue; positive
//!                     cases are detected and (in contact-tracing mode) their
//!                     known contacts are queued for tomorrow.
//!   ③ Planning      — every infectious agent samples its exposure attempts
//!                     from its own RNG stream against read-only state
//!                     (parallel with the `parallel` feature).
//!   ④ Apply         — sequential pass in ascending `AgentId` order: planned
//!                     exposures infect still-susceptible targets, stage
//!                     timers advance, hospital capacity is allocated and
//!                     released, population counters are updated.
//! ```
//!
//! Because agents only ever consume their own RNG stream during planning and
//! all mutation happens in the deterministic apply pass, a run is bit-for-bit
//! reproducible for a given seed whether or not `parallel` is enabled.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the planning phase on Rayon's thread pool.        |
//! | `serde`    | Adds `Serialize`/`Deserialize` to [`ModelState`].      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_disease::{Disease, DiseaseParams};
//! use epi_pop::Population;
//! use epi_sim::{HealthcareSystem, NoopObserver, SimBuilder};
//!
//! let pop = Population::new(&age_counts, avg_contacts)?;
//! let care = HealthcareSystem::new(500, 40, 0.05);
//! let disease = Disease::new(params)?;
//! let mut sim = SimBuilder::new(pop, care, disease, "2020-02-01")
//!     .seed(42)
//!     .build()?;
//! sim.infect_people(20)?;
//! sim.run_days(180, &mut NoopObserver)?;
//! ```

pub mod advance;
pub mod builder;
pub mod error;
pub mod healthcare;
pub mod intervention;
pub mod observer;
pub mod sample;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use healthcare::HealthcareSystem;
pub use intervention::{Action, Intervention};
pub use observer::{NoopObserver, SimObserver};
pub use sample::SampleKind;
pub use sim::Sim;
pub use state::ModelState;

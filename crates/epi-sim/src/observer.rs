//! Simulation observer trait for progress reporting and data collection.

use epi_core::Day;

use crate::ModelState;

/// Callbacks invoked by [`Sim::run_days`][crate::Sim::run_days] at day
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, day: Day, state: &ModelState) {
///         if day.0 % 10 == 0 {
///             println!("{day}: {} infected", state.total_infected());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a day is processed.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after a day completes, with a fresh state snapshot.
    fn on_day_end(&mut self, _day: Day, _state: &ModelState) {}

    /// Called once after the final day completes.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_days` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! Fluent builder for constructing a [`Sim`].

use epi_core::SimCalendar;
use epi_disease::Disease;
use epi_pop::Population;

use crate::{HealthcareSystem, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Population`] — age structure and contact curve
/// - [`HealthcareSystem`] — bed/ICU capacity and testing policy
/// - [`Disease`] — validated disease parameters
/// - a start date (ISO `YYYY-MM-DD`), anchoring intervention scheduling
///
/// # Optional inputs (have defaults)
///
/// | Method     | Default |
/// |------------|---------|
/// | `.seed(s)` | 0       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(pop, care, disease, "2020-02-01")
///     .seed(42)
///     .build()?;
/// sim.infect_people(20)?;
/// ```
pub struct SimBuilder {
    population: Population,
    healthcare: HealthcareSystem,
    disease: Disease,
    start_date: String,
    seed: u64,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        population: Population,
        healthcare: HealthcareSystem,
        disease: Disease,
        start_date: &str,
    ) -> Self {
        Self {
            population,
            healthcare,
            disease,
            start_date: start_date.to_owned(),
            seed: 0,
        }
    }

    /// Master RNG seed.  The same seed always produces identical results.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate inputs, allocate all agents susceptible, and return a
    /// ready-to-run [`Sim`] positioned at day 0.
    pub fn build(self) -> SimResult<Sim> {
        if self.population.total_people() == 0 {
            return Err(SimError::Config("population has no agents".into()));
        }
        let calendar = SimCalendar::from_iso(&self.start_date)?;
        Ok(Sim::assemble(
            calendar,
            self.population,
            self.healthcare,
            self.disease,
            self.seed,
        ))
    }
}

//! Diagnostic distribution sampling.
//!
//! Exercises one synthetic agent of a given age 10 000 times so a driver
//! can inspect the shape of the model's distributions without running a
//! simulation.  Draws come from a scratch RNG derived from the master seed;
//! the run's own streams are never disturbed.

use epi_core::{AgentId, AgentRng};

use crate::Sim;

const DRAWS: usize = 10_000;

/// Which distribution to sample.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SampleKind {
    ContactsPerDay,
    SymptomSeverity,
    IncubationPeriod,
    IllnessPeriod,
    HospitalizationPeriod,
    IcuPeriod,
    /// Not a sampled distribution: the transmission-weight curve over days
    /// [−100, 100) relative to symptom onset.
    Infectiousness,
}

impl SampleKind {
    /// Parse the wire-level name used by external drivers.
    pub fn parse(name: &str) -> Option<SampleKind> {
        Some(match name {
            "contacts_per_day" => SampleKind::ContactsPerDay,
            "symptom_severity" => SampleKind::SymptomSeverity,
            "incubation_period" => SampleKind::IncubationPeriod,
            "illness_period" => SampleKind::IllnessPeriod,
            "hospitalization_period" => SampleKind::HospitalizationPeriod,
            "icu_period" => SampleKind::IcuPeriod,
            "infectiousness" => SampleKind::Infectiousness,
            _ => return None,
        })
    }
}

impl Sim {
    /// Sample a model distribution for a synthetic agent of the given age.
    ///
    /// Severities are reported as their numeric codes (asymptomatic 0,
    /// mild 1, severe 2, critical 3); durations and contact counts as whole
    /// days/contacts.
    pub fn sample(&self, kind: SampleKind, age: u8) -> Vec<f32> {
        let mut rng = AgentRng::new(!self.seed, AgentId(kind as u32));
        match kind {
            SampleKind::Infectiousness => {
                (-100..100).map(|day| self.disease.infectiousness_on(day)).collect()
            }
            SampleKind::ContactsPerDay => (0..DRAWS)
                .map(|_| self.population.contacts_per_day(age, &mut rng, 1.0, 100) as f32)
                .collect(),
            SampleKind::SymptomSeverity => (0..DRAWS)
                .map(|_| self.disease.symptom_severity(age, &mut rng) as u8 as f32)
                .collect(),
            SampleKind::IncubationPeriod => (0..DRAWS)
                .map(|_| self.disease.incubation_days(&mut rng) as f32)
                .collect(),
            SampleKind::IllnessPeriod => (0..DRAWS)
                .map(|_| self.disease.illness_days(&mut rng) as f32)
                .collect(),
            SampleKind::HospitalizationPeriod => (0..DRAWS)
                .map(|_| self.disease.hospitalization_days(&mut rng) as f32)
                .collect(),
            SampleKind::IcuPeriod => (0..DRAWS)
                .map(|_| self.disease.icu_days(&mut rng) as f32)
                .collect(),
        }
    }
}

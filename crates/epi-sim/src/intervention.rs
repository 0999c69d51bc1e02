//! Scheduled interventions — dated, named parameter changes.

use std::fmt;

use epi_core::Day;

use crate::SimError;

/// A parameter change applied at the start of its scheduled day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intervention {
    pub day: Day,
    pub action: Action,
}

impl Intervention {
    pub fn new(day: Day, action: Action) -> Self {
        Self { day, action }
    }
}

/// What an intervention does when its day arrives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Switch testing to every symptomatic case.
    TestAllWithSymptoms,
    /// Switch testing to severe/critical cases only.
    TestOnlySevereSymptoms,
    /// Switch testing to every symptomatic case, with contact tracing.
    TestWithContactTracing,
    /// Commission additional ICU units.
    BuildNewIcuUnits(u32),
    /// Commission additional hospital beds.
    BuildNewHospitalBeds(u32),
    /// Seed this many new infections from outside the population.
    ImportInfections(u32),
    /// Cap any single agent's daily contacts (0 removes the cap).
    LimitMassGatherings(u32),
    /// Reduce population mobility by the given percentage.
    LimitMobility(u32),
}

impl Action {
    /// Parse the wire-level `(name, value)` pair used by external drivers.
    pub fn parse(name: &str, value: u32) -> Result<Action, SimError> {
        Ok(match name {
            "test-all-with-symptoms" => Action::TestAllWithSymptoms,
            "test-only-severe-symptoms" => Action::TestOnlySevereSymptoms,
            "test-with-contact-tracing" => Action::TestWithContactTracing,
            "build-new-icu-units" => Action::BuildNewIcuUnits(value),
            "build-new-hospital-beds" => Action::BuildNewHospitalBeds(value),
            "import-infections" => Action::ImportInfections(value),
            "limit-mass-gatherings" => Action::LimitMassGatherings(value),
            "limit-mobility" => Action::LimitMobility(value),
            _ => return Err(SimError::UnknownIntervention(name.into())),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::TestAllWithSymptoms => "test-all-with-symptoms",
            Action::TestOnlySevereSymptoms => "test-only-severe-symptoms",
            Action::TestWithContactTracing => "test-with-contact-tracing",
            Action::BuildNewIcuUnits(_) => "build-new-icu-units",
            Action::BuildNewHospitalBeds(_) => "build-new-hospital-beds",
            Action::ImportInfections(_) => "import-infections",
            Action::LimitMassGatherings(_) => "limit-mass-gatherings",
            Action::LimitMobility(_) => "limit-mobility",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::TestAllWithSymptoms
            | Action::TestOnlySevereSymptoms
            | Action::TestWithContactTracing => f.write_str(self.name()),
            Action::BuildNewIcuUnits(v)
            | Action::BuildNewHospitalBeds(v)
            | Action::ImportInfections(v)
            | Action::LimitMassGatherings(v)
            | Action::LimitMobility(v) => write!(f, "{} {v}", self.name()),
        }
    }
}

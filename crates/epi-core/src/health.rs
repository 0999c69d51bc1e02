//! Health-domain enums shared across all `epi-*` crates.

// ── HealthState ───────────────────────────────────────────────────────────────

/// Where an agent is in the course of the disease.
///
/// The two derived flags of the model — "is infected" and "has immunity" —
/// are functions of this state, so they cannot drift out of sync with it:
/// an agent is infected in exactly the four middle states, and immunity is
/// permanent once `Recovered` or `Dead` is reached.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    /// Never infected (initial state).
    #[default]
    Susceptible,
    /// Infected, not yet symptomatic.
    Incubating,
    /// In the symptomatic stage of the disease timeline (which, for
    /// `Severity::Asymptomatic`, shows no clinical symptoms).
    Ill,
    /// In a hospital bed.
    Hospitalized,
    /// In an intensive-care unit.
    InIcu,
    /// Survived; permanently immune.
    Recovered,
    /// Did not survive.
    Dead,
}

impl HealthState {
    /// `true` while the agent carries the disease.
    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(
            self,
            HealthState::Incubating
                | HealthState::Ill
                | HealthState::Hospitalized
                | HealthState::InIcu
        )
    }

    /// `true` once the agent can never be infected again.
    #[inline]
    pub fn is_immune(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }

    /// Human-readable label for logs and report columns.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Incubating => "incubating",
            HealthState::Ill => "ill",
            HealthState::Hospitalized => "hospitalized",
            HealthState::InIcu => "in-icu",
            HealthState::Recovered => "recovered",
            HealthState::Dead => "dead",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Clinical severity, assigned once at infection time from age-indexed
/// curves.  Meaningful only for infected agents.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// No clinical symptoms at any point.
    #[default]
    Asymptomatic,
    /// Symptomatic, recovers without care.
    Mild,
    /// Needs a hospital bed at the end of the illness stage.
    Severe,
    /// Needs intensive care at the end of the illness stage.
    Critical,
}

impl Severity {
    /// `true` when the agent shows clinical symptoms during the illness stage.
    #[inline]
    pub fn symptomatic(self) -> bool {
        !matches!(self, Severity::Asymptomatic)
    }

    /// `true` when the end of the illness stage leads to hospital care.
    #[inline]
    pub fn needs_hospital(self) -> bool {
        matches!(self, Severity::Severe | Severity::Critical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Asymptomatic => "asymptomatic",
            Severity::Mild => "mild",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TestingMode ───────────────────────────────────────────────────────────────

/// Healthcare testing policy, switchable mid-run by interventions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestingMode {
    /// Nobody is tested (default state).
    #[default]
    None,
    /// Only severe/critical symptoms qualify; milder cases are picked up
    /// with a small residual probability.
    OnlySevereSymptoms,
    /// Every symptomatic case is tested.
    AllWithSymptoms,
    /// Every symptomatic case is tested and positive cases trigger
    /// contact tracing.
    AllWithSymptomsCt,
}

impl TestingMode {
    /// `true` when detections feed the contact-tracing pipeline.
    #[inline]
    pub fn traces_contacts(self) -> bool {
        matches!(self, TestingMode::AllWithSymptomsCt)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestingMode::None => "none",
            TestingMode::OnlySevereSymptoms => "only-severe-symptoms",
            TestingMode::AllWithSymptoms => "all-with-symptoms",
            TestingMode::AllWithSymptomsCt => "all-with-symptoms-ct",
        }
    }
}

impl std::fmt::Display for TestingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

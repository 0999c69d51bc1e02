//! The per-agent health record.

use epi_core::{AgentId, HealthState, Severity, SimProblem};

/// Hard cap on the number of infectees an agent's contact log can hold.
/// Exceeding it invalidates the run ([`SimProblem::TooManyInfectees`]).
pub const MAX_INFECTEES: usize = 64;

/// One individual in the simulated population.
///
/// The agent's index in the [`PersonStore`][crate::PersonStore] is its
/// identity; it is not duplicated here.  Stage-timing fields are meaningful
/// only in the states that use them: `days_left` counts down within the
/// current stage, `day_of_illness` is defined from symptom onset, and
/// `day_of_infection` counts every day since infection.
#[derive(Clone, Debug)]
pub struct Person {
    pub age: u8,
    pub state: HealthState,
    /// Assigned at infection time; meaningless while `Susceptible`.
    pub severity: Severity,

    /// Known to the healthcare system; implies quarantine (no exposures).
    pub was_detected: bool,
    /// Set on first enqueue for testing and intentionally never cleared, so
    /// an agent is tested at most once per run.
    pub queued_for_testing: bool,
    /// Set once this agent's secondary-infection count has been folded into
    /// the cumulative reproduction-number totals.
    pub included_in_totals: bool,

    /// Days remaining in the current stage.
    pub days_left: u32,
    /// 0-based day since symptom onset; defined in `Ill` and later.
    pub day_of_illness: u32,
    /// Days since infection.
    pub day_of_infection: u32,

    /// Who infected this agent; `AgentId::INVALID` for seeded infections.
    pub infector: AgentId,
    /// Indices of agents this agent infected.  Allocated lazily, only when
    /// contact tracing is active at infection time; freed on recovery/death.
    pub infectees: Option<Vec<AgentId>>,
    /// Total secondary infections, tracked whether or not the infectee log
    /// is allocated.
    pub people_infected: u32,
    /// Exposure attempts performed on the current day.
    pub exposed_today: u32,
}

impl Person {
    /// A never-infected agent of the given age.
    pub fn susceptible(age: u8) -> Self {
        Self {
            age,
            state: HealthState::Susceptible,
            severity: Severity::Asymptomatic,
            was_detected: false,
            queued_for_testing: false,
            included_in_totals: false,
            days_left: 0,
            day_of_illness: 0,
            day_of_infection: 0,
            infector: AgentId::INVALID,
            infectees: None,
            people_infected: 0,
            exposed_today: 0,
        }
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state.is_infected()
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        self.state.is_immune()
    }

    /// `true` when the agent can still be infected.
    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.state == HealthState::Susceptible
    }

    // ── Infectee log ──────────────────────────────────────────────────────

    /// Allocate the infectee log for this agent (contact-tracing mode).
    ///
    /// `this` is the agent's own ID, used only for error reporting.
    pub fn open_infectee_log(&mut self, this: AgentId) -> Result<(), SimProblem> {
        if self.infectees.is_some() {
            return Err(SimProblem::ContactLogAlreadyAllocated { agent: this });
        }
        self.infectees = Some(Vec::with_capacity(MAX_INFECTEES));
        Ok(())
    }

    /// Record a secondary infection caused by this agent.
    ///
    /// The running total is bumped unconditionally; the target index is
    /// appended only when the log is allocated.
    pub fn record_infectee(&mut self, this: AgentId, target: AgentId) -> Result<(), SimProblem> {
        self.people_infected += 1;
        if let Some(log) = &mut self.infectees {
            if log.len() >= MAX_INFECTEES {
                return Err(SimProblem::TooManyInfectees { agent: this });
            }
            log.push(target);
        }
        Ok(())
    }

    /// Free the infectee log (recovery, death, teardown).
    #[inline]
    pub fn drop_infectee_log(&mut self) {
        self.infectees = None;
    }
}

//! The healthcare system: bed/ICU capacity, testing, contact tracing.

use epi_agent::{Person, PersonStore};
use epi_core::{AgentId, AgentRng, HealthState, SimProblem, TestingMode};
use epi_disease::Disease;
use epi_pop::Population;
use log::debug;

/// Finite hospital capacity plus the testing pipeline.
///
/// Capacity accounting and the testing queue are only touched from the
/// single-threaded parts of the tick (queue processing before the agent
/// pass, stage transitions during the sequential apply pass), so plain
/// fields suffice.
pub struct HealthcareSystem {
    pub beds: u32,
    pub icu_units: u32,
    pub available_beds: u32,
    pub available_icu_units: u32,

    /// Number of tests processed in the most recent queue drain.
    pub tests_run_today: u32,
    /// Residual chance that a mild case gets tested under
    /// [`TestingMode::OnlySevereSymptoms`].
    pub p_detected_anyway: f32,
    pub testing_mode: TestingMode,

    testing_queue: Vec<AgentId>,
}

impl HealthcareSystem {
    pub fn new(beds: u32, icu_units: u32, p_detected_anyway: f32) -> Self {
        Self {
            beds,
            icu_units,
            available_beds: beds,
            available_icu_units: icu_units,
            tests_run_today: 0,
            p_detected_anyway,
            testing_mode: TestingMode::None,
            testing_queue: Vec::new(),
        }
    }

    /// Agents currently waiting to be tested (drained next tick).
    pub fn queued(&self) -> &[AgentId] {
        &self.testing_queue
    }

    // ── Testing pipeline ──────────────────────────────────────────────────

    /// Put an agent on the testing queue.
    ///
    /// Dead, already-detected, and already-queued agents are refused.  The
    /// `queued_for_testing` flag is never cleared afterwards, so an agent is
    /// queued at most once per run.
    pub fn queue_for_testing(&mut self, agent: AgentId, person: &mut Person) -> bool {
        if person.state == HealthState::Dead || person.was_detected || person.queued_for_testing {
            return false;
        }
        person.queued_for_testing = true;
        self.testing_queue.push(agent);
        true
    }

    /// Called when a symptomatic, undetected agent falls ill: decide by
    /// testing mode whether it joins the queue.
    pub fn seek_testing(&mut self, agent: AgentId, person: &mut Person, rng: &mut AgentRng) -> bool {
        match self.testing_mode {
            TestingMode::None => false,
            TestingMode::AllWithSymptoms | TestingMode::AllWithSymptomsCt => {
                self.queue_for_testing(agent, person)
            }
            TestingMode::OnlySevereSymptoms => {
                if person.severity.needs_hospital() || rng.chance(self.p_detected_anyway) {
                    self.queue_for_testing(agent, person)
                } else {
                    false
                }
            }
        }
    }

    /// Drain and process the testing queue.  Runs once per tick, before the
    /// agent pass, on a single thread.
    ///
    /// Dequeuing an agent whose queued flag is unset means the queue is
    /// corrupt; that is fatal on the spot.
    pub fn run_daily_tests(
        &mut self,
        people: &mut PersonStore,
        disease: &Disease,
        pop: &mut Population,
    ) -> Result<(), SimProblem> {
        let batch = std::mem::take(&mut self.testing_queue);
        self.tests_run_today = batch.len() as u32;
        for agent in batch {
            {
                let person = &people[agent];
                if !person.queued_for_testing {
                    return Err(SimProblem::NotQueued { agent });
                }
                if !person.is_infected() || person.was_detected {
                    continue;
                }
                if !self.test_positive(person, disease) {
                    continue;
                }
            }
            let person = &mut people[agent];
            person.was_detected = true;
            let (age, severity) = (person.age, person.severity);
            pop.detect(age);
            debug!("detected {agent} (age {age}, {severity})");
            if self.testing_mode.traces_contacts() {
                self.trace_contacts(agent, 0, people);
            }
        }
        Ok(())
    }

    /// Queue the agent's infector and known infectees for testing,
    /// recursing one level into freshly queued contacts.
    fn trace_contacts(&mut self, agent: AgentId, depth: u32, people: &mut PersonStore) {
        if depth > 1 {
            return;
        }
        let infector = people[agent].infector;
        if infector != AgentId::INVALID && self.queue_for_testing(infector, &mut people[infector]) {
            self.trace_contacts(infector, depth + 1, people);
        }
        let infectees = people[agent].infectees.clone().unwrap_or_default();
        for target in infectees {
            if self.queue_for_testing(target, &mut people[target]) {
                self.trace_contacts(target, depth + 1, people);
            }
        }
    }

    /// Whether a test on this agent comes back positive: the agent is
    /// currently shedding, or is already under hospital care.
    pub fn test_positive(&self, person: &Person, disease: &Disease) -> bool {
        disease.source_infectiousness(person) > 0.0
            || matches!(person.state, HealthState::Hospitalized | HealthState::InIcu)
    }

    // ── Capacity accounting ───────────────────────────────────────────────

    /// Reserve a hospital bed; `false` when none are free.
    pub fn try_allocate_bed(&mut self) -> bool {
        if self.available_beds > 0 {
            self.available_beds -= 1;
            true
        } else {
            false
        }
    }

    /// Reserve an ICU unit; `false` when none are free.
    pub fn try_allocate_icu(&mut self) -> bool {
        if self.available_icu_units > 0 {
            self.available_icu_units -= 1;
            true
        } else {
            false
        }
    }

    pub fn release_bed(&mut self) -> Result<(), SimProblem> {
        if self.available_beds >= self.beds {
            return Err(SimProblem::HospitalAccounting("released more beds than exist"));
        }
        self.available_beds += 1;
        Ok(())
    }

    pub fn release_icu(&mut self) -> Result<(), SimProblem> {
        if self.available_icu_units >= self.icu_units {
            return Err(SimProblem::HospitalAccounting("released more ICU units than exist"));
        }
        self.available_icu_units += 1;
        Ok(())
    }

    pub fn add_beds(&mut self, count: u32) {
        self.beds += count;
        self.available_beds += count;
    }

    pub fn add_icu_units(&mut self, count: u32) {
        self.icu_units += count;
        self.available_icu_units += count;
    }
}

//! The per-agent state machine: exposure planning and stage transitions.
//!
//! The tick loop splits each day's agent work in two:
//!
//! - [`plan_exposures`] is the read-only half.  Every infectious agent
//!   samples how many people it meets today and pre-rolls the transmission
//!   outcome of each meeting, consuming only its own RNG stream.  Nothing is
//!   mutated besides the RNGs, so this phase can fan out across threads.
//! - [`World`] is the write half.  The driver walks agents in ascending
//!   index order, applies the planned exposures to still-susceptible
//!   targets, and advances stage timers — which is where hospital capacity,
//!   population counters, and the testing queue are touched.

use epi_agent::{AgentRngs, Person, PersonStore};
use epi_core::{AgentId, AgentRng, HealthState, Severity, SimProblem};
use epi_disease::Disease;
use epi_pop::Population;

use crate::HealthcareSystem;

// ── Exposure planning ─────────────────────────────────────────────────────────

/// One agent's planned activity for the day.
pub(crate) struct DayPlan {
    /// Exposure attempts the agent performs today.
    pub exposed: u32,
    /// Targets whose transmission roll succeeded; they are infected during
    /// the apply pass if still susceptible by the time their source's plan
    /// is applied.
    pub hits: Vec<AgentId>,
}

impl DayPlan {
    fn idle() -> Self {
        DayPlan { exposed: 0, hits: Vec::new() }
    }
}

/// Sample every agent's exposure attempts for the day.
///
/// Targets are drawn uniformly from the whole population; the transmission
/// roll depends only on the source's stage, so it can be made here without
/// looking at the target.
pub(crate) fn plan_exposures(
    people: &PersonStore,
    pop: &Population,
    disease: &Disease,
    rngs: &mut AgentRngs,
) -> Vec<DayPlan> {
    let total = people.len() as u32;
    let plan_one = |person: &Person, rng: &mut AgentRng| -> DayPlan {
        if !matches!(person.state, HealthState::Incubating | HealthState::Ill) {
            return DayPlan::idle();
        }
        let exposed = disease.people_exposed(person, pop, rng);
        if exposed == 0 {
            return DayPlan::idle();
        }
        let mut hits = Vec::new();
        for _ in 0..exposed {
            let target = AgentId(rng.gen_range(0..total));
            if disease.did_infect(person, rng) {
                hits.push(target);
            }
        }
        DayPlan { exposed, hits }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rngs.inner
            .par_iter_mut()
            .enumerate()
            .map(|(i, rng)| plan_one(&people.people[i], rng))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        rngs.inner
            .iter_mut()
            .enumerate()
            .map(|(i, rng)| plan_one(&people.people[i], rng))
            .collect()
    }
}

// ── The write half ────────────────────────────────────────────────────────────

/// Mutable view over everything a stage transition can touch.
///
/// Borrowed field-by-field from [`Sim`][crate::Sim] for the duration of the
/// apply pass (and for seeding infections), leaving the driver's own
/// counters free for concurrent use.
pub(crate) struct World<'a> {
    pub people: &'a mut PersonStore,
    pub rngs: &'a mut AgentRngs,
    pub pop: &'a mut Population,
    pub care: &'a mut HealthcareSystem,
    pub disease: &'a Disease,
}

impl World<'_> {
    /// Infect `target` if it is still susceptible.
    ///
    /// Samples severity and incubation length from the target's own RNG,
    /// records the infector, and — when contact tracing is active at this
    /// moment — opens the target's infectee log.
    pub fn try_infect(
        &mut self,
        target: AgentId,
        source: Option<AgentId>,
    ) -> Result<bool, SimProblem> {
        if !self.people[target].is_susceptible() {
            return Ok(false);
        }
        let age = self.people[target].age;
        let rng = self.rngs.get_mut(target);
        let severity = self.disease.symptom_severity(age, rng);
        let incubation = self.disease.incubation_days(rng);

        let person = &mut self.people[target];
        person.state = HealthState::Incubating;
        person.severity = severity;
        person.days_left = incubation;
        person.day_of_infection = 0;
        person.day_of_illness = 0;
        person.infector = source.unwrap_or(AgentId::INVALID);
        if self.care.testing_mode.traces_contacts() {
            person.open_infectee_log(target)?;
        }
        self.pop.infect(age);

        if let Some(source) = source {
            self.people[source].record_infectee(source, target)?;
        }
        Ok(true)
    }

    /// Advance one infected agent by one day: count down the current stage
    /// and transition when it ends.  Exposures for the day have already been
    /// applied by the caller.
    pub fn advance_agent(&mut self, agent: AgentId) -> Result<(), SimProblem> {
        match self.people[agent].state {
            HealthState::Incubating => {
                self.people[agent].days_left -= 1;
                if self.people[agent].days_left == 0 {
                    self.become_ill(agent);
                }
            }
            HealthState::Ill => {
                self.people[agent].days_left -= 1;
                if self.people[agent].days_left == 0 {
                    self.finish_illness(agent);
                } else {
                    self.people[agent].day_of_illness += 1;
                }
            }
            HealthState::Hospitalized | HealthState::InIcu => {
                self.people[agent].days_left -= 1;
                if self.people[agent].days_left == 0 {
                    self.discharge(agent)?;
                }
            }
            HealthState::Susceptible | HealthState::Recovered | HealthState::Dead => {
                return Ok(());
            }
        }
        self.people[agent].day_of_infection += 1;
        Ok(())
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn become_ill(&mut self, agent: AgentId) {
        let days = {
            let rng = self.rngs.get_mut(agent);
            self.disease.illness_days(rng)
        };
        let person = &mut self.people[agent];
        person.state = HealthState::Ill;
        person.day_of_illness = 0;
        person.days_left = days;
        if person.severity.symptomatic() && !person.was_detected {
            let rng = self.rngs.get_mut(agent);
            self.care.seek_testing(agent, person, rng);
        }
    }

    fn finish_illness(&mut self, agent: AgentId) {
        if self.people[agent].severity.needs_hospital() {
            self.hospitalize(agent);
        } else {
            self.recover(agent);
        }
    }

    /// Move an agent whose illness stage ended into hospital care.
    ///
    /// Critical cases need an ICU unit and die on the spot without one.
    /// Severe cases take a bed when available; otherwise their outcome is
    /// rolled immediately with the no-care death probability, bypassing the
    /// bed entirely.
    fn hospitalize(&mut self, agent: AgentId) {
        if !self.people[agent].was_detected {
            self.detect(agent);
        }
        let age = self.people[agent].age;
        if self.people[agent].severity == Severity::Critical {
            if self.care.try_allocate_icu() {
                let days = {
                    let rng = self.rngs.get_mut(agent);
                    self.disease.icu_days(rng)
                };
                let person = &mut self.people[agent];
                person.state = HealthState::InIcu;
                person.days_left = days;
                self.pop.transfer_to_icu(age);
            } else {
                self.die(agent);
            }
        } else if self.care.try_allocate_bed() {
            let days = {
                let rng = self.rngs.get_mut(agent);
                self.disease.hospitalization_days(rng)
            };
            let person = &mut self.people[agent];
            person.state = HealthState::Hospitalized;
            person.days_left = days;
            self.pop.hospitalize(age);
        } else {
            let dies = {
                let rng = self.rngs.get_mut(agent);
                self.disease.dies_in_hospital(false, false, rng)
            };
            if dies {
                self.die(agent);
            } else {
                self.recover(agent);
            }
        }
    }

    /// End of a hospital/ICU stay: roll the outcome, return the capacity.
    fn discharge(&mut self, agent: AgentId) -> Result<(), SimProblem> {
        let in_icu = self.people[agent].state == HealthState::InIcu;
        let age = self.people[agent].age;
        let dies = {
            let rng = self.rngs.get_mut(agent);
            self.disease.dies_in_hospital(in_icu, true, rng)
        };
        if in_icu {
            self.care.release_icu()?;
            self.pop.release_from_icu(age);
        } else {
            self.care.release_bed()?;
            self.pop.release_from_hospital(age);
        }
        if dies {
            self.die(agent);
        } else {
            self.recover(agent);
        }
        Ok(())
    }

    fn detect(&mut self, agent: AgentId) {
        let person = &mut self.people[agent];
        person.was_detected = true;
        let age = person.age;
        self.pop.detect(age);
    }

    fn recover(&mut self, agent: AgentId) {
        let person = &mut self.people[agent];
        person.state = HealthState::Recovered;
        person.drop_infectee_log();
        let (age, was_detected) = (person.age, person.was_detected);
        if was_detected {
            self.pop.clear_detected(age);
        }
        self.pop.recover(age);
    }

    fn die(&mut self, agent: AgentId) {
        let person = &mut self.people[agent];
        person.state = HealthState::Dead;
        person.drop_infectee_log();
        let (age, was_detected) = (person.age, person.was_detected);
        if was_detected {
            self.pop.clear_detected(age);
        }
        self.pop.die(age);
    }
}

//! The `Sim` struct and its daily tick loop.

use epi_agent::{AgentRngs, PersonStore};
use epi_core::{AgentId, Day, HealthState, SimCalendar, SimProblem, SimRng, TestingMode};
use epi_disease::Disease;
use epi_pop::Population;
use log::{debug, info, warn};

use crate::advance::{plan_exposures, World};
use crate::{
    Action, HealthcareSystem, Intervention, ModelState, SimError, SimObserver, SimResult,
};

/// The main simulation runner.
///
/// Owns every agent, the subsystems, and the day counter, and drives the
/// four-phase daily tick (interventions → testing → exposure planning →
/// sequential apply).  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// The current simulation day; the next call to [`step`][Sim::step]
    /// processes it.
    pub day: Day,
    /// Maps days to calendar dates for intervention scheduling.
    pub calendar: SimCalendar,

    /// Every agent, indexed by `AgentId`.
    pub people: PersonStore,
    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,
    /// Global RNG for seeding infections and diagnostics.
    sim_rng: SimRng,
    /// The master seed, kept for deriving diagnostic scratch streams.
    pub(crate) seed: u64,

    pub population: Population,
    pub healthcare: HealthcareSystem,
    pub disease: Disease,

    interventions: Vec<Intervention>,

    /// Agents whose infectious period has ended, counted once each.
    pub total_infectors: u64,
    /// Secondary infections caused by those agents.
    pub total_infections: u64,
    /// Exposure attempts performed during the most recent day.
    pub exposed_today: u64,
}

impl Sim {
    // ── Construction (via SimBuilder) ─────────────────────────────────────

    pub(crate) fn assemble(
        calendar: SimCalendar,
        population: Population,
        healthcare: HealthcareSystem,
        disease: Disease,
        seed: u64,
    ) -> Self {
        let ages = population.agent_ages();
        let people = PersonStore::from_ages(&ages);
        let rngs = AgentRngs::new(people.len(), seed);
        Self {
            day: Day::ZERO,
            calendar,
            people,
            rngs,
            sim_rng: SimRng::new(seed),
            seed,
            population,
            healthcare,
            disease,
            interventions: Vec::new(),
            total_infectors: 0,
            total_infections: 0,
            exposed_today: 0,
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Register an intervention to fire at the start of its day.
    pub fn add_intervention(&mut self, intervention: Intervention) {
        self.interventions.push(intervention);
    }

    /// Register an intervention by calendar date and wire name, e.g.
    /// `sim.schedule("2020-03-15", "limit-mobility", 50)`.
    pub fn schedule(&mut self, date: &str, name: &str, value: u32) -> SimResult<()> {
        let day = self.calendar.day_of(date)?;
        let action = Action::parse(name, value)?;
        self.interventions.push(Intervention::new(day, action));
        Ok(())
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Infect `count` uniformly random susceptible agents with no source.
    ///
    /// Returns how many were actually infected — fewer than `count` only
    /// when the susceptible pool runs dry.
    pub fn infect_people(&mut self, count: u32) -> SimResult<u32> {
        let total = self.people.len() as u32;
        let day = self.day;
        let mut infected = 0;
        while infected < count {
            if self.population.total_susceptible() == 0 {
                warn!("{day}: susceptible pool exhausted after {infected} imported infections");
                break;
            }
            let target = AgentId(self.sim_rng.gen_range(0..total));
            let mut world = World {
                people: &mut self.people,
                rngs: &mut self.rngs,
                pop: &mut self.population,
                care: &mut self.healthcare,
                disease: &self.disease,
            };
            if world
                .try_infect(target, None)
                .map_err(|problem| SimError::Problem { day, problem })?
            {
                infected += 1;
            }
        }
        Ok(infected)
    }

    // ── The daily tick ────────────────────────────────────────────────────

    /// Advance the simulation by one day.
    pub fn step(&mut self) -> SimResult<()> {
        let today = self.day;

        // ── Phase 1: interventions due today ──────────────────────────────
        let due: Vec<Action> = self
            .interventions
            .iter()
            .filter(|iv| iv.day == today)
            .map(|iv| iv.action.clone())
            .collect();
        for action in due {
            info!("{today}: applying intervention '{action}'");
            self.apply_action(action)?;
        }

        self.exposed_today = 0;

        // ── Phase 2: process yesterday's testing queue ────────────────────
        //
        // Runs before the agent pass so that fresh detections quarantine an
        // agent for the whole day.  Queue corruption is fatal on the spot.
        self.healthcare
            .run_daily_tests(&mut self.people, &self.disease, &mut self.population)
            .map_err(|problem| SimError::Problem { day: today, problem })?;

        // ── Phase 3: exposure planning (read-only, parallel-capable) ──────
        let plans = plan_exposures(
            &self.people,
            &self.population,
            &self.disease,
            &mut self.rngs,
        );

        // ── Phase 4: sequential apply in ascending AgentId order ──────────
        //
        // Problems raised here are recorded and surfaced after the pass; the
        // tick always runs to completion first.
        let mut problem: Option<SimProblem> = None;
        let mut world = World {
            people: &mut self.people,
            rngs: &mut self.rngs,
            pop: &mut self.population,
            care: &mut self.healthcare,
            disease: &self.disease,
        };
        for (i, plan) in plans.iter().enumerate() {
            let agent = AgentId(i as u32);

            // Fold finished infectors into the cumulative totals exactly once.
            let person = &world.people[agent];
            if matches!(person.state, HealthState::Recovered | HealthState::Dead)
                && !person.included_in_totals
            {
                self.total_infections += person.people_infected as u64;
                self.total_infectors += 1;
                world.people[agent].included_in_totals = true;
            }

            if !world.people[agent].is_infected() {
                continue;
            }

            world.people[agent].exposed_today = plan.exposed;
            self.exposed_today += plan.exposed as u64;
            for &target in &plan.hits {
                if target == agent {
                    continue;
                }
                if let Err(p) = world.try_infect(target, Some(agent)) {
                    problem.get_or_insert(p);
                }
            }
            if let Err(p) = world.advance_agent(agent) {
                problem.get_or_insert(p);
            }
        }

        if let Some(problem) = problem {
            warn!("{today}: aborting run: {problem}");
            return Err(SimError::Problem { day: today, problem });
        }

        debug!(
            "{today}: {} exposures, {} tests",
            self.exposed_today, self.healthcare.tests_run_today
        );
        self.day = today + 1;
        Ok(())
    }

    /// Run `days` consecutive days, invoking observer hooks at each boundary.
    pub fn run_days<O: SimObserver>(&mut self, days: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..days {
            let today = self.day;
            observer.on_day_start(today);
            self.step()?;
            let state = self.model_state();
            observer.on_day_end(today, &state);
        }
        observer.on_sim_end(self.day);
        Ok(())
    }

    fn apply_action(&mut self, action: Action) -> SimResult<()> {
        match action {
            Action::TestAllWithSymptoms => {
                self.healthcare.testing_mode = TestingMode::AllWithSymptoms;
            }
            Action::TestOnlySevereSymptoms => {
                self.healthcare.testing_mode = TestingMode::OnlySevereSymptoms;
            }
            Action::TestWithContactTracing => {
                self.healthcare.testing_mode = TestingMode::AllWithSymptomsCt;
            }
            Action::BuildNewIcuUnits(count) => self.healthcare.add_icu_units(count),
            Action::BuildNewHospitalBeds(count) => self.healthcare.add_beds(count),
            Action::ImportInfections(count) => {
                self.infect_people(count)?;
            }
            Action::LimitMassGatherings(limit) => {
                self.population.limit_mass_gatherings = limit;
            }
            Action::LimitMobility(percent) => {
                self.population.mobility_factor = (100 - percent.min(100)) as f32 / 100.0;
            }
        }
        Ok(())
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// Snapshot the per-age counters and per-day scalars.
    pub fn model_state(&self) -> ModelState {
        let pop = &self.population;
        ModelState {
            day: self.day,
            susceptible: pop.susceptible.clone(),
            infected: pop.infected.clone(),
            all_infected: pop.all_infected.clone(),
            detected: pop.detected.clone(),
            all_detected: pop.all_detected.clone(),
            recovered: pop.recovered.clone(),
            hospitalized: pop.hospitalized.clone(),
            in_icu: pop.in_icu.clone(),
            dead: pop.dead.clone(),
            available_hospital_beds: self.healthcare.available_beds,
            available_icu_units: self.healthcare.available_icu_units,
            exposed_per_day: self.exposed_today,
            tests_run_per_day: self.healthcare.tests_run_today,
            r: if self.total_infectors > 5 {
                self.total_infections as f32 / self.total_infectors as f32
            } else {
                0.0
            },
        }
    }

    // ── Test access ───────────────────────────────────────────────────────

    /// Mutable view over the state-machine surface; used by in-crate tests
    /// to drive individual transitions.
    #[cfg(test)]
    pub(crate) fn world(&mut self) -> World<'_> {
        World {
            people: &mut self.people,
            rngs: &mut self.rngs,
            pop: &mut self.population,
            care: &mut self.healthcare,
            disease: &self.disease,
        }
    }
}

//! outbreak — smallest runnable demo of the epi simulator.
//!
//! Simulates a respiratory epidemic in a synthetic city of 100 000 people
//! with a COVID-like parameter set: seeded imports in February, testing
//! switched on as the case count grows, mobility restrictions a month in.

use std::time::Instant;

use anyhow::Result;

use epi_core::Day;
use epi_disease::{Disease, DiseaseParams};
use epi_pop::Population;
use epi_sim::{HealthcareSystem, ModelState, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SIM_DAYS: u32 = 180;
const START_DATE: &str = "2020-02-01";

const HOSPITAL_BEDS: u32 = 280;
const ICU_UNITS: u32 = 25;

// ── Scenario inputs ───────────────────────────────────────────────────────────

/// A rough urban age pyramid, 100 000 people in 10-year bands.
const AGE_COUNTS: &[(u8, u32)] = &[
    (5, 11_000),
    (15, 11_500),
    (25, 14_000),
    (35, 14_500),
    (45, 13_000),
    (55, 12_500),
    (65, 11_000),
    (75, 8_000),
    (85, 4_500),
];

fn disease() -> Result<Disease> {
    let params = DiseaseParams {
        p_infection: 0.33,
        p_asymptomatic: 0.25,
        p_severe: vec![
            (0, 0.005),
            (30, 0.02),
            (50, 0.06),
            (60, 0.12),
            (70, 0.25),
            (80, 0.35),
        ],
        p_critical: vec![(0, 0.1), (50, 0.2), (70, 0.3)],
        p_hospital_death: 0.1,
        p_icu_death: 0.35,
        p_hospital_death_no_beds: 0.5,
        p_icu_death_no_beds: 0.95,
        mean_illness_duration: 7.0,
        mean_hospitalization_duration: 12.0,
        mean_icu_duration: 14.0,
    };
    Ok(Disease::new(params)?)
}

fn population() -> Result<Population> {
    // Contacts fall off with age: school/work ages mix the most.
    let avg_contacts = vec![(0, 12.0), (20, 14.0), (65, 8.0), (80, 4.0)];
    Ok(Population::new(AGE_COUNTS, avg_contacts)?)
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct WeeklyReport;

impl SimObserver for WeeklyReport {
    fn on_day_end(&mut self, day: Day, state: &ModelState) {
        if day.0 % 7 != 0 {
            return;
        }
        println!(
            "{:<8} {:>9} {:>9} {:>7} {:>7} {:>7} {:>6.2}",
            day.to_string(),
            state.total_infected(),
            state.total_all_infected(),
            state.hospitalized.iter().sum::<u32>(),
            state.in_icu.iter().sum::<u32>(),
            state.total_dead(),
            state.r,
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== outbreak — epi agent-based epidemic demo ===");
    println!(
        "Population: {}  |  Days: {SIM_DAYS}  |  Seed: {SEED}",
        AGE_COUNTS.iter().map(|&(_, n)| n).sum::<u32>()
    );
    println!();

    let healthcare = HealthcareSystem::new(HOSPITAL_BEDS, ICU_UNITS, 0.05);
    let mut sim = SimBuilder::new(population()?, healthcare, disease()?, START_DATE)
        .seed(SEED)
        .build()?;

    // The epidemic arrives in waves of imported cases; policy ramps up as
    // the case counts grow.
    sim.schedule("2020-02-05", "import-infections", 5)?;
    sim.schedule("2020-02-20", "import-infections", 20)?;
    sim.schedule("2020-03-01", "test-only-severe-symptoms", 0)?;
    sim.schedule("2020-03-10", "test-with-contact-tracing", 0)?;
    sim.schedule("2020-03-15", "limit-mass-gatherings", 10)?;
    sim.schedule("2020-03-20", "limit-mobility", 40)?;
    sim.schedule("2020-04-15", "build-new-icu-units", 20)?;

    println!(
        "{:<8} {:>9} {:>9} {:>7} {:>7} {:>7} {:>6}",
        "day", "infected", "total", "hosp", "icu", "dead", "r"
    );
    println!("{}", "-".repeat(58));

    let started = Instant::now();
    sim.run_days(SIM_DAYS, &mut WeeklyReport)?;
    let elapsed = started.elapsed();

    let state = sim.model_state();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Attack rate: {:.1} %  |  Deaths: {}  |  Final R: {:.2}",
        100.0 * state.total_all_infected() as f64
            / AGE_COUNTS.iter().map(|&(_, n)| n as u64).sum::<u64>() as f64,
        state.total_dead(),
        state.r,
    );

    Ok(())
}

//! The per-day model snapshot handed to external drivers.

use epi_core::Day;

/// Read-only snapshot of the simulation at the end of a day.
///
/// Per-age vectors are indexed by age and share one length
/// (`Population::age_buckets`).  `r` is the empirical reproduction number:
/// total secondary infections from agents whose infectious period has ended,
/// divided by the number of such agents — reported as 0 until more than 5
/// of them exist.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelState {
    pub day: Day,

    pub susceptible: Vec<u32>,
    pub infected: Vec<u32>,
    pub all_infected: Vec<u32>,
    pub detected: Vec<u32>,
    pub all_detected: Vec<u32>,
    pub recovered: Vec<u32>,
    pub hospitalized: Vec<u32>,
    pub in_icu: Vec<u32>,
    pub dead: Vec<u32>,

    pub available_hospital_beds: u32,
    pub available_icu_units: u32,
    pub exposed_per_day: u64,
    pub tests_run_per_day: u32,
    pub r: f32,
}

impl ModelState {
    /// Total currently infected across all ages.
    pub fn total_infected(&self) -> u64 {
        self.infected.iter().map(|&n| n as u64).sum()
    }

    /// Total cumulative infections across all ages.
    pub fn total_all_infected(&self) -> u64 {
        self.all_infected.iter().map(|&n| n as u64).sum()
    }

    /// Total deaths across all ages.
    pub fn total_dead(&self) -> u64 {
        self.dead.iter().map(|&n| n as u64).sum()
    }
}

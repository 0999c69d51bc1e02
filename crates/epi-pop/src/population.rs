//! Per-age counters, mobility modifiers, and contact sampling.

use epi_core::{AgentRng, ClassedValues, EpiError, EpiResult};
use rand_distr::LogNormal;

/// σ of the multiplicative day-to-day noise on contact counts.
const CONTACT_NOISE_SIGMA: f32 = 0.5;

/// The age-structured population.
///
/// All counter vectors have identical length (`max_age + 1`); the age is the
/// index.  The conservation invariant — for every age,
/// `susceptible + infected + recovered + dead` equals the initial count —
/// holds across ticks because every mutation below moves an agent between
/// exactly those buckets (`infected` covers all four infectious states;
/// `detected`, `hospitalized` and `in_icu` are sub-counts of it).
pub struct Population {
    initial: Vec<u32>,

    pub susceptible: Vec<u32>,
    pub infected: Vec<u32>,
    pub detected: Vec<u32>,
    pub recovered: Vec<u32>,
    pub hospitalized: Vec<u32>,
    pub in_icu: Vec<u32>,
    pub dead: Vec<u32>,
    /// Cumulative infections per age; monotone non-decreasing.
    pub all_infected: Vec<u32>,
    /// Cumulative detections per age; monotone non-decreasing.
    pub all_detected: Vec<u32>,

    /// Population-wide mobility multiplier; 1.0 = unrestricted.
    pub mobility_factor: f32,
    /// Upper bound on any single agent's daily contacts; 0 disables.
    pub limit_mass_gatherings: u32,

    avg_contacts: ClassedValues,
    contact_noise: LogNormal<f32>,
}

impl Population {
    /// Build from `(age, count)` pairs and an average-contacts-by-age curve.
    pub fn new(age_counts: &[(u8, u32)], avg_contacts: Vec<(i32, f32)>) -> EpiResult<Self> {
        if age_counts.iter().all(|&(_, n)| n == 0) {
            return Err(EpiError::Config("population is empty".into()));
        }
        if avg_contacts.is_empty() {
            return Err(EpiError::Config("avg_contacts_per_day table is empty".into()));
        }
        let max_age = age_counts.iter().map(|&(age, _)| age).max().unwrap_or(0);
        let mut initial = vec![0u32; max_age as usize + 1];
        for &(age, count) in age_counts {
            initial[age as usize] += count;
        }
        let ages = initial.len();
        let contact_noise = LogNormal::new(0.0, CONTACT_NOISE_SIGMA)
            .map_err(|e| EpiError::Config(format!("contact noise distribution: {e}")))?;
        Ok(Self {
            susceptible: initial.clone(),
            infected: vec![0; ages],
            detected: vec![0; ages],
            recovered: vec![0; ages],
            hospitalized: vec![0; ages],
            in_icu: vec![0; ages],
            dead: vec![0; ages],
            all_infected: vec![0; ages],
            all_detected: vec![0; ages],
            initial,
            mobility_factor: 1.0,
            limit_mass_gatherings: 0,
            avg_contacts: ClassedValues::new(avg_contacts),
            contact_noise,
        })
    }

    /// Number of distinct age buckets (vector length of every counter).
    #[inline]
    pub fn age_buckets(&self) -> usize {
        self.initial.len()
    }

    /// Initial (and therefore constant) total population size.
    pub fn total_people(&self) -> u32 {
        self.initial.iter().sum()
    }

    /// Initial count for one age bucket.
    #[inline]
    pub fn initial_count(&self, age: u8) -> u32 {
        self.initial[age as usize]
    }

    /// Current total of never-infected agents.
    pub fn total_susceptible(&self) -> u32 {
        self.susceptible.iter().sum()
    }

    /// Per-agent ages in store order: grouped by ascending age, `initial`
    /// copies of each.  The person store is built from this.
    pub fn agent_ages(&self) -> Vec<u8> {
        let mut ages = Vec::with_capacity(self.total_people() as usize);
        for (age, &count) in self.initial.iter().enumerate() {
            for _ in 0..count {
                ages.push(age as u8);
            }
        }
        ages
    }

    // ── Contact sampling ──────────────────────────────────────────────────

    /// Sample today's contact count for an agent of the given age.
    ///
    /// `f = factor · mobility · noise · avg_contacts(age)`, then
    /// `floor(f) − 1` saturated at zero, clamped to the mass-gathering limit
    /// (when set) and to `limit`.
    pub fn contacts_per_day(&self, age: u8, rng: &mut AgentRng, factor: f32, limit: u32) -> u32 {
        let noise: f32 = rng.sample(&self.contact_noise);
        let f = factor * self.mobility_factor * noise * self.avg_contacts.greatest_le(age as i32);
        let mut contacts = (f.floor() as i64 - 1).max(0) as u32;
        if self.limit_mass_gatherings > 0 {
            contacts = contacts.min(self.limit_mass_gatherings);
        }
        contacts.min(limit)
    }

    // ── Counter mutation ──────────────────────────────────────────────────
    //
    // Called only from the sequential apply phase (or healthcare's
    // single-threaded queue processing); see the tick-loop contract.

    pub fn infect(&mut self, age: u8) {
        let a = age as usize;
        self.susceptible[a] -= 1;
        self.infected[a] += 1;
        self.all_infected[a] += 1;
    }

    pub fn detect(&mut self, age: u8) {
        let a = age as usize;
        self.detected[a] += 1;
        self.all_detected[a] += 1;
    }

    /// A detected case left the infected pool (recovered or died).
    pub fn clear_detected(&mut self, age: u8) {
        self.detected[age as usize] -= 1;
    }

    pub fn hospitalize(&mut self, age: u8) {
        self.hospitalized[age as usize] += 1;
    }

    pub fn transfer_to_icu(&mut self, age: u8) {
        self.in_icu[age as usize] += 1;
    }

    pub fn release_from_hospital(&mut self, age: u8) {
        self.hospitalized[age as usize] -= 1;
    }

    pub fn release_from_icu(&mut self, age: u8) {
        self.in_icu[age as usize] -= 1;
    }

    pub fn recover(&mut self, age: u8) {
        let a = age as usize;
        self.infected[a] -= 1;
        self.recovered[a] += 1;
    }

    pub fn die(&mut self, age: u8) {
        let a = age as usize;
        self.infected[a] -= 1;
        self.dead[a] += 1;
    }
}

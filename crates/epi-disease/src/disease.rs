//! The `Disease` parameter set and its sampling operations.

use epi_agent::Person;
use epi_core::{AgentRng, ClassedValues, EpiError, EpiResult, HealthState, Severity};
use epi_pop::Population;
use rand_distr::LogNormal;

// ── Course-duration constants ─────────────────────────────────────────────────

const INCUBATION_MU: f32 = 1.0;
const INCUBATION_SIGMA: f32 = 0.4;
const INCUBATION_SCALE: f32 = 1.5;
const INCUBATION_CAP: u32 = 14;

const ILLNESS_SIGMA: f32 = 0.6;
const ILLNESS_CAP: u32 = 40;

const HOSPITALIZATION_SIGMA: f32 = 0.5;
const HOSPITALIZATION_CAP: u32 = 50;

const ICU_SIGMA: f32 = 0.3;
const ICU_CAP: u32 = 50;

/// Relative transmission weight by day since symptom onset (negative days
/// are the tail of the incubation stage).  Days outside the table carry no
/// transmission risk.
const INFECTIOUSNESS_OVER_TIME: &[(i32, f32)] = &[
    (-2, 0.12),
    (-1, 0.29),
    (0, 0.27),
    (1, 0.07),
    (2, 0.05),
    (3, 0.04),
    (4, 0.03),
    (5, 0.02),
    (6, 0.02),
    (7, 0.01),
    (8, 0.01),
    (9, 0.01),
    (10, 0.01),
];

// ── Parameters ────────────────────────────────────────────────────────────────

/// Raw disease parameters, as supplied by the driver.
///
/// Validated and compiled into a [`Disease`] by [`Disease::new`].
#[derive(Clone, Debug)]
pub struct DiseaseParams {
    /// Per-contact transmission probability scale.
    pub p_infection: f32,
    /// Share of infections that never develop clinical symptoms.
    pub p_asymptomatic: f32,
    /// P(severe or worse) by age — `(age, probability)` pairs.
    pub p_severe: Vec<(i32, f32)>,
    /// P(critical | severe) by age — `(age, probability)` pairs.
    pub p_critical: Vec<(i32, f32)>,
    pub p_hospital_death: f32,
    pub p_icu_death: f32,
    pub p_hospital_death_no_beds: f32,
    pub p_icu_death_no_beds: f32,
    pub mean_illness_duration: f32,
    pub mean_hospitalization_duration: f32,
    pub mean_icu_duration: f32,
}

// ── Disease ───────────────────────────────────────────────────────────────────

/// Validated disease model: severity curves, duration distributions, the
/// infectiousness-over-time curve, and hospital-outcome probabilities.
pub struct Disease {
    pub p_infection: f32,
    pub p_asymptomatic: f32,
    p_severe: ClassedValues,
    p_critical: ClassedValues,
    p_hospital_death: f32,
    p_icu_death: f32,
    p_hospital_death_no_beds: f32,
    p_icu_death_no_beds: f32,
    mean_illness_duration: f32,
    mean_hospitalization_duration: f32,
    mean_icu_duration: f32,
    infectiousness: ClassedValues,
    incubation_noise: LogNormal<f32>,
    illness_noise: LogNormal<f32>,
    hospitalization_noise: LogNormal<f32>,
    icu_noise: LogNormal<f32>,
}

fn noise(mu: f32, sigma: f32, what: &str) -> EpiResult<LogNormal<f32>> {
    LogNormal::new(mu, sigma).map_err(|e| EpiError::Config(format!("{what} distribution: {e}")))
}

impl Disease {
    pub fn new(params: DiseaseParams) -> EpiResult<Self> {
        if params.p_severe.is_empty() || params.p_critical.is_empty() {
            return Err(EpiError::Config("severity curves must be non-empty".into()));
        }
        Ok(Self {
            p_infection: params.p_infection,
            p_asymptomatic: params.p_asymptomatic,
            p_severe: ClassedValues::new(params.p_severe),
            p_critical: ClassedValues::new(params.p_critical),
            p_hospital_death: params.p_hospital_death,
            p_icu_death: params.p_icu_death,
            p_hospital_death_no_beds: params.p_hospital_death_no_beds,
            p_icu_death_no_beds: params.p_icu_death_no_beds,
            mean_illness_duration: params.mean_illness_duration,
            mean_hospitalization_duration: params.mean_hospitalization_duration,
            mean_icu_duration: params.mean_icu_duration,
            infectiousness: INFECTIOUSNESS_OVER_TIME.iter().copied().collect(),
            incubation_noise: noise(INCUBATION_MU, INCUBATION_SIGMA, "incubation")?,
            illness_noise: noise(0.0, ILLNESS_SIGMA, "illness")?,
            hospitalization_noise: noise(0.0, HOSPITALIZATION_SIGMA, "hospitalization")?,
            icu_noise: noise(0.0, ICU_SIGMA, "icu")?,
        })
    }

    // ── Infectiousness ────────────────────────────────────────────────────

    /// Transmission probability for a source on the given day relative to
    /// symptom onset.
    #[inline]
    pub fn infectiousness_on(&self, day: i32) -> f32 {
        self.infectiousness.get(day, 0.0) * self.p_infection
    }

    /// Transmission probability of `source` today, derived from its stage:
    /// incubating agents count backwards to onset, ill agents forward from
    /// it, and every other state carries no risk.
    pub fn source_infectiousness(&self, source: &Person) -> f32 {
        let day = match source.state {
            HealthState::Incubating => -(source.days_left as i32),
            HealthState::Ill => source.day_of_illness as i32,
            _ => return 0.0,
        };
        self.infectiousness_on(day)
    }

    /// Roll whether an exposure by `source` transmits the disease.
    ///
    /// The roll depends only on the source's infectiousness; asymptomatic
    /// sources transmit at the full rate.
    #[inline]
    pub fn did_infect(&self, source: &Person, rng: &mut AgentRng) -> bool {
        rng.chance(self.source_infectiousness(source))
    }

    /// Number of people `person` exposes today.
    ///
    /// Detected agents are quarantined and expose nobody; symptomatic ill
    /// agents are assumed to stay mostly home (half mobility, at most 5
    /// contacts).
    pub fn people_exposed(&self, person: &Person, pop: &Population, rng: &mut AgentRng) -> u32 {
        if person.was_detected || self.source_infectiousness(person) == 0.0 {
            return 0;
        }
        match (person.state, person.severity) {
            (HealthState::Incubating, _) | (HealthState::Ill, Severity::Asymptomatic) => {
                pop.contacts_per_day(person.age, rng, 1.0, 100)
            }
            (HealthState::Ill, _) => pop.contacts_per_day(person.age, rng, 0.5, 5),
            _ => 0,
        }
    }

    // ── Outcomes ──────────────────────────────────────────────────────────

    /// Roll whether a hospitalized (or turned-away) agent dies.
    pub fn dies_in_hospital(&self, in_icu: bool, care_available: bool, rng: &mut AgentRng) -> bool {
        let p = match (in_icu, care_available) {
            (false, true) => self.p_hospital_death,
            (true, true) => self.p_icu_death,
            (false, false) => self.p_hospital_death_no_beds,
            (true, false) => self.p_icu_death_no_beds,
        };
        rng.chance(p)
    }

    /// Assign clinical severity for a freshly infected agent of `age`.
    ///
    /// A single uniform draw is tested against the age-dependent thresholds
    /// in order: critical ⊂ severe, then mild fills up to the asymptomatic
    /// share.
    pub fn symptom_severity(&self, age: u8, rng: &mut AgentRng) -> Severity {
        let u: f32 = rng.random();
        let sc = self.p_severe.greatest_le(age as i32);
        let cc = self.p_critical.greatest_le(age as i32);
        if u < sc * cc {
            Severity::Critical
        } else if u < sc {
            Severity::Severe
        } else if u < 1.0 - self.p_asymptomatic {
            Severity::Mild
        } else {
            Severity::Asymptomatic
        }
    }

    // ── Stage durations ───────────────────────────────────────────────────
    //
    // All stages last `1 + floor(noise · mean)` days, capped per stage.
    // A zero mean therefore still yields a 1-day stage.

    pub fn incubation_days(&self, rng: &mut AgentRng) -> u32 {
        course_days(rng.sample(&self.incubation_noise), INCUBATION_SCALE, INCUBATION_CAP)
    }

    pub fn illness_days(&self, rng: &mut AgentRng) -> u32 {
        course_days(rng.sample(&self.illness_noise), self.mean_illness_duration, ILLNESS_CAP)
    }

    pub fn hospitalization_days(&self, rng: &mut AgentRng) -> u32 {
        course_days(
            rng.sample(&self.hospitalization_noise),
            self.mean_hospitalization_duration,
            HOSPITALIZATION_CAP,
        )
    }

    pub fn icu_days(&self, rng: &mut AgentRng) -> u32 {
        course_days(rng.sample(&self.icu_noise), self.mean_icu_duration, ICU_CAP)
    }
}

#[inline]
fn course_days(noise: f32, mean: f32, cap: u32) -> u32 {
    (1 + (noise * mean).floor() as u32).min(cap)
}

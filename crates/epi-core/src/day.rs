//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Day` counter — one
//! tick is one simulated 24-hour step.  The mapping to calendar dates is
//! held in `SimCalendar`:
//!
//!   date = start_date + day
//!
//! Using an integer day as the canonical time unit means all schedule
//! arithmetic is exact and comparisons are O(1); calendar dates only appear
//! at the API boundary (intervention scheduling, reporting).

use std::fmt;

use chrono::NaiveDate;

use crate::{EpiError, EpiResult};

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulation day counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

// ── SimCalendar ───────────────────────────────────────────────────────────────

/// Converts between day counters and calendar dates.
///
/// `SimCalendar` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
pub struct SimCalendar {
    /// Calendar date of day 0.
    pub start_date: NaiveDate,
}

impl SimCalendar {
    /// Create a calendar starting at the given ISO date (`YYYY-MM-DD`).
    pub fn from_iso(start_date: &str) -> EpiResult<Self> {
        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|e| EpiError::Date(format!("'{start_date}': {e}")))?;
        Ok(Self { start_date })
    }

    /// Convert an ISO date to its day offset from the simulation start.
    ///
    /// Dates before the start date are errors — the schedule cannot reach
    /// into the past.
    pub fn day_of(&self, date: &str) -> EpiResult<Day> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| EpiError::Date(format!("'{date}': {e}")))?;
        let offset = date.signed_duration_since(self.start_date).num_days();
        if offset < 0 {
            return Err(EpiError::Date(format!(
                "{date} is before the simulation start {}",
                self.start_date
            )));
        }
        Ok(Day(offset as u32))
    }

    /// Calendar date corresponding to `day`.
    #[inline]
    pub fn date_of(&self, day: Day) -> NaiveDate {
        self.start_date + chrono::Duration::days(day.0 as i64)
    }
}

impl fmt::Display for SimCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start {}", self.start_date)
    }
}

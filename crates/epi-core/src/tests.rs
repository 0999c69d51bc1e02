//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod day {
    use crate::{Day, SimCalendar};

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(Day(15) - Day(10), 5u32);
    }

    #[test]
    fn calendar_day_of() {
        let cal = SimCalendar::from_iso("2020-02-01").unwrap();
        assert_eq!(cal.day_of("2020-02-01").unwrap(), Day(0));
        assert_eq!(cal.day_of("2020-02-29").unwrap(), Day(28)); // leap year
        assert_eq!(cal.day_of("2020-03-01").unwrap(), Day(29));
    }

    #[test]
    fn calendar_rejects_past_dates() {
        let cal = SimCalendar::from_iso("2020-02-01").unwrap();
        assert!(cal.day_of("2020-01-31").is_err());
    }

    #[test]
    fn calendar_rejects_garbage() {
        assert!(SimCalendar::from_iso("not-a-date").is_err());
        let cal = SimCalendar::from_iso("2020-02-01").unwrap();
        assert!(cal.day_of("02/01/2020").is_err());
    }

    #[test]
    fn date_of_roundtrip() {
        let cal = SimCalendar::from_iso("2020-02-01").unwrap();
        let date = cal.date_of(Day(29));
        assert_eq!(date.to_string(), "2020-03-01");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};
    use rand_distr::LogNormal;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn global_stream_differs_from_agent_zero() {
        let mut global = SimRng::new(1);
        let mut agent0 = AgentRng::new(1, AgentId(0));
        let a: u64 = global.random();
        let b: u64 = agent0.random();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_float_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v: f32 = rng.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn chance_extremes_and_clamping() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        // Out-of-range probabilities are clamped, not panicked on.
        assert!(rng.chance(2.5));
        assert!(!rng.chance(-1.0));
    }

    #[test]
    fn lognormal_draws_are_positive() {
        let dist = LogNormal::<f32>::new(0.0, 0.5).unwrap();
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..1000 {
            assert!(rng.sample(&dist) > 0.0);
        }
    }
}

#[cfg(test)]
mod classed {
    use crate::ClassedValues;

    fn table() -> ClassedValues {
        ClassedValues::new(vec![(10, 0.1), (30, 0.3), (60, 0.6)])
    }

    #[test]
    fn exact_get_with_default() {
        let t = table();
        assert_eq!(t.get(30, 9.9), 0.3);
        assert_eq!(t.get(31, 9.9), 9.9);
    }

    #[test]
    fn greatest_le_between_classes() {
        let t = table();
        assert_eq!(t.greatest_le(10), 0.1);
        assert_eq!(t.greatest_le(29), 0.1);
        assert_eq!(t.greatest_le(30), 0.3);
        assert_eq!(t.greatest_le(59), 0.3);
    }

    #[test]
    fn greatest_le_above_all_returns_last() {
        assert_eq!(table().greatest_le(100), 0.6);
    }

    #[test]
    fn greatest_le_below_smallest_returns_first() {
        // Queries below the smallest class fall back to index 0.
        assert_eq!(table().greatest_le(5), 0.1);
        assert_eq!(table().greatest_le(-3), 0.1);
    }

    #[test]
    fn negative_classes_supported() {
        let t = ClassedValues::new(vec![(-2, 0.12), (-1, 0.29), (0, 0.27)]);
        assert_eq!(t.get(-1, 0.0), 0.29);
        assert_eq!(t.get(-7, 0.0), 0.0);
        assert_eq!(t.greatest_le(-1), 0.29);
    }

    #[test]
    fn empty_table() {
        let t = ClassedValues::default();
        assert_eq!(t.get(1, 0.5), 0.5);
        assert_eq!(t.greatest_le(1), 0.0);
    }
}

#[cfg(test)]
mod health {
    use crate::{HealthState, Severity, TestingMode};

    #[test]
    fn infected_states() {
        assert!(HealthState::Incubating.is_infected());
        assert!(HealthState::Ill.is_infected());
        assert!(HealthState::Hospitalized.is_infected());
        assert!(HealthState::InIcu.is_infected());
        assert!(!HealthState::Susceptible.is_infected());
        assert!(!HealthState::Recovered.is_infected());
        assert!(!HealthState::Dead.is_infected());
    }

    #[test]
    fn immune_states() {
        assert!(HealthState::Recovered.is_immune());
        assert!(HealthState::Dead.is_immune());
        assert!(!HealthState::Ill.is_immune());
    }

    #[test]
    fn severity_predicates() {
        assert!(!Severity::Asymptomatic.symptomatic());
        assert!(Severity::Mild.symptomatic());
        assert!(!Severity::Mild.needs_hospital());
        assert!(Severity::Severe.needs_hospital());
        assert!(Severity::Critical.needs_hospital());
    }

    #[test]
    fn testing_mode_tracing() {
        assert!(TestingMode::AllWithSymptomsCt.traces_contacts());
        assert!(!TestingMode::AllWithSymptoms.traces_contacts());
        assert_eq!(TestingMode::default(), TestingMode::None);
    }
}

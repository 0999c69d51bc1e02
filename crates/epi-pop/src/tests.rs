//! Unit tests for population counters and contact sampling.

#[cfg(test)]
mod counters {
    use crate::Population;

    fn pop() -> Population {
        Population::new(&[(20, 50), (40, 30), (70, 20)], vec![(0, 10.0)]).unwrap()
    }

    #[test]
    fn initial_layout() {
        let p = pop();
        assert_eq!(p.age_buckets(), 71);
        assert_eq!(p.total_people(), 100);
        assert_eq!(p.susceptible[20], 50);
        assert_eq!(p.susceptible[40], 30);
        assert_eq!(p.susceptible[70], 20);
        assert_eq!(p.initial_count(40), 30);
    }

    #[test]
    fn empty_population_rejected() {
        assert!(Population::new(&[(20, 0)], vec![(0, 10.0)]).is_err());
        assert!(Population::new(&[(20, 5)], vec![]).is_err());
    }

    #[test]
    fn agent_ages_grouped_ascending() {
        let p = Population::new(&[(3, 2), (1, 1)], vec![(0, 1.0)]).unwrap();
        assert_eq!(p.agent_ages(), vec![1, 3, 3]);
    }

    #[test]
    fn infection_course_conserves_population() {
        let mut p = pop();
        let total = |p: &Population| {
            (0..p.age_buckets()).fold(0u32, |acc, a| {
                acc + p.susceptible[a] + p.infected[a] + p.recovered[a] + p.dead[a]
            })
        };
        let before = total(&p);

        p.infect(40);
        assert_eq!(total(&p), before);
        assert_eq!(p.infected[40], 1);
        assert_eq!(p.all_infected[40], 1);

        p.detect(40);
        p.hospitalize(40);
        assert_eq!(p.detected[40], 1);
        assert_eq!(p.hospitalized[40], 1);

        p.release_from_hospital(40);
        p.clear_detected(40);
        p.recover(40);
        assert_eq!(total(&p), before);
        assert_eq!(p.infected[40], 0);
        assert_eq!(p.recovered[40], 1);
        assert_eq!(p.detected[40], 0);
        // Cumulative counters never roll back.
        assert_eq!(p.all_infected[40], 1);
        assert_eq!(p.all_detected[40], 1);
    }

    #[test]
    fn death_moves_to_dead_bucket() {
        let mut p = pop();
        p.infect(70);
        p.die(70);
        assert_eq!(p.infected[70], 0);
        assert_eq!(p.dead[70], 1);
        assert_eq!(p.susceptible[70], 19);
    }

    #[test]
    fn icu_bookkeeping() {
        let mut p = pop();
        p.infect(70);
        p.transfer_to_icu(70);
        assert_eq!(p.in_icu[70], 1);
        p.release_from_icu(70);
        assert_eq!(p.in_icu[70], 0);
    }
}

#[cfg(test)]
mod contacts {
    use epi_core::{AgentId, AgentRng};

    use crate::Population;

    fn rng() -> AgentRng {
        AgentRng::new(42, AgentId(0))
    }

    #[test]
    fn zero_mobility_means_zero_contacts() {
        let mut p = Population::new(&[(30, 10)], vec![(0, 10.0)]).unwrap();
        p.mobility_factor = 0.0;
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(p.contacts_per_day(30, &mut r, 1.0, 100), 0);
        }
    }

    #[test]
    fn negative_raw_counts_saturate_at_zero() {
        // avg contacts 0.5 → floor(f) − 1 is negative for nearly every draw;
        // the sampler must saturate at zero rather than wrap.
        let p = Population::new(&[(30, 10)], vec![(0, 0.5)]).unwrap();
        let mut r = rng();
        let zeros = (0..1000)
            .filter(|_| p.contacts_per_day(30, &mut r, 1.0, 100) == 0)
            .count();
        assert!(zeros >= 900, "expected ~all-zero contact draws, got {zeros}/1000");
    }

    #[test]
    fn mass_gathering_limit_caps_contacts() {
        let mut p = Population::new(&[(30, 10)], vec![(0, 50.0)]).unwrap();
        p.limit_mass_gatherings = 3;
        let mut r = rng();
        for _ in 0..1000 {
            assert!(p.contacts_per_day(30, &mut r, 1.0, 100) <= 3);
        }
    }

    #[test]
    fn explicit_limit_caps_contacts() {
        let p = Population::new(&[(30, 10)], vec![(0, 50.0)]).unwrap();
        let mut r = rng();
        for _ in 0..1000 {
            assert!(p.contacts_per_day(30, &mut r, 1.0, 5) <= 5);
        }
    }

    #[test]
    fn factor_halves_expected_contacts() {
        let p = Population::new(&[(30, 10)], vec![(0, 20.0)]).unwrap();
        let mut r = rng();
        let n = 10_000;
        let full: u64 = (0..n)
            .map(|_| p.contacts_per_day(30, &mut r, 1.0, 1000) as u64)
            .sum();
        let half: u64 = (0..n)
            .map(|_| p.contacts_per_day(30, &mut r, 0.5, 1000) as u64)
            .sum();
        let ratio = half as f64 / full as f64;
        assert!(
            (0.40..0.60).contains(&ratio),
            "halved factor should roughly halve contact mass, ratio {ratio}"
        );
    }

    #[test]
    fn age_curve_selects_bucket() {
        let p = Population::new(
            &[(10, 5), (80, 5)],
            vec![(0, 100.0), (65, 0.5)],
        )
        .unwrap();
        let mut r = rng();
        // Ages ≥ 65 fall in the 0.5-contacts bucket → essentially no contacts.
        for _ in 0..200 {
            assert!(p.contacts_per_day(80, &mut r, 1.0, 100) <= 5);
        }
    }
}

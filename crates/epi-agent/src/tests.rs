//! Unit tests for agent storage.

#[cfg(test)]
mod person {
    use epi_core::{AgentId, HealthState, SimProblem};

    use crate::{Person, MAX_INFECTEES};

    #[test]
    fn susceptible_defaults() {
        let p = Person::susceptible(42);
        assert_eq!(p.age, 42);
        assert_eq!(p.state, HealthState::Susceptible);
        assert!(p.is_susceptible());
        assert!(!p.is_infected());
        assert!(!p.is_immune());
        assert_eq!(p.infector, AgentId::INVALID);
        assert!(p.infectees.is_none());
    }

    #[test]
    fn infectee_log_double_alloc_is_a_problem() {
        let mut p = Person::susceptible(30);
        p.open_infectee_log(AgentId(3)).unwrap();
        assert_eq!(
            p.open_infectee_log(AgentId(3)),
            Err(SimProblem::ContactLogAlreadyAllocated { agent: AgentId(3) })
        );
    }

    #[test]
    fn record_without_log_counts_only() {
        let mut p = Person::susceptible(30);
        p.record_infectee(AgentId(0), AgentId(1)).unwrap();
        p.record_infectee(AgentId(0), AgentId(2)).unwrap();
        assert_eq!(p.people_infected, 2);
        assert!(p.infectees.is_none());
    }

    #[test]
    fn record_with_log_appends() {
        let mut p = Person::susceptible(30);
        p.open_infectee_log(AgentId(0)).unwrap();
        p.record_infectee(AgentId(0), AgentId(5)).unwrap();
        assert_eq!(p.infectees.as_deref(), Some(&[AgentId(5)][..]));
        assert_eq!(p.people_infected, 1);
    }

    #[test]
    fn log_overflow_is_a_problem() {
        let mut p = Person::susceptible(30);
        p.open_infectee_log(AgentId(9)).unwrap();
        for i in 0..MAX_INFECTEES as u32 {
            p.record_infectee(AgentId(9), AgentId(i)).unwrap();
        }
        assert_eq!(
            p.record_infectee(AgentId(9), AgentId(999)),
            Err(SimProblem::TooManyInfectees { agent: AgentId(9) })
        );
    }

    #[test]
    fn drop_log_frees_it() {
        let mut p = Person::susceptible(30);
        p.open_infectee_log(AgentId(0)).unwrap();
        p.drop_infectee_log();
        assert!(p.infectees.is_none());
    }
}

#[cfg(test)]
mod store {
    use epi_core::AgentId;

    use crate::{AgentRngs, PersonStore};

    #[test]
    fn from_ages_assigns_indices() {
        let store = PersonStore::from_ages(&[10, 20, 30]);
        assert_eq!(store.len(), 3);
        assert_eq!(store[AgentId(1)].age, 20);
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut store = PersonStore::from_ages(&[10, 20]);
        store[AgentId(0)].people_infected = 7;
        assert_eq!(store[AgentId(0)].people_infected, 7);
    }

    #[test]
    fn rngs_match_agent_count() {
        let rngs = AgentRngs::new(5, 42);
        assert_eq!(rngs.len(), 5);
        assert!(!rngs.is_empty());
    }

    #[test]
    fn rng_streams_are_stable_per_agent() {
        let mut a = AgentRngs::new(3, 42);
        let mut b = AgentRngs::new(3, 42);
        let x: u64 = a.get_mut(AgentId(2)).random();
        let y: u64 = b.get_mut(AgentId(2)).random();
        assert_eq!(x, y);
    }
}

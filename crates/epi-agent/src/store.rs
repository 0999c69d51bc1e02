//! Core agent storage: `PersonStore` (agent records) and `AgentRngs`
//! (per-agent RNG streams).

use std::ops::{Index, IndexMut};

use epi_core::{AgentId, AgentRng};

use crate::Person;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`PersonStore`] to
/// enable simultaneous `&mut AgentRngs` + `&PersonStore` borrows in the
/// exposure-planning phase.
///
/// `AgentRngs` is `Send` but per-agent RNG state must never be shared
/// between threads; a parallel planning pass hands each worker exclusive
/// `&mut` access to disjoint elements via `par_iter_mut()`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PersonStore ───────────────────────────────────────────────────────────────

/// All agent records, indexed by `AgentId`.
///
/// Agents are created once at simulation construction (all susceptible,
/// grouped by ascending age) and live for the whole run; the `AgentId` value
/// is the index into `people`.
pub struct PersonStore {
    pub people: Vec<Person>,
}

impl PersonStore {
    /// Build a store from per-agent ages.
    pub fn from_ages(ages: &[u8]) -> Self {
        let people = ages.iter().map(|&age| Person::susceptible(age)).collect();
        Self { people }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.people.len() as u32).map(AgentId)
    }
}

impl Index<AgentId> for PersonStore {
    type Output = Person;
    #[inline]
    fn index(&self, agent: AgentId) -> &Person {
        &self.people[agent.index()]
    }
}

impl IndexMut<AgentId> for PersonStore {
    #[inline]
    fn index_mut(&mut self, agent: AgentId) -> &mut Person {
        &mut self.people[agent.index()]
    }
}

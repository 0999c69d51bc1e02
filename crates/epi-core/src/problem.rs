//! Fatal in-tick invariant violations.
//!
//! Problems raised while agents are being advanced are recorded rather than
//! thrown; the driver finishes the tick, then surfaces the first recorded
//! problem together with the day number and runs no further ticks.  The
//! exception is [`SimProblem::NotQueued`], which indicates testing-queue
//! corruption and is fatal at the point of discovery.

use thiserror::Error;

use crate::AgentId;

/// A condition that invalidates the whole simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimProblem {
    #[error("agent {agent} exceeded the infectee log capacity")]
    TooManyInfectees { agent: AgentId },

    #[error("agent {agent} already has an infectee log")]
    ContactLogAlreadyAllocated { agent: AgentId },

    #[error("agent {agent} was dequeued for testing but never marked queued")]
    NotQueued { agent: AgentId },

    #[error("hospital capacity accounting failed: {0}")]
    HospitalAccounting(&'static str),
}

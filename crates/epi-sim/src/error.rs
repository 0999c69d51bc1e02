use epi_core::{Day, EpiError, SimProblem};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("unknown intervention '{0}'")]
    UnknownIntervention(String),

    #[error(transparent)]
    Core(#[from] EpiError),

    #[error("simulation failed on {day}: {problem}")]
    Problem { day: Day, problem: SimProblem },
}

pub type SimResult<T> = Result<T, SimError>;

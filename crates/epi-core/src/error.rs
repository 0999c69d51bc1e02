//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EpiError` via `From` impls, or keep them separate and wrap `EpiError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid date: {0}")]
    Date(String),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;

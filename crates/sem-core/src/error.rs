//! Framework error type.
//!
//! Sub-crates may define their own error enums and wrap `SemanticError` as one
//! variant (see `sem-host`'s `HostError`), or return it directly.  Nothing in
//! the framework catches or retries these: every error propagates to the
//! simulation loop that made the call.

use thiserror::Error;

use crate::EnvId;

/// The top-level error type for `sem-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SemanticError {
    /// A configured robot or object name does not resolve in the environment.
    #[error("{kind} '{name}' not found in environment")]
    InvalidReference {
        kind: &'static str,
        name: String,
    },

    /// Two per-instance arrays disagree in batch size.
    #[error("{what} has length {got}, expected {expected}")]
    ShapeMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("{index} is out of range for {num_envs} simulation instances")]
    EnvIndexOutOfRange {
        index:    EnvId,
        num_envs: usize,
    },

    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Failure reported by the simulator binding itself.
    #[error("simulator error: {0}")]
    Backend(String),
}

impl SemanticError {
    /// `Ok` when `got == expected`, otherwise a `ShapeMismatch` naming `what`.
    #[inline]
    pub fn check_shape(what: &'static str, expected: usize, got: usize) -> SemanticResult<()> {
        if got == expected {
            Ok(())
        } else {
            Err(Self::ShapeMismatch { what, expected, got })
        }
    }
}

/// Shorthand result type for all `sem-*` crates.
pub type SemanticResult<T> = Result<T, SemanticError>;

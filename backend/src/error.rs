//! Error types shared by the samplers, the universe and the registry.

use thiserror::Error;

/// Errors reported synchronously to the caller of a public operation.
///
/// Validation always runs before any mutation or RNG draw, so a call that
/// returns an error has left the grid and the RNG stream untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Bad count, bad dimensions, length mismatch, bad distribution parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation on a destroyed or unknown universe
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),
}

impl SimulationError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        SimulationError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_handle(msg: impl Into<String>) -> Self {
        SimulationError::InvalidHandle(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

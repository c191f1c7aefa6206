//! Error types for qsim-qaoa

use qsim_core::QuantumError;
use thiserror::Error;

/// Result alias for estimation and search
pub type QaoaResult<T> = Result<T, QaoaError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QaoaError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    #[error("Shot count must be at least 1")]
    ZeroShots,

    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

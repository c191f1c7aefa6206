//! Error types for qsim-core

use thiserror::Error;

/// Result alias for register and gate operations
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Errors raised by register construction, gate application and ket parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Target qubit must be specified for a {num_qubits}-qubit register")]
    MissingTarget { num_qubits: usize },

    #[error("Target qubit {target} out of range for a {num_qubits}-qubit register")]
    TargetOutOfRange { target: usize, num_qubits: usize },

    #[error("Invalid qubit count {0}: must be between 1 and {max}", max = crate::MAX_QUBITS)]
    InvalidQubitCount(usize),

    #[error("Amplitude at index {index} is not finite")]
    NonFiniteAmplitude { index: usize },

    #[error("Basis index {index} out of range for a {num_qubits}-qubit register")]
    BasisOutOfRange { index: usize, num_qubits: usize },

    #[error("Invalid ket: {0:?}")]
    InvalidKet(String),

    #[error("Matrix is not unitary")]
    NonUnitary,

    #[error("Matrix does not match gate {0}")]
    KindMismatch(String),

    #[error("Qubit count mismatch: circuit expects {expected}, register has {actual}")]
    QubitCountMismatch { expected: usize, actual: usize },
}

//! Error types for basis-state encoding

use thiserror::Error;

/// Errors that can occur when encoding a basis state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Basis index outside the register's state space
    #[error("Invalid basis index {index} for {num_qubits}-qubit register (dimension {dimension})")]
    InvalidIndex {
        index: u64,
        num_qubits: usize,
        dimension: u64,
    },

    /// Register size too large for the state-space dimension to be indexed
    #[error("Register size {num_qubits} exceeds maximum of {max} qubits")]
    SizeOverflow { num_qubits: usize, max: usize },
}

/// Result type for basis-state encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;

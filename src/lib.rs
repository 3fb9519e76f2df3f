//! One-hot computational-basis vectors for n-qubit register states
//!
//! A register of `n` qubits has `2^n` computational basis states. This crate
//! converts a basis-state index into its dense one-hot representation: a
//! freshly allocated vector with a single one at the index and zero
//! everywhere else.
//!
//! The element type is generic over [`num_traits::Zero`] and
//! [`num_traits::One`], so the same operation produces integer indicator
//! vectors as well as floating-point or complex amplitude vectors.
//!
//! # Example
//!
//! ```
//! use basis_state::one_hot;
//!
//! // |11⟩ in a 2-qubit register
//! let phi: Vec<u8> = one_hot(3, 2).unwrap();
//! assert_eq!(phi, vec![0, 0, 0, 1]);
//! ```
//!
//! Out-of-range indices are rejected with a typed error rather than a panic:
//!
//! ```
//! use basis_state::{one_hot, EncodeError};
//!
//! let err = one_hot::<u8>(4, 2).unwrap_err();
//! assert!(matches!(err, EncodeError::InvalidIndex { .. }));
//! ```

pub mod error;
pub mod one_hot;

pub use error::{EncodeError, Result};
pub use one_hot::{dimension, one_hot, MAX_QUBITS};

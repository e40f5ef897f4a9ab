// src/core/error.rs

//! Error handling logic

use std::fmt;

/// Error types for circuit construction and execution.
///
/// Construction-time contract violations (the first four variants) are
/// raised before any operation is appended and before any backend
/// submission; execution failures propagate unchanged to the scenario
/// caller, without retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrelayError {
    /// An operation is inconsistent with the circuit it targets, e.g. a
    /// gate naming the same qubit twice, a second measurement into an
    /// already-written classical bit, or a zero-shot execution request.
    InvalidOperation {
        /// What was attempted and why it is rejected.
        message: String,
    },

    /// An operation references a handle the circuit never declared.
    ReferenceViolation {
        /// Which handle reference failed.
        message: String,
    },

    /// A register label was declared twice within one circuit.
    DuplicateRegister {
        /// The colliding label.
        label: String,
    },

    /// The two qubit groups of an equality check have different lengths.
    GroupLengthMismatch {
        /// Length of the first group.
        left: usize,
        /// Length of the second group.
        right: usize,
    },

    /// The execution backend failed while running a circuit.
    SimulationError {
        /// Backend failure message.
        message: String,
    },

    /// A frequency-table reduction addressed a bit position outside the
    /// outcome strings.
    BitIndexOutOfRange {
        /// The requested bit position.
        position: usize,
        /// The width of the outcome strings.
        width: usize,
    },
}

impl fmt::Display for QrelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrelayError::InvalidOperation { message } => {
                write!(f, "Invalid Operation: {}", message)
            }
            QrelayError::ReferenceViolation { message } => {
                write!(f, "Reference Violation: {}", message)
            }
            QrelayError::DuplicateRegister { label } => {
                write!(f, "Duplicate Register: label '{}' already declared", label)
            }
            QrelayError::GroupLengthMismatch { left, right } => {
                write!(f, "Group Length Mismatch: {} vs {} qubits", left, right)
            }
            QrelayError::SimulationError { message } => {
                write!(f, "Simulation Error: {}", message)
            }
            QrelayError::BitIndexOutOfRange { position, width } => {
                write!(
                    f,
                    "Bit Index Out Of Range: position {} in {}-bit outcomes",
                    position, width
                )
            }
        }
    }
}

impl std::error::Error for QrelayError {}

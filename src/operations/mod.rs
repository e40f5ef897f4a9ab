// src/operations/mod.rs

//! Defines the operations a circuit description is built from: gate
//! applications, measurements, classically-conditioned gates, and barriers.
//!
//! The set is deliberately closed. Teleportation and the swap test need
//! exactly Hadamard, the two Pauli corrections, CNOT for entangling, CSWAP
//! for overlap estimation, and destructive measurement; everything else in
//! this crate is composed from these.

use crate::core::{ClbitId, QubitId};

/// A single-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Basis-change between computational and superposition bases;
    /// self-inverse.
    Hadamard,
    /// Bit flip. Also the classically-conditioned teleportation correction
    /// for the sender-half measurement.
    PauliX,
    /// Phase flip. The conditioned correction for the source-qubit
    /// measurement.
    PauliZ,
}

impl Gate {
    /// Symbol used by the circuit renderer.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Gate::Hadamard => "H",
            Gate::PauliX => "X",
            Gate::PauliZ => "Z",
        }
    }
}

/// One entry in a circuit's ordered operation sequence.
///
/// A conditioned gate is a first-class operation, not construction-time
/// control flow: the condition is evaluated against the classical bit's
/// value on every shot of a probabilistic execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Apply a single-qubit gate.
    Single {
        /// The qubit the gate acts on.
        target: QubitId,
        /// Which gate to apply.
        gate: Gate,
    },

    /// Controlled-NOT: flip `target` when `control` is 1.
    ControlledNot {
        /// The control qubit.
        control: QubitId,
        /// The qubit flipped when the control is set.
        target: QubitId,
    },

    /// Controlled swap (Fredkin): exchange `first` and `second` when
    /// `control` is 1. The swap-test primitive.
    ControlledSwap {
        /// The control qubit.
        control: QubitId,
        /// First qubit of the exchanged pair.
        first: QubitId,
        /// Second qubit of the exchanged pair.
        second: QubitId,
    },

    /// Destructively measure `qubit` into `clbit`. The qubit's
    /// superposition information is consumed; the clbit is written exactly
    /// once and readable by later conditioned operations.
    Measure {
        /// The qubit to measure.
        qubit: QubitId,
        /// The classical bit receiving the 0/1 outcome.
        clbit: ClbitId,
    },

    /// Apply `gate` to `target` only when `control` holds `value`.
    /// Evaluated per shot by the execution backend.
    Conditioned {
        /// The classical bit gating the operation. Must have been written
        /// by an earlier measurement.
        control: ClbitId,
        /// The bit value required for the gate to fire.
        value: bool,
        /// The qubit the gate acts on when it fires.
        target: QubitId,
        /// Which gate to apply.
        gate: Gate,
    },

    /// Scheduling hint separating independent sub-protocols. No semantic
    /// effect on outcomes; the engine skips it.
    Barrier,
}

impl Operation {
    /// All qubit handles this operation references.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Single { target, .. } => vec![*target],
            Operation::ControlledNot { control, target } => vec![*control, *target],
            Operation::ControlledSwap {
                control,
                first,
                second,
            } => vec![*control, *first, *second],
            Operation::Measure { qubit, .. } => vec![*qubit],
            Operation::Conditioned { target, .. } => vec![*target],
            Operation::Barrier => vec![],
        }
    }
}

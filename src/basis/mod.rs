// src/basis/mod.rs

//! Preparation of named basis states and the reversible basis transforms
//! the protocols are built from.
//!
//! Every preparation function assumes its target qubits start in the ground
//! state |0⟩, which is how the execution backend initialises each shot.
//! The transform pairs are mutually inverse: applying one then the other
//! returns the qubits to their original state. For the Bell pair this
//! depends on exact operation-order reversal: [`bell_to_comp`] undoes
//! [`comp_to_bell`] only because it replays the two self-inverse steps
//! backwards, and teleportation's decoding step relies on that.

use crate::circuits::Circuit;
use crate::core::{QrelayError, QubitId};

/// Logical label for a single-qubit basis state.
///
/// The two-qubit Bell variants are prepared through [`prepare_bell`], which
/// takes the variant's two defining bits directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Computational |0⟩.
    Zero,
    /// Computational |1⟩.
    One,
    /// Superposition |+⟩.
    Plus,
    /// Superposition |−⟩.
    Minus,
    /// The 50/50 classical mixture 0.5|0⟩⟨0| + 0.5|1⟩⟨1|.
    Mixed,
}

// --- Basis transforms ---

/// Computational → superposition basis change: |0⟩ → |+⟩, |1⟩ → |−⟩.
pub fn comp_to_superposition(circuit: &mut Circuit, qubit: QubitId) -> Result<(), QrelayError> {
    circuit.h(qubit)
}

/// Superposition → computational basis change: |+⟩ → |0⟩, |−⟩ → |1⟩.
/// The transform is its own inverse.
pub fn superposition_to_comp(circuit: &mut Circuit, qubit: QubitId) -> Result<(), QrelayError> {
    comp_to_superposition(circuit, qubit)
}

/// Computational → Bell basis change on a pair:
/// |00⟩ → |Φ+⟩, |01⟩ → |Ψ+⟩, |10⟩ → |Φ−⟩, |11⟩ → |Ψ−⟩.
pub fn comp_to_bell(
    circuit: &mut Circuit,
    control: QubitId,
    target: QubitId,
) -> Result<(), QrelayError> {
    circuit.h(control)?;
    circuit.cx(control, target)
}

/// Bell → computational basis change on a pair; exact reversal of
/// [`comp_to_bell`]'s operation order.
pub fn bell_to_comp(
    circuit: &mut Circuit,
    control: QubitId,
    target: QubitId,
) -> Result<(), QrelayError> {
    circuit.cx(control, target)?;
    circuit.h(control)
}

// --- Basis preparation ---

/// Prepares |0⟩ (when `is_zero`) or |1⟩ on a ground-state qubit.
pub fn prepare_computational(
    circuit: &mut Circuit,
    qubit: QubitId,
    is_zero: bool,
) -> Result<(), QrelayError> {
    if !is_zero {
        circuit.x(qubit)?;
    }
    Ok(())
}

/// Prepares |+⟩ (when `is_zero`) or |−⟩: computational preparation followed
/// by the computational → superposition transform.
pub fn prepare_superposition(
    circuit: &mut Circuit,
    qubit: QubitId,
    is_zero: bool,
) -> Result<(), QrelayError> {
    prepare_computational(circuit, qubit, is_zero)?;
    comp_to_superposition(circuit, qubit)
}

/// Prepares one of the four Bell variants on a ground-state pair:
/// computational preparation of each qubit to `(first_zero, second_zero)`
/// followed by the computational → Bell transform.
pub fn prepare_bell(
    circuit: &mut Circuit,
    first: QubitId,
    second: QubitId,
    first_zero: bool,
    second_zero: bool,
) -> Result<(), QrelayError> {
    prepare_computational(circuit, first, first_zero)?;
    prepare_computational(circuit, second, second_zero)?;
    comp_to_bell(circuit, first, second)
}

/// Prepares the 50/50 classical mixture on `qubit`.
///
/// Declares one fresh auxiliary qubit and one fresh classical bit, puts the
/// auxiliary into superposition, measures it, and flips `qubit` when the
/// outcome is 1. The qubit is then found in |0⟩ or |1⟩ with equal
/// probability and no coherence between the branches: a genuine mixture,
/// which the swap test can tell apart from |+⟩ even though both give 50/50
/// computational-measurement statistics.
///
/// Auxiliary labels are derived from the circuit's allocation counter, so
/// repeated invocations within one circuit never collide.
pub fn prepare_mixed(circuit: &mut Circuit, qubit: QubitId) -> Result<(), QrelayError> {
    let aux_label = format!("mix{}", circuit.num_qubits());
    let aux = circuit.add_qubit(aux_label)?;
    let flag_label = format!("mix{}_outcome", circuit.num_clbits());
    let flag = circuit.add_clbit(flag_label)?;

    circuit.h(aux)?;
    circuit.measure(aux, flag)?;
    circuit.x_if(flag, qubit)
}

/// Prepares a single qubit into the named basis state.
pub fn prepare(circuit: &mut Circuit, qubit: QubitId, basis: Basis) -> Result<(), QrelayError> {
    match basis {
        Basis::Zero => prepare_computational(circuit, qubit, true),
        Basis::One => prepare_computational(circuit, qubit, false),
        Basis::Plus => prepare_superposition(circuit, qubit, true),
        Basis::Minus => prepare_superposition(circuit, qubit, false),
        Basis::Mixed => prepare_mixed(circuit, qubit),
    }
}

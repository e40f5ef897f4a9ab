// src/swaptest/mod.rs

//! The swap-test equality check: a probabilistic comparison of two joint
//! states that never fully measures either.
//!
//! Across many repetitions, P(outcome 0) = 1/2 + 1/2·|⟨ψA|ψB⟩|². A
//! frequency near 1.0 means the two groups hold the same state up to
//! global phase; near 0.5 means orthogonal joint states. An exact 0.5 on
//! purportedly identical groups is a valid sampling outcome, not an
//! error; detecting it is the point of the protocol.

use crate::circuits::Circuit;
use crate::core::{ClbitId, QrelayError, QubitId};

/// The auxiliary registers one swap test allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTestHandles {
    /// The control qubit driving the paired swaps.
    pub aux: QubitId,
    /// Receives the auxiliary's measurement; the equality statistic.
    pub flag: ClbitId,
}

/// Allocates the auxiliary qubit and outcome bit for a swap test.
pub fn init_swap_test(circuit: &mut Circuit) -> Result<SwapTestHandles, QrelayError> {
    let aux = circuit.add_qubit("aux")?;
    let flag = circuit.add_clbit("aux_measurement")?;
    Ok(SwapTestHandles { aux, flag })
}

/// Appends the swap-test sequence comparing `group_a` against `group_b`,
/// pairing qubits positionally.
///
/// # Errors
/// [`QrelayError::GroupLengthMismatch`] when the groups differ in length:
/// a caller error, rejected before any operation is appended.
pub fn run_swap_test(
    circuit: &mut Circuit,
    group_a: &[QubitId],
    group_b: &[QubitId],
    handles: &SwapTestHandles,
) -> Result<(), QrelayError> {
    if group_a.len() != group_b.len() {
        return Err(QrelayError::GroupLengthMismatch {
            left: group_a.len(),
            right: group_b.len(),
        });
    }

    circuit.h(handles.aux)?;
    for (a, b) in group_a.iter().zip(group_b.iter()) {
        circuit.cswap(handles.aux, *a, *b)?;
    }
    circuit.h(handles.aux)?;

    circuit.barrier()?;

    circuit.measure(handles.aux, handles.flag)
}

/// Allocates the auxiliaries and runs the swap test in one call, returning
/// the handles so the caller can locate the equality bit.
pub fn check_equality(
    circuit: &mut Circuit,
    group_a: &[QubitId],
    group_b: &[QubitId],
) -> Result<SwapTestHandles, QrelayError> {
    if group_a.len() != group_b.len() {
        return Err(QrelayError::GroupLengthMismatch {
            left: group_a.len(),
            right: group_b.len(),
        });
    }
    let handles = init_swap_test(circuit)?;
    run_swap_test(circuit, group_a, group_b, &handles)?;
    Ok(handles)
}

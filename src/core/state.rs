// src/core/state.rs

use num_complex::Complex;

/// Amplitude vector over the computational basis of the qubits a circuit
/// declares, in declaration order.
///
/// Only the execution engine manipulates this; protocol construction never
/// sees amplitudes, and measurement is the only read a qubit handle
/// offers. The dimension is `2^n` for `n` qubits, with qubit 0 as the most
/// significant bit of a basis-state index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitudes.
    pub(crate) fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the execution engine.
    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of basis states represented.
    pub(crate) fn dim(&self) -> usize {
        self.amplitudes.len()
    }
}

// src/simulation/engine.rs

use crate::circuits::Circuit;
use crate::core::{QrelayError, StateVector};
use crate::operations::{Gate, Operation};
use num_complex::Complex;
use num_traits::Zero;
use rand::RngExt;
use rand::rngs::StdRng;

/// Negligible-probability cutoff for measurement branches.
const PROBABILITY_TOLERANCE: f64 = 1e-12;

/// Per-shot state-vector engine. (Internal visibility)
///
/// Holds the amplitude vector over the circuit's qubits and the classical
/// bit values written by measurements during the current shot. Qubit `i`
/// (declaration order) occupies bit position `n - 1 - i` of a basis-state
/// index, so the first declared qubit is the most significant bit.
pub(crate) struct ExecutionEngine {
    /// The amplitude vector; dimension 2^n.
    state: StateVector,
    /// Classical bit values for the current shot, indexed by clbit position.
    clbits: Vec<bool>,
    /// Number of qubits (n).
    num_qubits: usize,
}

impl ExecutionEngine {
    /// Sizes the engine for a circuit. The state starts at |0…0⟩.
    pub(crate) fn init(circuit: &Circuit) -> Result<Self, QrelayError> {
        let num_qubits = circuit.num_qubits();
        if num_qubits == 0 {
            return Err(QrelayError::SimulationError {
                message: "cannot execute a circuit with zero qubits".to_string(),
            });
        }
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| QrelayError::SimulationError {
                message: format!(
                    "{} qubits overflow the state vector dimension",
                    num_qubits
                ),
            })?;

        let mut initial = vec![Complex::zero(); dim];
        initial[0] = Complex::new(1.0, 0.0);
        Ok(Self {
            state: StateVector::new(initial),
            clbits: vec![false; circuit.num_clbits()],
            num_qubits,
        })
    }

    /// Runs one independent shot and returns the outcome string, one
    /// character per clbit in declaration order.
    pub(crate) fn run_shot(&mut self, circuit: &Circuit, rng: &mut StdRng) -> String {
        self.reset();

        for op in circuit.operations() {
            match op {
                Operation::Single { target, gate } => {
                    self.apply_single(target.index(), &gate_matrix(*gate));
                }
                Operation::ControlledNot { control, target } => {
                    self.apply_cnot(control.index(), target.index());
                }
                Operation::ControlledSwap {
                    control,
                    first,
                    second,
                } => {
                    self.apply_cswap(control.index(), first.index(), second.index());
                }
                Operation::Measure { qubit, clbit } => {
                    let outcome = self.measure(qubit.index(), rng);
                    self.clbits[clbit.position()] = outcome;
                }
                Operation::Conditioned {
                    control,
                    value,
                    target,
                    gate,
                } => {
                    // Evaluated against this shot's classical bit, not once
                    // at construction time.
                    if self.clbits[control.position()] == *value {
                        self.apply_single(target.index(), &gate_matrix(*gate));
                    }
                }
                Operation::Barrier => {}
            }
        }

        self.clbits
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }

    /// Returns the state to |0…0⟩ and clears the classical bits.
    fn reset(&mut self) {
        let vector = self.state.vector_mut();
        for amplitude in vector.iter_mut() {
            *amplitude = Complex::zero();
        }
        vector[0] = Complex::new(1.0, 0.0);
        self.clbits.fill(false);
    }

    /// Bit mask selecting `qubit_index`'s position within a basis index.
    fn mask(&self, qubit_index: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit_index)
    }

    /// Applies a 2x2 matrix to one qubit, pairing basis states that differ
    /// only at its bit position.
    fn apply_single(&mut self, target_index: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let mask = self.mask(target_index);
        let dim = self.state.dim();
        let vector = self.state.vector_mut();

        for i0 in 0..dim {
            if i0 & mask == 0 {
                let i1 = i0 | mask;
                let psi0 = vector[i0];
                let psi1 = vector[i1];
                vector[i0] = matrix[0][0] * psi0 + matrix[0][1] * psi1;
                vector[i1] = matrix[1][0] * psi0 + matrix[1][1] * psi1;
            }
        }
    }

    /// CNOT as a basis-state permutation: for every index with the control
    /// bit set, exchange the two amplitudes differing at the target bit.
    fn apply_cnot(&mut self, control_index: usize, target_index: usize) {
        let control_mask = self.mask(control_index);
        let target_mask = self.mask(target_index);
        let dim = self.state.dim();
        let vector = self.state.vector_mut();

        for idx in 0..dim {
            if idx & control_mask != 0 && idx & target_mask == 0 {
                vector.swap(idx, idx | target_mask);
            }
        }
    }

    /// Controlled swap as a permutation: where the control bit is set and
    /// the pair bits differ, exchange the amplitudes of the two indices
    /// with the pair bits transposed.
    fn apply_cswap(&mut self, control_index: usize, first_index: usize, second_index: usize) {
        let control_mask = self.mask(control_index);
        let first_mask = self.mask(first_index);
        let second_mask = self.mask(second_index);
        let dim = self.state.dim();
        let vector = self.state.vector_mut();

        for idx in 0..dim {
            if idx & control_mask != 0 && idx & first_mask != 0 && idx & second_mask == 0 {
                vector.swap(idx, idx ^ first_mask ^ second_mask);
            }
        }
    }

    /// Samples a computational-basis measurement of one qubit, collapses
    /// the state to the observed branch, and renormalises.
    fn measure(&mut self, target_index: usize, rng: &mut StdRng) -> bool {
        let mask = self.mask(target_index);
        let dim = self.state.dim();

        let p_one: f64 = {
            let vector = self.state.vector();
            (0..dim)
                .filter(|idx| idx & mask != 0)
                .map(|idx| vector[idx].norm_sqr())
                .sum()
        };

        // Negligible branches are never sampled: rounding noise in an
        // exactly-deterministic measurement must not collapse onto a
        // zero-amplitude branch.
        let outcome = if p_one < PROBABILITY_TOLERANCE {
            false
        } else if 1.0 - p_one < PROBABILITY_TOLERANCE {
            true
        } else {
            rng.random::<f64>() < p_one
        };

        let branch_probability = if outcome { p_one } else { 1.0 - p_one };
        let norm = branch_probability.sqrt();
        let vector = self.state.vector_mut();
        for idx in 0..dim {
            let bit_is_one = idx & mask != 0;
            if bit_is_one == outcome {
                vector[idx] /= norm;
            } else {
                vector[idx] = Complex::zero();
            }
        }

        outcome
    }
}

/// The 2x2 matrix for a single-qubit gate.
fn gate_matrix(gate: Gate) -> [[Complex<f64>; 2]; 2] {
    const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    match gate {
        Gate::Hadamard => [
            [
                Complex::new(FRAC_1_SQRT_2, 0.0),
                Complex::new(FRAC_1_SQRT_2, 0.0),
            ],
            [
                Complex::new(FRAC_1_SQRT_2, 0.0),
                Complex::new(-FRAC_1_SQRT_2, 0.0),
            ],
        ],
        Gate::PauliX => [
            [Complex::zero(), Complex::new(1.0, 0.0)],
            [Complex::new(1.0, 0.0), Complex::zero()],
        ],
        Gate::PauliZ => [
            [Complex::new(1.0, 0.0), Complex::zero()],
            [Complex::zero(), Complex::new(-1.0, 0.0)],
        ],
    }
}

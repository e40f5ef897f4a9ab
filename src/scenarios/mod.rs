// src/scenarios/mod.rs

//! Complete verification scenarios wiring basis preparation, teleportation,
//! and the swap test into one circuit description.
//!
//! Every builder takes a state-builder closure so the same scenario shape
//! can be driven with any named basis state: prepare the state, teleport
//! it, independently prepare the same state again, and swap-test the
//! teleported output against the fresh reference. Barriers separate the
//! independent sub-protocols for readability; they request scheduling
//! explicitly rather than relying on any backend default, and carry no
//! outcome semantics.

use crate::basis;
use crate::circuits::Circuit;
use crate::core::{ClbitId, QrelayError, QubitId};
use crate::simulation::{Counts, Simulator};
use crate::swaptest;
use crate::teleport;

/// A fully assembled scenario: the circuit description plus the classical
/// bits its observable result lives in.
///
/// The circuit is built once per scenario invocation, submitted once, and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Scenario {
    circuit: Circuit,
    focus: Vec<ClbitId>,
}

impl Scenario {
    /// The assembled circuit description.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The classical bits carrying the scenario's result, in result order.
    pub fn focus(&self) -> &[ClbitId] {
        &self.focus
    }

    /// Executes the scenario and reduces the frequency table to the focus
    /// bits, summing over every other register (the mixed-state and
    /// mid-protocol measurement bits).
    pub fn run(&self, simulator: &Simulator, shots: u64) -> Result<Counts, QrelayError> {
        let counts = simulator.execute(&self.circuit, shots)?;
        let positions: Vec<usize> = self.focus.iter().map(ClbitId::position).collect();
        counts.reduce_to_bits(&positions)
    }
}

/// Bare protocol demonstration: prepare a state on `phi`, teleport it, and
/// measure the receiver. The result is the receiver's raw distribution.
pub fn teleport_one_qubit<F>(prepare: F) -> Result<Scenario, QrelayError>
where
    F: Fn(&mut Circuit, QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();

    let phi = circuit.add_qubit("phi")?;
    prepare(&mut circuit, phi)?;

    let link = teleport::init_teleport(&mut circuit, "")?;
    circuit.barrier()?;
    let bob = teleport::run_teleport(&mut circuit, phi, &link)?;

    let result = circuit.add_clbit("result_measurement")?;
    circuit.barrier()?;
    circuit.measure(bob, result)?;

    Ok(Scenario {
        circuit,
        focus: vec![result],
    })
}

/// Teleports two independently prepared qubits over two fully independent
/// links and measures both receivers.
pub fn teleport_two_qubits<F>(prepare: F) -> Result<Scenario, QrelayError>
where
    F: Fn(&mut Circuit, QubitId, QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();

    let phi = circuit.add_qubit("phi")?;
    let rho = circuit.add_qubit("rho")?;
    prepare(&mut circuit, phi, rho)?;

    let link1 = teleport::init_teleport(&mut circuit, "1")?;
    let link2 = teleport::init_teleport(&mut circuit, "2")?;
    circuit.barrier()?;
    let bob1 = teleport::run_teleport(&mut circuit, phi, &link1)?;
    circuit.barrier()?;
    let bob2 = teleport::run_teleport(&mut circuit, rho, &link2)?;

    let result1 = circuit.add_clbit("result_measurement1")?;
    let result2 = circuit.add_clbit("result_measurement2")?;
    circuit.barrier()?;
    circuit.measure(bob1, result1)?;
    circuit.measure(bob2, result2)?;

    Ok(Scenario {
        circuit,
        focus: vec![result1, result2],
    })
}

/// Teleport-and-verify for one qubit: prepare `phi`, teleport it, prepare
/// the same state again on a fresh reference qubit, and swap-test the
/// teleported output against the reference. The result is the equality
/// bit's distribution.
pub fn teleport_and_check_equality<F>(prepare: F) -> Result<Scenario, QrelayError>
where
    F: Fn(&mut Circuit, QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();

    let phi = circuit.add_qubit("phi")?;
    prepare(&mut circuit, phi)?;

    let link = teleport::init_teleport(&mut circuit, "")?;
    let handles = swaptest::init_swap_test(&mut circuit)?;

    let expected_bob = circuit.add_qubit("expected_bob")?;
    prepare(&mut circuit, expected_bob)?;

    circuit.barrier()?;
    let bob = teleport::run_teleport(&mut circuit, phi, &link)?;
    circuit.barrier()?;

    swaptest::run_swap_test(&mut circuit, &[bob], &[expected_bob], &handles)?;

    Ok(Scenario {
        circuit,
        focus: vec![handles.flag],
    })
}

/// Partial-entanglement verification: prepare a joint state on
/// `(phi, rho)`, teleport only `phi`, and swap-test the pair
/// `[teleported, rho]` against a freshly reconstructed reference pair.
/// The untouched partner enters the equality group directly, paired
/// positionally with its reference qubit.
pub fn teleport_one_of_two_and_check_equality<F>(prepare: F) -> Result<Scenario, QrelayError>
where
    F: Fn(&mut Circuit, QubitId, QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();

    let phi = circuit.add_qubit("phi")?;
    let rho = circuit.add_qubit("rho")?;
    prepare(&mut circuit, phi, rho)?;

    let link = teleport::init_teleport(&mut circuit, "")?;
    let handles = swaptest::init_swap_test(&mut circuit)?;

    let expected_bob1 = circuit.add_qubit("expected_bob1")?;
    let expected_bob2 = circuit.add_qubit("expected_bob2")?;
    prepare(&mut circuit, expected_bob1, expected_bob2)?;

    circuit.barrier()?;
    let bob = teleport::run_teleport(&mut circuit, phi, &link)?;
    circuit.barrier()?;

    swaptest::run_swap_test(
        &mut circuit,
        &[bob, rho],
        &[expected_bob1, expected_bob2],
        &handles,
    )?;

    Ok(Scenario {
        circuit,
        focus: vec![handles.flag],
    })
}

/// Teleports both halves of a two-qubit state over independent links and
/// swap-tests the receiver pair against a reconstructed reference pair.
pub fn teleport_two_and_check_equality<F>(prepare: F) -> Result<Scenario, QrelayError>
where
    F: Fn(&mut Circuit, QubitId, QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();

    let phi = circuit.add_qubit("phi")?;
    let rho = circuit.add_qubit("rho")?;
    prepare(&mut circuit, phi, rho)?;

    let link1 = teleport::init_teleport(&mut circuit, "1")?;
    let link2 = teleport::init_teleport(&mut circuit, "2")?;
    let handles = swaptest::init_swap_test(&mut circuit)?;

    let expected_bob1 = circuit.add_qubit("expected_bob1")?;
    let expected_bob2 = circuit.add_qubit("expected_bob2")?;
    prepare(&mut circuit, expected_bob1, expected_bob2)?;

    circuit.barrier()?;
    let bob1 = teleport::run_teleport(&mut circuit, phi, &link1)?;
    circuit.barrier()?;
    let bob2 = teleport::run_teleport(&mut circuit, rho, &link2)?;
    circuit.barrier()?;

    swaptest::run_swap_test(
        &mut circuit,
        &[bob1, bob2],
        &[expected_bob1, expected_bob2],
        &handles,
    )?;

    Ok(Scenario {
        circuit,
        focus: vec![handles.flag],
    })
}

// Convenience re-export so scenario callers can name basis builders
// without importing the module separately.
pub use crate::basis::Basis;

/// A state-builder closure for a single-qubit named basis state, for use
/// with [`teleport_one_qubit`] and [`teleport_and_check_equality`].
pub fn single_qubit_builder(
    state: Basis,
) -> impl Fn(&mut Circuit, QubitId) -> Result<(), QrelayError> {
    move |circuit, qubit| basis::prepare(circuit, qubit, state)
}

/// A state-builder closure preparing a Bell variant on a qubit pair, for
/// use with the two-qubit scenarios.
pub fn bell_pair_builder(
    first_zero: bool,
    second_zero: bool,
) -> impl Fn(&mut Circuit, QubitId, QubitId) -> Result<(), QrelayError> {
    move |circuit, first, second| {
        basis::prepare_bell(circuit, first, second, first_zero, second_zero)
    }
}

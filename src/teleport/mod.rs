// src/teleport/mod.rs

//! The teleportation protocol: transfer an unknown single-qubit state onto
//! a freshly allocated receiver qubit through a shared entangled pair, two
//! destructive measurements, and classically-conditioned corrections.
//!
//! Four strictly ordered stages per teleported qubit:
//! 1. entangle: allocate a (sender-half, receiver-half) pair and apply the
//!    computational → Bell transform;
//! 2. interact: apply the Bell → computational transform across
//!    (source, sender-half), rotating the joint system into a basis where
//!    computational measurement reveals the needed correction;
//! 3. measure: source and sender-half into their two classical bits,
//!    consuming both qubits' superposition information;
//! 4. correct: on the receiver, a bit flip when the sender-half outcome is
//!    1, then a phase flip when the source outcome is 1. The two
//!    corrections are independent; each must follow its own measurement.
//!
//! Teleporting two qubits is two independent invocations sharing no
//! handles, separated by a barrier for readability only.

use crate::basis;
use crate::circuits::Circuit;
use crate::core::{ClbitId, QrelayError, QubitId};

/// The registers one teleportation run allocates: the entangled pair and
/// the two measurement bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleportLink {
    /// Sender half of the entangled pair.
    pub alice: QubitId,
    /// Receiver half; holds the transferred state after the protocol.
    pub bob: QubitId,
    /// Outcome of measuring the source qubit.
    pub phi_flag: ClbitId,
    /// Outcome of measuring the sender half.
    pub alice_flag: ClbitId,
}

/// Allocates the registers for one teleportation run.
///
/// `suffix` disambiguates labels when the protocol is invoked more than
/// once inside the same circuit; it carries no semantic weight.
pub fn init_teleport(circuit: &mut Circuit, suffix: &str) -> Result<TeleportLink, QrelayError> {
    let alice = circuit.add_qubit(format!("alice{}", suffix))?;
    let bob = circuit.add_qubit(format!("bob{}", suffix))?;
    let phi_flag = circuit.add_clbit(format!("phi_measurement{}", suffix))?;
    let alice_flag = circuit.add_clbit(format!("alice_measurement{}", suffix))?;
    Ok(TeleportLink {
        alice,
        bob,
        phi_flag,
        alice_flag,
    })
}

/// Appends the teleportation sequence for `phi` over a previously
/// allocated link, returning the receiver qubit.
///
/// On execution the receiver holds exactly the state `phi` held before the
/// interact stage; `phi` and the sender half are destroyed by their
/// measurements.
pub fn run_teleport(
    circuit: &mut Circuit,
    phi: QubitId,
    link: &TeleportLink,
) -> Result<QubitId, QrelayError> {
    // Build the entangled pair alice and bob share.
    basis::comp_to_bell(circuit, link.alice, link.bob)?;

    // Interact phi with the sender half.
    basis::bell_to_comp(circuit, phi, link.alice)?;

    circuit.barrier()?;

    // Destructive measurements.
    circuit.measure(link.alice, link.alice_flag)?;
    circuit.measure(phi, link.phi_flag)?;

    // Receiver corrections, each gated by its own measurement.
    circuit.x_if(link.alice_flag, link.bob)?;
    circuit.z_if(link.phi_flag, link.bob)?;

    Ok(link.bob)
}

/// Allocates a link and teleports `phi` over it in one call.
pub fn teleport(
    circuit: &mut Circuit,
    phi: QubitId,
    suffix: &str,
) -> Result<QubitId, QrelayError> {
    let link = init_teleport(circuit, suffix)?;
    run_teleport(circuit, phi, &link)
}

// src/lib.rs

//! `qrelay` - quantum communication protocols as executable circuit descriptions
//!
//! This library builds small quantum communication protocols (one- and
//! two-qubit teleportation, plus a swap-test equality check) as validated,
//! append-only circuit descriptions, runs them on a probabilistic
//! state-vector backend, and aggregates the measurement outcomes into
//! classical frequency statistics.
//!
//! Construction and execution are strictly separated: the protocol layer
//! ([`basis`], [`teleport`], [`swaptest`], [`scenarios`]) only appends
//! operations to a [`Circuit`], and the backend ([`simulation`]) evaluates
//! measurements and classically-conditioned corrections per shot.
//!
//! # Example: teleport |1⟩ and measure the receiver
//!
//! ```
//! use qrelay::{Circuit, Simulator, basis, teleport};
//!
//! let mut circuit = Circuit::new();
//! let phi = circuit.add_qubit("phi")?;
//! basis::prepare_computational(&mut circuit, phi, false)?; // |1⟩
//!
//! let bob = teleport::teleport(&mut circuit, phi, "")?;
//! let result = circuit.add_clbit("result_measurement")?;
//! circuit.measure(bob, result)?;
//!
//! let counts = Simulator::with_seed(11).execute(&circuit, 256)?;
//! let reduced = counts.reduce_to_bit(result.position())?;
//! assert_eq!(reduced.get("1"), 256);
//! # Ok::<(), qrelay::QrelayError>(())
//! ```
//!
//! # Example: teleport |+⟩ and verify with the swap test
//!
//! ```
//! use qrelay::{Basis, Simulator};
//! use qrelay::scenarios::{single_qubit_builder, teleport_and_check_equality};
//!
//! let scenario = teleport_and_check_equality(single_qubit_builder(Basis::Plus))?;
//! let counts = scenario.run(&Simulator::with_seed(3), 1024)?;
//!
//! // Identical states drive the equality bit to 0.
//! assert!(counts.frequency("0") >= 0.95);
//! # Ok::<(), qrelay::QrelayError>(())
//! ```

pub mod basis;
pub mod circuits;
pub mod core;
pub mod operations;
pub mod scenarios;
pub mod simulation;
pub mod swaptest;
pub mod teleport;

// Re-export the most common types for easier top-level use
pub use crate::basis::Basis;
pub use crate::circuits::Circuit;
pub use crate::core::{ClbitId, QrelayError, QubitId};
pub use crate::operations::{Gate, Operation};
pub use crate::simulation::{Counts, Simulator};

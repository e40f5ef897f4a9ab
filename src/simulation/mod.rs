// src/simulation/mod.rs

//! Probabilistic execution of circuit descriptions.
//!
//! This module is the collaborator boundary the protocol layer builds
//! against: [`Simulator::execute`] accepts an assembled [`Circuit`] and a
//! shot count, runs that many independent per-shot state-vector
//! simulations, and returns the aggregated [`Counts`]. Measurement
//! sampling and classically-conditioned gates are evaluated per shot by
//! the internal `ExecutionEngine`.

mod results;
pub(crate) mod engine;

pub use results::Counts;

use crate::circuits::Circuit;
use crate::core::QrelayError;
use engine::ExecutionEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Executes circuit descriptions and aggregates outcome statistics.
///
/// Construction picks the randomness source: [`Simulator::new`] draws from
/// OS entropy, [`Simulator::with_seed`] is fully deterministic and is what
/// the test suite uses.
pub struct Simulator {
    seed: Option<u64>,
}

impl Simulator {
    /// A simulator sampling from OS entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// A deterministic simulator: the same circuit and shot count always
    /// produce the same frequency table.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Runs `shots` independent executions of `circuit` and returns the
    /// outcome-frequency table. The circuit is not consumed, but a
    /// scenario submits each circuit exactly once; there is no retry path,
    /// since resubmitting a rejected circuit cannot succeed.
    ///
    /// # Errors
    /// * [`QrelayError::InvalidOperation`]: `shots` is zero.
    /// * [`QrelayError::SimulationError`]: the circuit declares no qubits
    ///   or is too large to simulate.
    pub fn execute(&self, circuit: &Circuit, shots: u64) -> Result<Counts, QrelayError> {
        if shots == 0 {
            return Err(QrelayError::InvalidOperation {
                message: "shot count must be a positive integer".to_string(),
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut engine = ExecutionEngine::init(circuit)?;
        let mut counts = Counts::new();
        for _ in 0..shots {
            counts.record(engine.run_shot(circuit, &mut rng));
        }
        Ok(counts)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

//! Demo: teleport a classically-mixed qubit, then both halves of a Bell
//! pair, printing each assembled circuit and the receiver statistics.

use qrelay::scenarios::{
    bell_pair_builder, single_qubit_builder, teleport_one_qubit, teleport_two_qubits,
};
use qrelay::{Basis, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let simulator = Simulator::new();

    println!("--- Teleporting a 50/50 mixed state ---");
    let scenario = teleport_one_qubit(single_qubit_builder(Basis::Mixed))?;
    println!("{}", scenario.circuit());
    let counts = scenario.run(&simulator, 1024)?;
    println!("Receiver distribution (expect ~50/50):\n{}", counts);

    println!("--- Teleporting both halves of a Bell pair ---");
    let scenario = teleport_two_qubits(bell_pair_builder(true, true))?;
    println!("{}", scenario.circuit());
    let counts = scenario.run(&simulator, 1024)?;
    println!(
        "Receiver distribution (expect only correlated outcomes):\n{}",
        counts
    );

    Ok(())
}

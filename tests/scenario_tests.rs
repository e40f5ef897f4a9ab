// tests/scenario_tests.rs

use qrelay::scenarios::{
    bell_pair_builder, single_qubit_builder, teleport_and_check_equality, teleport_one_qubit,
    teleport_one_of_two_and_check_equality, teleport_two_and_check_equality, teleport_two_qubits,
};
use qrelay::{Basis, QrelayError, Simulator};

const SHOTS: u64 = 1024;

fn seeded(seed: u64) -> Simulator {
    Simulator::with_seed(seed)
}

#[test]
fn bare_teleport_reports_the_mixture_distribution() -> Result<(), QrelayError> {
    let scenario = teleport_one_qubit(single_qubit_builder(Basis::Mixed))?;
    let counts = scenario.run(&seeded(21), SHOTS)?;

    assert_eq!(counts.total(), SHOTS);
    let zeros = counts.frequency("0");
    assert!(
        (0.4..=0.6).contains(&zeros),
        "teleported mixture should stay ~50/50, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn bare_two_qubit_teleport_preserves_bell_correlations() -> Result<(), QrelayError> {
    // Teleporting both halves of |Φ+⟩ over independent links must keep the
    // receivers perfectly correlated.
    let scenario = teleport_two_qubits(bell_pair_builder(true, true))?;
    assert_eq!(scenario.focus().len(), 2, "one result bit per receiver");
    let counts = scenario.run(&seeded(22), SHOTS)?;

    assert_eq!(counts.get("01"), 0, "anticorrelated receivers observed");
    assert_eq!(counts.get("10"), 0, "anticorrelated receivers observed");
    assert_eq!(counts.get("00") + counts.get("11"), SHOTS);
    Ok(())
}

#[test]
fn teleported_single_qubit_states_verify_against_fresh_copies() -> Result<(), QrelayError> {
    for (seed, state) in [
        (23, Basis::Zero),
        (24, Basis::One),
        (25, Basis::Plus),
        (26, Basis::Minus),
    ] {
        let scenario = teleport_and_check_equality(single_qubit_builder(state))?;
        let counts = scenario.run(&seeded(seed), SHOTS)?;
        let zeros = counts.frequency("0");
        assert!(
            zeros >= 0.95,
            "teleported {:?} failed equality check, observed {}",
            state,
            zeros
        );
    }
    Ok(())
}

#[test]
fn teleported_mixture_verifies_as_mixture() -> Result<(), QrelayError> {
    // Two independent 50/50 mixtures agree on half the shots outright and
    // are orthogonal on the rest: P(outcome 0) = 1/2·1 + 1/2·1/2 = 0.75.
    let scenario = teleport_and_check_equality(single_qubit_builder(Basis::Mixed))?;
    let counts = scenario.run(&seeded(27), SHOTS)?;
    let zeros = counts.frequency("0");
    assert!(
        (0.65..=0.85).contains(&zeros),
        "independent mixtures should read ~0.75, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn partially_teleported_bell_pairs_verify_jointly() -> Result<(), QrelayError> {
    // Teleport only one half of each Bell variant; the untouched partner
    // joins the equality group directly.
    for (seed, first_zero, second_zero) in [
        (31, true, true),
        (32, true, false),
        (33, false, true),
        (34, false, false),
    ] {
        let scenario =
            teleport_one_of_two_and_check_equality(bell_pair_builder(first_zero, second_zero))?;
        let counts = scenario.run(&seeded(seed), SHOTS)?;
        let zeros = counts.frequency("0");
        assert!(
            zeros >= 0.9,
            "partial teleport of Bell({}, {}) failed equality check, observed {}",
            first_zero,
            second_zero,
            zeros
        );
    }
    Ok(())
}

#[test]
fn fully_teleported_bell_pairs_verify_jointly() -> Result<(), QrelayError> {
    for (seed, first_zero, second_zero) in [
        (41, true, true),
        (42, true, false),
        (43, false, true),
        (44, false, false),
    ] {
        let scenario =
            teleport_two_and_check_equality(bell_pair_builder(first_zero, second_zero))?;
        let counts = scenario.run(&seeded(seed), SHOTS)?;
        let zeros = counts.frequency("0");
        assert!(
            zeros >= 0.9,
            "full teleport of Bell({}, {}) failed equality check, observed {}",
            first_zero,
            second_zero,
            zeros
        );
    }
    Ok(())
}

#[test]
fn scenario_circuits_render() -> Result<(), QrelayError> {
    // The renderer is diagnostics-only; this just pins that it covers
    // every operation kind without panicking.
    let scenario = teleport_one_of_two_and_check_equality(bell_pair_builder(true, false))?;
    let drawing = format!("{}", scenario.circuit());
    assert!(drawing.contains("qrelay::Circuit"));
    assert!(drawing.contains("phi"));
    assert!(drawing.contains("expected_bob2"));
    Ok(())
}

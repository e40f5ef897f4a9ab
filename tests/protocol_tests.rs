// tests/protocol_tests.rs

use qrelay::{
    Basis, Circuit, Counts, QrelayError, Simulator, basis, swaptest, teleport,
};

const SHOTS: u64 = 1024;

fn seeded(seed: u64) -> Simulator {
    Simulator::with_seed(seed)
}

/// Builds a circuit that prepares one qubit with `prepare` and measures it,
/// returning the measured bit's reduced counts.
fn prepare_and_measure<F>(prepare: F, seed: u64) -> Result<Counts, QrelayError>
where
    F: Fn(&mut Circuit, qrelay::QubitId) -> Result<(), QrelayError>,
{
    let mut circuit = Circuit::new();
    let q = circuit.add_qubit("phi")?;
    prepare(&mut circuit, q)?;
    let m = circuit.add_clbit("result_measurement")?;
    circuit.measure(q, m)?;

    let counts = seeded(seed).execute(&circuit, SHOTS)?;
    counts.reduce_to_bit(m.position())
}

#[test]
fn computational_preparation_is_deterministic() -> Result<(), QrelayError> {
    let zeros = prepare_and_measure(|c, q| basis::prepare(c, q, Basis::Zero), 1)?;
    assert_eq!(zeros.get("0"), SHOTS);

    let ones = prepare_and_measure(|c, q| basis::prepare(c, q, Basis::One), 2)?;
    assert_eq!(ones.get("1"), SHOTS);
    Ok(())
}

#[test]
fn superposition_measured_in_its_own_basis_is_deterministic() -> Result<(), QrelayError> {
    // |+⟩ rotated back to the computational basis always reads 0.
    let plus = prepare_and_measure(
        |c, q| {
            basis::prepare_superposition(c, q, true)?;
            basis::superposition_to_comp(c, q)
        },
        3,
    )?;
    assert_eq!(plus.get("0"), SHOTS);

    // |−⟩ always reads 1.
    let minus = prepare_and_measure(
        |c, q| {
            basis::prepare_superposition(c, q, false)?;
            basis::superposition_to_comp(c, q)
        },
        4,
    )?;
    assert_eq!(minus.get("1"), SHOTS);
    Ok(())
}

#[test]
fn superposition_measured_in_the_opposite_basis_splits() -> Result<(), QrelayError> {
    let counts = prepare_and_measure(|c, q| basis::prepare(c, q, Basis::Plus), 5)?;
    let zeros = counts.frequency("0");
    assert!(
        (0.4..=0.6).contains(&zeros),
        "|+⟩ measured computationally should split ~50/50, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn mixed_state_splits_evenly() -> Result<(), QrelayError> {
    let counts = prepare_and_measure(|c, q| basis::prepare(c, q, Basis::Mixed), 6)?;
    let zeros = counts.frequency("0");
    assert!(
        (0.4..=0.6).contains(&zeros),
        "mixed state should split ~50/50, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn repeated_mixed_preparations_share_one_circuit() -> Result<(), QrelayError> {
    // Auxiliary naming comes from the circuit's counter, so two mixed
    // preparations in one circuit must not collide.
    let mut circuit = Circuit::new();
    let q0 = circuit.add_qubit("phi")?;
    let q1 = circuit.add_qubit("rho")?;
    basis::prepare_mixed(&mut circuit, q0)?;
    basis::prepare_mixed(&mut circuit, q1)?;

    let m0 = circuit.add_clbit("m0")?;
    let m1 = circuit.add_clbit("m1")?;
    circuit.measure(q0, m0)?;
    circuit.measure(q1, m1)?;

    let counts = seeded(7).execute(&circuit, SHOTS)?;
    assert_eq!(counts.total(), SHOTS);
    Ok(())
}

#[test]
fn bell_transform_round_trip_restores_computational_values() -> Result<(), QrelayError> {
    // comp → Bell → comp must return every (b1, b2) input exactly.
    for (first_zero, second_zero) in [(true, true), (true, false), (false, true), (false, false)] {
        let mut circuit = Circuit::new();
        let q0 = circuit.add_qubit("phi")?;
        let q1 = circuit.add_qubit("rho")?;
        basis::prepare_computational(&mut circuit, q0, first_zero)?;
        basis::prepare_computational(&mut circuit, q1, second_zero)?;
        basis::comp_to_bell(&mut circuit, q0, q1)?;
        basis::bell_to_comp(&mut circuit, q0, q1)?;

        let m0 = circuit.add_clbit("m0")?;
        let m1 = circuit.add_clbit("m1")?;
        circuit.measure(q0, m0)?;
        circuit.measure(q1, m1)?;

        let expected = format!(
            "{}{}",
            if first_zero { '0' } else { '1' },
            if second_zero { '0' } else { '1' }
        );
        let counts = seeded(8).execute(&circuit, SHOTS)?;
        assert_eq!(
            counts.get(&expected),
            SHOTS,
            "round trip failed for ({}, {})",
            first_zero,
            second_zero
        );
    }
    Ok(())
}

#[test]
fn teleported_computational_states_arrive_intact() -> Result<(), QrelayError> {
    for (is_zero, expected) in [(true, "0"), (false, "1")] {
        let mut circuit = Circuit::new();
        let phi = circuit.add_qubit("phi")?;
        basis::prepare_computational(&mut circuit, phi, is_zero)?;

        let bob = teleport::teleport(&mut circuit, phi, "")?;
        let result = circuit.add_clbit("result_measurement")?;
        circuit.measure(bob, result)?;

        let counts = seeded(9).execute(&circuit, SHOTS)?;
        let reduced = counts.reduce_to_bit(result.position())?;
        assert_eq!(
            reduced.get(expected),
            SHOTS,
            "teleporting computational {} lost the state",
            expected
        );
    }
    Ok(())
}

#[test]
fn swap_test_confirms_identically_prepared_states() -> Result<(), QrelayError> {
    let mut circuit = Circuit::new();
    let a = circuit.add_qubit("phi")?;
    let b = circuit.add_qubit("rho")?;
    basis::prepare(&mut circuit, a, Basis::Plus)?;
    basis::prepare(&mut circuit, b, Basis::Plus)?;

    let handles = swaptest::check_equality(&mut circuit, &[a], &[b])?;
    let counts = seeded(10).execute(&circuit, SHOTS)?;
    let flag = counts.reduce_to_bit(handles.flag.position())?;
    assert!(
        flag.frequency("0") >= 0.95,
        "identical |+⟩ states should read as equal, observed {}",
        flag.frequency("0")
    );
    Ok(())
}

#[test]
fn swap_test_reads_half_for_orthogonal_states() -> Result<(), QrelayError> {
    let mut circuit = Circuit::new();
    let a = circuit.add_qubit("phi")?;
    let b = circuit.add_qubit("rho")?;
    basis::prepare(&mut circuit, a, Basis::Zero)?;
    basis::prepare(&mut circuit, b, Basis::One)?;

    let handles = swaptest::check_equality(&mut circuit, &[a], &[b])?;
    let counts = seeded(11).execute(&circuit, SHOTS)?;
    let flag = counts.reduce_to_bit(handles.flag.position())?;
    let zeros = flag.frequency("0");
    assert!(
        (0.4..=0.6).contains(&zeros),
        "orthogonal states should read ~0.5, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn swap_test_distinguishes_mixture_from_superposition() -> Result<(), QrelayError> {
    // |+⟩ and the 50/50 mixture are indistinguishable by direct
    // measurement, but not to the swap test: each shot collapses the
    // mixture to |0⟩ or |1⟩, either of which overlaps |+⟩ with
    // probability 1/2, so P(outcome 0) = 1/2 + 1/2·(1/2) = 0.75, well
    // separated from the ~1.0 of identical pure states.
    let mut circuit = Circuit::new();
    let a = circuit.add_qubit("phi")?;
    let b = circuit.add_qubit("rho")?;
    basis::prepare(&mut circuit, a, Basis::Mixed)?;
    basis::prepare(&mut circuit, b, Basis::Plus)?;

    let handles = swaptest::check_equality(&mut circuit, &[a], &[b])?;
    let counts = seeded(12).execute(&circuit, SHOTS)?;
    let flag = counts.reduce_to_bit(handles.flag.position())?;
    let zeros = flag.frequency("0");
    assert!(
        (0.65..=0.85).contains(&zeros),
        "mixture vs |+⟩ should read ~0.75, observed {}",
        zeros
    );
    Ok(())
}

#[test]
fn mismatched_groups_are_rejected_before_any_append() {
    let mut circuit = Circuit::new();
    let a = circuit.add_qubit("a").unwrap();
    let b = circuit.add_qubit("b").unwrap();
    let c = circuit.add_qubit("c").unwrap();

    let err = swaptest::check_equality(&mut circuit, &[a], &[b, c]).unwrap_err();
    assert_eq!(err, QrelayError::GroupLengthMismatch { left: 1, right: 2 });
    assert!(circuit.is_empty(), "nothing may be appended on rejection");
    assert_eq!(
        circuit.num_qubits(),
        3,
        "no auxiliary may be allocated on rejection"
    );
}

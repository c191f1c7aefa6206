//! Integrated tests for qsim-core

use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const EPS: f64 = 1e-9;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_state_eq(a: &Register, b: &Register) {
    assert_eq!(a.num_qubits(), b.num_qubits());
    for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
        assert!((x - y).norm() < EPS, "{} != {}", a, b);
    }
}

fn assert_normalized(reg: &Register) {
    assert!((reg.norm_sqr() - 1.0).abs() < NORM_TOLERANCE);
}

/// Arbitrary entangled-looking 3-qubit state
fn sample_state() -> Register {
    let amps: Vec<_> = (0..8)
        .map(|i| c((i as f64 * 0.7).cos(), (i as f64 * 1.3).sin()))
        .collect();
    Register::from_amplitudes(3, amps).unwrap()
}

fn every_gate() -> Vec<Gate> {
    vec![
        Gate::identity(),
        Gate::x(),
        Gate::y(),
        Gate::z(),
        Gate::h(),
        Gate::s(),
        Gate::t(),
        Gate::rx(0.42),
        Gate::ry(-2.1),
        Gate::rz(5.5),
    ]
}

#[test]
fn test_scenario_hadamard_on_one_qubit() {
    let reg = Gate::h().apply(&Register::new(1).unwrap(), None).unwrap();
    assert!((reg.amplitudes()[0].re - FRAC_1_SQRT_2).abs() < EPS);
    assert!((reg.amplitudes()[1].re - FRAC_1_SQRT_2).abs() < EPS);
}

#[test]
fn test_scenario_x_on_plus_state() {
    let plus = Gate::h().apply(&Register::new(1).unwrap(), None).unwrap();
    let flipped = Gate::x().apply(&plus, None).unwrap();
    for (a, b) in plus.amplitudes().iter().zip(flipped.amplitudes()) {
        assert!((a.norm() - b.norm()).abs() < EPS);
    }
}

#[test]
fn test_scenario_uniform_two_qubits() {
    let reg = Register::new(2).unwrap();
    let reg = Gate::h().apply_at(&reg, 0).unwrap();
    let reg = Gate::h().apply_at(&reg, 1).unwrap();
    for a in reg.amplitudes() {
        assert!((a.re - 0.5).abs() < EPS);
        assert!(a.im.abs() < EPS);
    }

    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0usize; 4];
    let shots = 10_000;
    for _ in 0..shots {
        let mut shot = reg.clone();
        counts[shot.measure(&mut rng).index] += 1;
    }
    for count in counts {
        let freq = count as f64 / shots as f64;
        assert!((freq - 0.25).abs() < 0.02, "frequency {freq} too far from 0.25");
    }
}

#[test]
fn test_scenario_rz_angle_additivity() {
    let theta = 1.234;
    let start = sample_state();
    for target in 0..3 {
        let half = Gate::rz(theta / 2.0);
        let twice = half.apply_at(&half.apply_at(&start, target).unwrap(), target).unwrap();
        let once = Gate::rz(theta).apply_at(&start, target).unwrap();
        assert_state_eq(&twice, &once);
    }
}

#[test]
fn test_scenario_dimension_mismatch() {
    let err = Register::from_amplitudes(2, vec![c(1.0, 0.0); 3]).unwrap_err();
    assert!(matches!(err, QuantumError::DimensionMismatch { expected: 4, actual: 3 }));
}

#[test]
fn test_scenario_missing_target() {
    let err = Gate::x().apply(&Register::new(2).unwrap(), None).unwrap_err();
    assert!(matches!(err, QuantumError::MissingTarget { .. }));
}

#[test]
fn test_gate_then_dagger_restores_state() {
    let start = sample_state();
    for gate in every_gate() {
        for target in 0..3 {
            let there = gate.apply_at(&start, target).unwrap();
            let back = gate.dagger().apply_at(&there, target).unwrap();
            assert_state_eq(&back, &start);
        }
    }
}

#[test]
fn test_hadamard_twice_is_identity() {
    let start = sample_state();
    for target in 0..3 {
        let h = Gate::h();
        let back = h.apply_at(&h.apply_at(&start, target).unwrap(), target).unwrap();
        assert_state_eq(&back, &start);
    }
}

#[test]
fn test_normalization_at_rest() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut reg = sample_state();
    assert_normalized(&reg);

    for gate in every_gate() {
        reg = gate.apply_at(&reg, 1).unwrap();
        assert_normalized(&reg);
    }

    reg.measure(&mut rng);
    assert_normalized(&reg);
}

#[test]
fn test_bit_locality_on_product_state() {
    // |1⟩ ⊗ Ry(0.8)|0⟩ ⊗ |+⟩
    let reg = Register::new(3).unwrap();
    let reg = Gate::x().apply_at(&reg, 0).unwrap();
    let reg = Gate::ry(0.8).apply_at(&reg, 1).unwrap();
    let reg = Gate::h().apply_at(&reg, 2).unwrap();

    for gate in every_gate() {
        for target in 0..3 {
            let after = gate.apply_at(&reg, target).unwrap();
            for other in (0..3).filter(|&q| q != target) {
                let before = reg.marginal(other).unwrap();
                let now = after.marginal(other).unwrap();
                assert!((before[0] - now[0]).abs() < EPS, "{gate} on {target} disturbed {other}");
                assert!((before[1] - now[1]).abs() < EPS);
            }
        }
    }
}

#[test]
fn test_measurement_collapses_to_single_index() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut reg = sample_state();
    let first = reg.measure(&mut rng);

    let probs = reg.probabilities();
    assert_eq!(probs.iter().filter(|&&p| p == 1.0).count(), 1);
    assert_eq!(probs.iter().filter(|&&p| p == 0.0).count(), probs.len() - 1);
    assert_eq!(probs[first.index], 1.0);

    for _ in 0..50 {
        assert_eq!(reg.measure(&mut rng).index, first.index);
    }
}

#[test]
fn test_seeded_measurement_is_reproducible() {
    let reg = sample_state();
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| reg.clone().measure(&mut rng).index)
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(5), draw(5));
}

#[test]
fn test_measured_ket_parses_back() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut reg = sample_state();
    let outcome = reg.measure(&mut rng);
    assert_eq!(ket_to_index(&outcome.ket()).unwrap(), outcome.index);
    assert_eq!(outcome.bits().len(), 3);
}

#[test]
fn test_rx_pi_flips_up_to_phase() {
    let reg = Gate::rx(PI).apply(&Register::new(1).unwrap(), None).unwrap();
    assert!(reg.probability(0).unwrap() < EPS);
    assert!((reg.amplitudes()[1] - c(0.0, -1.0)).norm() < EPS);
}

#[test]
fn test_serde_roundtrip_renormalizes() {
    let reg = sample_state();
    let json = serde_json::to_string(&reg).unwrap();
    let back: Register = serde_json::from_str(&json).unwrap();
    assert_state_eq(&back, &reg);

    let bad = r#"{"num_qubits":2,"amplitudes":[[1.0,0.0]]}"#;
    assert!(serde_json::from_str::<Register>(bad).is_err());
}

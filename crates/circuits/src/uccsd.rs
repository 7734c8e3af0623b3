use crate::circuit::Circuit;
use crate::hartree_fock_bits;
use std::f64::consts::FRAC_PI_2;

/// Wire count of the fixed UCCSD-style block.
pub const UCCSD_H2_WIRES: usize = 4;

/// Number of weights the UCCSD-style layout consumes.
pub fn uccsd_h2_params() -> usize {
    1
}

/// Fixed UCCSD-style excitation block for a 4-qubit system: Hartree-Fock
/// reference, basis rotations into the excitation frame, a CNOT ladder,
/// RZ(θ) on the last wire, then the ladder and rotations undone.
pub fn uccsd_h2(weights: &[f64]) -> Circuit {
    assert!(
        weights.len() >= uccsd_h2_params(),
        "uccsd_h2 needs {} weight, got {}",
        uccsd_h2_params(),
        weights.len()
    );

    let mut c = Circuit::new(UCCSD_H2_WIRES);
    c.basis_state(hartree_fock_bits(UCCSD_H2_WIRES));

    c.rx(FRAC_PI_2, 0);
    c.h(1);
    c.h(2);
    c.h(3);

    c.cnot(0, 1);
    c.cnot(1, 2);
    c.cnot(2, 3);
    c.rz(weights[0], 3);
    c.cnot(2, 3);
    c.cnot(1, 2);
    c.cnot(0, 1);

    c.rx(-FRAC_PI_2, 0);
    c.h(1);
    c.h(2);
    c.h(3);
    c
}

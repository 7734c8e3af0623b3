use crate::circuit::Circuit;
use crate::hartree_fock_bits;

/// Number of weights the symmetry-preserving layout consumes.
pub fn symmetry_preserving_params(wires: usize, depth: usize) -> usize {
    wires.saturating_sub(1) * depth
}

/// Particle-number conserving ansatz: Hartree-Fock reference state, then
/// CNOT/RY exchange blocks on even and odd neighbor pairs per layer.
///
/// Each block applies RY(-w) and RY(+w) around a CNOT pair, so the qubit
/// excitation number is preserved layer by layer.
pub fn symmetry_preserving(weights: &[f64], wires: usize, depth: usize) -> Circuit {
    let needed = symmetry_preserving_params(wires, depth);
    assert!(
        weights.len() >= needed,
        "symmetry_preserving needs {} weights, got {}",
        needed,
        weights.len()
    );

    let mut c = Circuit::new(wires);
    c.basis_state(hartree_fock_bits(wires));

    for d in 0..depth {
        for i in 0..wires / 2 {
            let w = weights[2 * i + (wires - 1) * d];
            c.cnot(2 * i, 2 * i + 1);
            c.ry(-w, 2 * i);
            c.cnot(2 * i + 1, 2 * i);
            c.ry(w, 2 * i);
            c.cnot(2 * i, 2 * i + 1);
        }
        for i in 0..(wires / 2).saturating_sub(1) {
            let w = weights[2 * i + 1 + (wires - 1) * d];
            c.cnot(2 * i + 1, 2 * i + 2);
            c.ry(-w, 2 * i + 1);
            c.cnot(2 * i + 2, 2 * i + 1);
            c.ry(w, 2 * i + 1);
            c.cnot(2 * i + 1, 2 * i + 2);
        }
    }
    c
}

use crate::circuit::Circuit;

/// Number of weights the hardware-efficient layout consumes.
pub fn hardware_efficient_params(wires: usize, depth: usize) -> usize {
    2 * wires * (depth + 1)
}

/// Hardware-efficient ansatz: RY/RZ rotations on every wire, CZ
/// entanglers on even then odd neighbor pairs, repeated `depth` times,
/// with one trailing rotation layer.
pub fn hardware_efficient(weights: &[f64], wires: usize, depth: usize) -> Circuit {
    let needed = hardware_efficient_params(wires, depth);
    assert!(
        weights.len() >= needed,
        "hardware_efficient needs {} weights, got {}",
        needed,
        weights.len()
    );

    let mut c = Circuit::new(wires);
    for d in 0..depth {
        for i in 0..wires {
            c.ry(weights[2 * i + 2 * wires * d], i);
            c.rz(weights[2 * i + 1 + 2 * wires * d], i);
        }
        for i in 0..wires / 2 {
            c.cz(2 * i, 2 * i + 1);
        }
        for i in 0..(wires / 2).saturating_sub(1) {
            c.cz(2 * i + 1, 2 * i + 2);
        }
    }
    for i in 0..wires {
        c.ry(weights[2 * i + 2 * wires * depth], i);
        c.rz(weights[2 * i + 1 + 2 * wires * depth], i);
    }
    c
}

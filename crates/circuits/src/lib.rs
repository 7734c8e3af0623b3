pub mod circuit;
pub mod gates;
pub mod hardware_efficient;
pub mod symmetry_preserving;
pub mod uccsd;

pub use circuit::{Circuit, Op};
pub use hardware_efficient::{hardware_efficient, hardware_efficient_params};
pub use symmetry_preserving::{symmetry_preserving, symmetry_preserving_params};
pub use uccsd::{uccsd_h2, uccsd_h2_params, UCCSD_H2_WIRES};

/// Reference occupation for ansatz state preparation: the first
/// `wires / 2` wires filled.
pub fn hartree_fock_bits(wires: usize) -> Vec<u8> {
    let mut bits = vec![0u8; wires];
    for b in bits.iter_mut().take(wires / 2) {
        *b = 1;
    }
    bits
}

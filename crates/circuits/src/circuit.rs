use crate::gates::{self, C64};

/// One gate application, keyed by wire index.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    H(usize),
    X(usize),
    Rx { wire: usize, theta: f64 },
    Ry { wire: usize, theta: f64 },
    Rz { wire: usize, theta: f64 },
    Cnot { control: usize, target: usize },
    Cz { a: usize, b: usize },
    /// Computational-basis state preparation over all wires.
    BasisState(Vec<u8>),
}

impl Op {
    /// Unitary matrix for single-qubit gates.
    pub fn matrix_1q(&self) -> Option<[[C64; 2]; 2]> {
        match self {
            Op::H(_) => Some(gates::hadamard()),
            Op::X(_) => Some(gates::pauli_x()),
            Op::Rx { theta, .. } => Some(gates::rx(*theta)),
            Op::Ry { theta, .. } => Some(gates::ry(*theta)),
            Op::Rz { theta, .. } => Some(gates::rz(*theta)),
            _ => None,
        }
    }

    /// Unitary matrix for two-qubit gates.
    pub fn matrix_2q(&self) -> Option<[[C64; 4]; 4]> {
        match self {
            Op::Cnot { .. } => Some(gates::cnot()),
            Op::Cz { .. } => Some(gates::cz()),
            _ => None,
        }
    }

    /// Rotation angle of parametrized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Op::Rx { theta, .. } | Op::Ry { theta, .. } | Op::Rz { theta, .. } => Some(*theta),
            _ => None,
        }
    }
}

/// A straight-line gate program on a fixed set of wires.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    pub wires: usize,
    pub ops: Vec<Op>,
}

impl Circuit {
    pub fn new(wires: usize) -> Self {
        Self {
            wires,
            ops: Vec::new(),
        }
    }

    pub fn h(&mut self, wire: usize) {
        self.check(wire);
        self.ops.push(Op::H(wire));
    }

    pub fn x(&mut self, wire: usize) {
        self.check(wire);
        self.ops.push(Op::X(wire));
    }

    pub fn rx(&mut self, theta: f64, wire: usize) {
        self.check(wire);
        self.ops.push(Op::Rx { wire, theta });
    }

    pub fn ry(&mut self, theta: f64, wire: usize) {
        self.check(wire);
        self.ops.push(Op::Ry { wire, theta });
    }

    pub fn rz(&mut self, theta: f64, wire: usize) {
        self.check(wire);
        self.ops.push(Op::Rz { wire, theta });
    }

    pub fn cnot(&mut self, control: usize, target: usize) {
        self.check(control);
        self.check(target);
        assert!(control != target, "cnot needs two distinct wires");
        self.ops.push(Op::Cnot { control, target });
    }

    pub fn cz(&mut self, a: usize, b: usize) {
        self.check(a);
        self.check(b);
        assert!(a != b, "cz needs two distinct wires");
        self.ops.push(Op::Cz { a, b });
    }

    pub fn basis_state(&mut self, bits: Vec<u8>) {
        assert_eq!(
            bits.len(),
            self.wires,
            "basis_state needs one bit per wire"
        );
        self.ops.push(Op::BasisState(bits));
    }

    pub fn gate_count(&self) -> usize {
        self.ops.len()
    }

    /// Rotation parameters in layout order.
    pub fn rotation_angles(&self) -> Vec<f64> {
        self.ops.iter().filter_map(Op::angle).collect()
    }

    fn check(&self, wire: usize) {
        assert!(
            wire < self.wires,
            "wire {} out of range for {} wires",
            wire,
            self.wires
        );
    }
}

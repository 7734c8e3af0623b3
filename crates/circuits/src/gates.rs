use num_complex::Complex64;

pub type C64 = Complex64;

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

pub fn hadamard() -> [[C64; 2]; 2] {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    [
        [c(s, 0.0), c(s, 0.0)],
        [c(s, 0.0), c(-s, 0.0)],
    ]
}

pub fn pauli_x() -> [[C64; 2]; 2] {
    [
        [c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0)],
    ]
}

pub fn pauli_y() -> [[C64; 2]; 2] {
    [
        [c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 1.0), c(0.0, 0.0)],
    ]
}

pub fn pauli_z() -> [[C64; 2]; 2] {
    [
        [c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0)],
    ]
}

/// exp(-i θ X / 2)
pub fn rx(theta: f64) -> [[C64; 2]; 2] {
    let (s, co) = (theta / 2.0).sin_cos();
    [
        [c(co, 0.0), c(0.0, -s)],
        [c(0.0, -s), c(co, 0.0)],
    ]
}

/// exp(-i θ Y / 2)
pub fn ry(theta: f64) -> [[C64; 2]; 2] {
    let (s, co) = (theta / 2.0).sin_cos();
    [
        [c(co, 0.0), c(-s, 0.0)],
        [c(s, 0.0), c(co, 0.0)],
    ]
}

/// exp(-i θ Z / 2) = diag(e^{-iθ/2}, e^{iθ/2})
pub fn rz(theta: f64) -> [[C64; 2]; 2] {
    let (s, co) = (theta / 2.0).sin_cos();
    [
        [c(co, -s), c(0.0, 0.0)],
        [c(0.0, 0.0), c(co, s)],
    ]
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
pub fn cnot() -> [[C64; 4]; 4] {
    let mut u = [[c(0.0, 0.0); 4]; 4];
    u[0][0] = c(1.0, 0.0);
    u[1][1] = c(1.0, 0.0);
    u[2][3] = c(1.0, 0.0);
    u[3][2] = c(1.0, 0.0);
    u
}

/// diag(1, 1, 1, -1)
pub fn cz() -> [[C64; 4]; 4] {
    let mut u = [[c(0.0, 0.0); 4]; 4];
    u[0][0] = c(1.0, 0.0);
    u[1][1] = c(1.0, 0.0);
    u[2][2] = c(1.0, 0.0);
    u[3][3] = c(-1.0, 0.0);
    u
}

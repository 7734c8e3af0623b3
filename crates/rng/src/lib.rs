use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE-256 stream keyed by a seed string.
///
/// Same seed and context produce the same draws on every platform, so
/// initial weights are fully reproducible from the CLI seed.
pub struct SeedRng {
    state: [u8; 32],
    step: u64,
}

impl SeedRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"SEED_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in [0, 1), tagged by a caller context.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"DESCENT"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// Uniform rotation angle in [0, 2π).
    pub fn next_angle(&mut self, ctx: &[u8]) -> f64 {
        self.next_f64(ctx) * 2.0 * std::f64::consts::PI
    }

    /// A batch of rotation angles for ansatz weight initialization.
    pub fn angles(&mut self, ctx: &[u8], n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_angle(ctx)).collect()
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}

/// Park-Miller linear congruential generator: modulus 2^31 - 1 (a Mersenne
/// prime), multiplier 16807 (a primitive root mod that prime).
const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

/// Deterministic pseudo-random source for demo data. For a fixed seed, the
/// n-th call to `next_f64` always returns the same value, so every dataset
/// derived from it is reproducible. Not a cryptographic generator.
///
/// The state is an explicit value passed to the synthesis functions rather
/// than a shared global, so callers control draw order.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    /// Create a generator from an arbitrary seed. The seed is normalized into
    /// `(0, MODULUS)`; seeds that are congruent mod 2^31 - 1 produce the same
    /// sequence.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the state and return a value in the open interval (0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform index into a collection of the given length.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }
}

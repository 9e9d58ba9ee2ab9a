//! Randomness for word choice and placement.

/// Source of uniform random integers.
pub trait WordRng {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Linear congruential generator (not crypto secure, just for gameplay).
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ (seed >> 32)) as u32,
        }
    }

    /// Seeds from the platform entropy source, falling back to `fallback`.
    #[cfg(feature = "rng")]
    pub fn from_entropy(fallback: u64) -> Self {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => Self::new(u64::from_le_bytes(buf)),
            Err(err) => {
                log::warn!("getrandom failed ({err}), seeding from clock");
                Self::new(fallback)
            }
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl WordRng for LcgRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

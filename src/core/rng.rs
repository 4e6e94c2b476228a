//! Simple deterministic random number generator.
//!
//! A small LCG is all the game needs: shape and color draws. Seeding it
//! explicitly makes every run reproducible, which the tests lean on.

/// Linear congruential generator with 32-bit state.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a generator from a seed. Zero is remapped so the stream never
    /// degenerates.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform draw in `0..max`. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

//! RNG module - uniform piece selection
//!
//! The game draws shapes and colors through the [`Randomizer`] trait so the
//! source of randomness can be swapped out. [`SimpleRng`] is a seeded LCG for
//! reproducible games; [`ScriptedRng`] replays a fixed sequence for tests.

/// A source of uniform choices.
pub trait Randomizer {
    /// Pick an index uniformly from `0..n`. Returns 0 when `n` is 0.
    fn pick(&mut self, n: usize) -> usize;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state (restarting from it replays the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.next_range(n as u32) as usize
    }
}

/// Replays a fixed list of choices, wrapping around at the end.
///
/// Each value is reduced modulo `n`, so a script can be written in terms of
/// catalog indices and color offsets directly.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of picks made so far
    pub fn picks(&self) -> usize {
        self.cursor
    }
}

impl Randomizer for ScriptedRng {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % n
    }
}

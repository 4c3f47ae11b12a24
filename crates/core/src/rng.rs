//! RNG module - deterministic choice generation
//!
//! Each round appends one target drawn uniformly from the palette, with
//! replacement (repeats are allowed, unlike a shuffled bag).
//!
//! A small LCG keeps games reproducible from a seed, which is what the
//! tests and the `SIMON_SEED` setting rely on.

use crate::types::{Choice, CHOICES};

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
    ///
    /// Takes the high bits: the low bits of a power-of-two LCG cycle with a
    /// tiny period (`state % 4` repeats every 4 draws).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one of the four targets uniformly.
    pub fn next_choice(&mut self) -> Choice {
        CHOICES[self.next_range(CHOICES.len() as u32) as usize]
    }

    /// Current RNG state (reseeding with it continues the same stream).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_choice(), rng2.next_choice());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_choices_are_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            counts[rng.next_choice().index()] += 1;
        }
        for c in counts {
            assert!((800..1200).contains(&c), "skewed distribution: {counts:?}");
        }
    }

    #[test]
    fn test_sequence_is_not_a_short_cycle() {
        let mut rng = SimpleRng::new(99);
        let seq: Vec<Choice> = (0..32).map(|_| rng.next_choice()).collect();
        // A period-4 cycle is what the raw low bits would give.
        assert!((0..28).any(|i| seq[i] != seq[i + 4]));
    }
}

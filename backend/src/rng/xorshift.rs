//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG suitable for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, so a universe trajectory or
//! a π estimate can be reproduced exactly from its seed.

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use toroidal_sim_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let label = rng.range(0, 4); // [0, 4)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced with 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use toroidal_sim_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let label = rng.range(0, 3);
    /// assert!((0..3).contains(&label));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(rng.get_state())` continues the same stream.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use toroidal_sim_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits scaled by 2^-53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for RngManager {
    fn unif_rand(&mut self) -> f64 {
        self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut rng = RngManager::new(12345);
        rng.range(100, 50);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_unif_rand_matches_next_f64() {
        let mut a = RngManager::new(777);
        let mut b = RngManager::new(777);

        for _ in 0..50 {
            assert_eq!(a.unif_rand(), b.next_f64());
        }
    }
}

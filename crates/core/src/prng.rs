//! Random source for field noise and initial occupancy.
//!
//! [`RandomSource`] is the seam the simulation draws from; [`Xorshift64`] is
//! the deterministic implementation. Same seed, same sequence, on every
//! platform (pure integer arithmetic in the core step).

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A uniform sampler over [0, 1).
pub trait RandomSource {
    /// Returns the next uniformly distributed value in [0, 1).
    fn next_f64(&mut self) -> f64;
}

/// Xorshift64 deterministic PRNG.
///
/// Uses the standard shift parameters (13, 7, 17). Seed 0 is replaced with a
/// non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Derives a seed from the system clock, for unseeded runs.
    ///
    /// The returned seed should be recorded by the caller if the run needs to
    /// be reproduced later.
    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| fold_nanos(d.as_nanos()))
            .unwrap_or(Self::FALLBACK_SEED)
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

/// XORs the high half of a nanosecond count into the low half so no bits are dropped.
fn fold_nanos(nanos: u128) -> u64 {
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

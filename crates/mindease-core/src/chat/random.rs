//! Injectable randomness for reply choice and composing delay.
//!
//! The engine never reaches for a global generator; tests supply a
//! scripted source and assert exact replies and delays.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the two random decisions the engine makes.
pub trait Randomness: Send {
    /// Uniform index in `[0, len)`. `len` must be nonzero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform delay in `[min_ms, max_ms)` milliseconds.
    fn delay_ms(&mut self, min_ms: u64, max_ms: u64) -> u64;
}

/// Production source seeded from OS entropy
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomness for EntropySource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn delay_ms(&mut self, min_ms: u64, max_ms: u64) -> u64 {
        if max_ms <= min_ms {
            return min_ms;
        }
        self.rng.gen_range(min_ms..max_ms)
    }
}

/// Deterministic source for tests: yields queued values, then zeros
/// and minimum delays.
pub struct Scripted {
    picks: VecDeque<usize>,
    delays: VecDeque<u64>,
}

impl Scripted {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        delays: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            delays: delays.into_iter().collect(),
        }
    }
}

impl Randomness for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }

    fn delay_ms(&mut self, min_ms: u64, _max_ms: u64) -> u64 {
        self.delays.pop_front().unwrap_or(min_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_pick_in_bounds() {
        let mut rng = EntropySource::new();
        for _ in 0..100 {
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_entropy_delay_in_bounds() {
        let mut rng = EntropySource::new();
        for _ in 0..100 {
            let delay = rng.delay_ms(1000, 3000);
            assert!((1000..3000).contains(&delay));
        }
    }

    #[test]
    fn test_entropy_delay_degenerate_range() {
        let mut rng = EntropySource::new();
        assert_eq!(rng.delay_ms(500, 500), 500);
    }

    #[test]
    fn test_scripted_sequence() {
        let mut rng = Scripted::new([1, 2], [1500]);
        assert_eq!(rng.pick(3), 1);
        assert_eq!(rng.pick(3), 2);
        // exhausted scripts fall back to 0 / min
        assert_eq!(rng.pick(3), 0);
        assert_eq!(rng.delay_ms(1000, 3000), 1500);
        assert_eq!(rng.delay_ms(1000, 3000), 1000);
    }
}

//! Randomness source for particle rules
//!
//! Rules never reach for a global generator; they are handed a
//! `RandomSource` so tests can script every coin flip.

pub const DEFAULT_SEED: u32 = 12345;

pub trait RandomSource {
    /// Uniform integer in `[min, max_exclusive)`. Returns `min` for an empty range.
    fn random_int(&mut self, min: i32, max_exclusive: i32) -> i32;

    /// Fair coin: `random_int(0, 2) != 0`
    #[inline]
    fn coin(&mut self) -> bool {
        self.random_int(0, 2) != 0
    }
}

/// Xorshift32 random number generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero state would lock the generator at zero, so it maps to the default seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    fn random_int(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        let span = (max_exclusive as i64 - min as i64) as u64;
        let v = (self.next_u32() as u64) % span;
        (min as i64 + v as i64) as i32
    }
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_stays_in_range() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let v = rng.random_int(-3, 4);
            assert!((-3..4).contains(&v));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = Xorshift32::default();
        assert_eq!(rng.random_int(5, 5), 5);
        assert_eq!(rng.random_int(5, 2), 5);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift32::new(99);
        let mut b = Xorshift32::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Xorshift32::new(0);
        assert_eq!(rng.state(), DEFAULT_SEED);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn coin_lands_both_ways() {
        let mut rng = Xorshift32::default();
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!(heads > 300 && heads < 700, "heads = {}", heads);
    }
}

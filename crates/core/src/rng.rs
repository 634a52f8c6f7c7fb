//! RNG module - deterministic randomness for platform placement
//!
//! Every random decision in the world (start positions, recycled widths,
//! colors and heights) is drawn from one seeded [`SimpleRng`], so a seed
//! fully determines a run.

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is remapped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `0..max`.
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in `lo..=hi`.
    ///
    /// Returns `lo` when the range is empty or inverted.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u32;
        lo + self.next_range(span) as i32
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
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

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..2000 {
            let v = rng.range_inclusive(100, 105);
            assert!((100..=105).contains(&v));
            saw_lo |= v == 100;
            saw_hi |= v == 105;
        }
        assert!(saw_lo && saw_hi);
    }

    #[test]
    fn test_range_inclusive_degenerate() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.range_inclusive(0, 0), 0);
        assert_eq!(rng.range_inclusive(10, 3), 10);
        assert_eq!(rng.range_inclusive(-5, -5), -5);
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(99);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);

        let items = [1, 2, 3];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }
}

//! Seeded pseudorandom numbers for reproducible workloads.
use alloc::boxed::Box;
use core::iter;

// MT19937-64 constants
const R: u64 = 31;
const N_64: usize = 312;
const M_64: usize = 156;
const A_64: u64 = 0xB5026F5AA96619E9;
const U_64: u64 = 29;
const D_64: u64 = 0x5555555555555555;
const S_64: u64 = 17;
const B_64: u64 = 0x71D67FFFEDA60000;
const T_64: u64 = 37;
const C_64: u64 = 0xFFF7EEE000000000;
const L_64: u64 = 43;
const F_64: u64 = 6364136223846793005;
const LOWER_MASK: u64 = (1 << R) - 1;
const UPPER_MASK: u64 = !LOWER_MASK;

fn seed_values(seed: u64) -> impl Iterator<Item = u64> {
    iter::successors(Some((0u64, seed)), |&(i, v)| {
        Some((i + 1, F_64.wrapping_mul(v ^ (v >> 62)).wrapping_add(i + 1)))
    })
    .map(|t| t.1)
}

/// A 64-bit RNG that uses the Mersenne Twister algorithm.
///
/// Not suitable for anything security-related; it exists so that random
/// tree workloads can be replayed from a seed.
pub struct MersenneTwister64 {
    mt: Box<[u64; N_64]>,
    index: usize,
}

impl MersenneTwister64 {
    pub fn new(seed: u64) -> MersenneTwister64 {
        let mut rng = MersenneTwister64 {
            mt: Box::new([0; N_64]),
            index: N_64,
        };

        rng.seed(seed);
        rng
    }

    /// Re-initialize the generator with the given seed.
    pub fn seed(&mut self, seed: u64) {
        self.index = N_64;
        for (p, v) in self.mt.iter_mut().zip(seed_values(seed)) {
            *p = v;
        }
    }

    fn twist_word(mt: &[u64; N_64], i: usize, i2: usize) -> u64 {
        let x = (mt[i] & UPPER_MASK) | (mt[i + 1] & LOWER_MASK);
        mt[i2] ^ (x >> 1) ^ (A_64 * (x & 1))
    }

    // Generates the next block of internal state.
    fn twist(&mut self) {
        for i in 0..(N_64 - M_64) {
            self.mt[i] = Self::twist_word(&self.mt, i, i + M_64);
        }

        for i in (N_64 - M_64)..(N_64 - 1) {
            self.mt[i] = Self::twist_word(&self.mt, i, i + M_64 - N_64);
        }

        let x = (self.mt[N_64 - 1] & UPPER_MASK) | (self.mt[0] & LOWER_MASK);
        self.mt[N_64 - 1] = self.mt[M_64 - 1] ^ (x >> 1) ^ (A_64 * (x & 1));
        self.index = 0;
    }

    pub fn generate(&mut self) -> u64 {
        if self.index >= N_64 {
            self.twist();
        }

        let mut y = self.mt[self.index];
        y ^= (y >> U_64) & D_64;
        y ^= (y << S_64) & B_64;
        y ^= (y << T_64) & C_64;
        y ^= y >> L_64;

        self.index += 1;
        y
    }

    /// A value in `[0, bound)`. `bound` must be nonzero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "empty range");

        // Reject the top partial block so every residue is equally likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.generate();
            if v < zone {
                return v % bound;
            }
        }
    }

    /// A value in `[min, max]`.
    pub fn between(&mut self, min: u64, max: u64) -> u64 {
        assert!(min <= max, "invalid range ({} > {})", min, max);

        match (max - min).checked_add(1) {
            Some(span) => min + self.below(span),
            None => self.generate(),
        }
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Iterator for MersenneTwister64 {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::prelude::v1::*;

    #[test]
    fn test_rng() {
        let rng = MersenneTwister64::new(0x1234567887654321u64);
        for (v1, v2) in TEST_DATA.iter().zip(rng) {
            assert_eq!(*v1, v2);
        }
    }

    #[test]
    fn reseed_replays_sequence() {
        let mut rng = MersenneTwister64::new(7);
        let first: Vec<u64> = (0..400).map(|_| rng.generate()).collect();

        rng.seed(7);
        let second: Vec<u64> = (0..400).map(|_| rng.generate()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn between_stays_in_range() {
        let mut rng = MersenneTwister64::new(1);
        for _ in 0..1000 {
            let v = rng.between(10, 20);
            assert!((10..=20).contains(&v), "{} out of range", v);
        }

        assert_eq!(rng.between(5, 5), 5);
        rng.between(0, u64::MAX);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = MersenneTwister64::new(3);
        let mut items: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut items);

        let set: BTreeSet<u32> = items.iter().copied().collect();
        assert_eq!(set.len(), 100);
        assert_ne!(items, (0..100).collect::<Vec<u32>>());
    }

    const TEST_DATA: [u64; 10] = [
        8582126092704055981,
        3457164283249173755,
        13739405504153195,
        5976700750132269349,
        9202233740427162441,
        6030661401690652345,
        12536042451692607026,
        15903657761848205050,
        10834260931505329724,
        11682301729489872455,
    ];
}

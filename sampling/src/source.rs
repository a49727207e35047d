use rand_chacha::ChaCha8Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use rug::Integer;
use rug::integer::Order;

/// Deterministic randomness source, seeded once and branched per consumer.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh 32-byte seed from the operating system.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_os() -> Source {
        Source::new(new_seed())
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Returns an integer uniformly distributed in \[0, 2^bits).
    pub fn next_integer_bits(&mut self, bits: u32) -> Integer {
        if bits == 0 {
            return Integer::new();
        }
        let nbytes: usize = bits.div_ceil(8) as usize;
        let mut bytes: Vec<u8> = vec![0u8; nbytes];
        self.source.fill_bytes(&mut bytes);
        let excess: u32 = 8 * nbytes as u32 - bits;
        // Little-endian digits: the top byte is the last one.
        bytes[nbytes - 1] &= 0xFFu8 >> excess;
        Integer::from_digits(&bytes, Order::Lsf)
    }

    /// Returns an integer uniformly distributed in \[0, bound).
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn next_integer_below(&mut self, bound: &Integer) -> Integer {
        assert!(*bound > 0, "invalid bound: {} <= 0", bound);
        let bits: u32 = bound.significant_bits();
        let mut x: Integer = self.next_integer_bits(bits);
        while x >= *bound {
            x = self.next_integer_bits(bits);
        }
        x
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

impl CryptoRng for Source {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        (0..16).for_each(|_| assert_eq!(a.next_u64(), b.next_u64()));
        assert_eq!(a.next_integer_bits(300), b.next_integer_bits(300));
    }

    #[test]
    fn integer_bits_bounded() {
        let mut source: Source = Source::new([0u8; 32]);
        [1u32, 7, 8, 9, 63, 64, 65, 257].iter().for_each(|&bits| {
            (0..64).for_each(|_| {
                let x: Integer = source.next_integer_bits(bits);
                assert!(x >= 0);
                assert!(x.significant_bits() <= bits, "bits={} x={}", bits, x);
            });
        });
        assert_eq!(source.next_integer_bits(0), 0);
    }

    #[test]
    fn integer_below_bounded() {
        let mut source: Source = Source::new([1u8; 32]);
        let bound: Integer = Integer::from(1000);
        let mut seen_high: bool = false;
        (0..2000).for_each(|_| {
            let x: Integer = source.next_integer_below(&bound);
            assert!(x >= 0 && x < bound);
            seen_high |= x >= 500;
        });
        assert!(seen_high);
        assert_eq!(source.next_integer_below(&Integer::from(1)), 0);
    }

    #[test]
    fn branches_diverge() {
        let mut root: Source = Source::new([3u8; 32]);
        let mut a: Source = root.branch();
        let mut b: Source = root.branch();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}

//! This file contains the pseudorandom word generator that the benchmarks,
//! the demos and the tests use to build large operands.

// Linear-feedback shift register. We use this as a random number generator for
// tests and for `BigInt::pseudorandom`.
pub struct Lfsr {
    state: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    /// Generate a new LFSR number generator that starts with a specific state.
    pub fn new_with_seed(seed: u32) -> Lfsr {
        Lfsr {
            state: 0x13371337 ^ seed,
        }
    }

    pub fn next(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    /// Returns the next 32 pseudorandom bits.
    pub fn get32(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.next();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    /// Returns a pseudorandom decimal digit.
    #[cfg(test)]
    pub fn get_digit(&mut self) -> u8 {
        (self.get32() % 10) as u8
    }
}

// Implement `Iterator` for `Lfsr`. The items are whole words.
impl Iterator for Lfsr {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.get32())
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get32();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_repetition() {
    let mut lfsr = Lfsr::new();
    let first = lfsr.get32();
    let second = lfsr.get32();

    // Make sure that the items don't repeat themselves too frequently.
    for _ in 0..30000 {
        assert_ne!(first, lfsr.get32());
        assert_ne!(second, lfsr.get32());
    }
}

#[test]
fn test_digit_spread() {
    let mut lfsr = Lfsr::new_with_seed(7);
    let mut seen = [0usize; 10];
    for _ in 0..5000 {
        seen[lfsr.get_digit() as usize] += 1;
    }
    // Every digit shows up, and none of them dominates.
    for count in seen {
        assert!(count > 200, "digit distribution is skewed: {:?}", seen);
    }
}

//! This module contains the implementation of the big-int data structure, the
//! in-place growth primitives that the decimal parser builds on, and the
//! schoolbook multiplication.

extern crate alloc;

use core::ops::{Deref, Mul, MulAssign};

use alloc::vec::Vec;

use crate::Error;

/// The unit of the base 2^32 positional representation.
pub type Word = u32;

/// Wide enough to hold `Word * Word + Word + Word` without overflow.
type DoubleWord = u64;

const WORD_BITS: u32 = Word::BITS;

/// This is an arbitrary-size unsigned big number implementation. The BigInt
/// data structure is backed by `Vec<u32>`, least significant word first, and
/// the data is heap-allocated.
///
/// Every BigInt handed out by this crate is normalized: the most significant
/// word is non-zero, except for the value zero, which is a single zero word.
///
/// # Examples
///
/// ```
///    use bigmult::BigInt;
///
///    let x: BigInt = "4294967295".parse().unwrap();
///    let y = BigInt::from_u64(2);
///
///    let z = x.try_mul(&y).unwrap();
///
///    // Prints: 0x1FFFFFFFE
///    println!("{}", z);
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    parts: Vec<Word>,
}

impl BigInt {
    /// Create a new zero big int number.
    pub fn zero() -> Self {
        BigInt { parts: Vec::from([0]) }
    }

    /// Create a number with `words` zero words. The storage is reserved up
    /// front, and a failed reservation is reported instead of aborting.
    /// A request for zero words still produces the single word that every
    /// number carries.
    pub fn with_words(words: usize) -> Result<Self, Error> {
        let words = words.max(1);
        let mut parts = Vec::new();
        parts.try_reserve_exact(words)?;
        parts.resize(words, 0);
        Ok(BigInt { parts })
    }

    /// Create a number with the value `val`.
    pub fn from_u64(val: u64) -> Self {
        let mut x = BigInt {
            parts: Vec::from([val as Word, (val >> WORD_BITS) as Word]),
        };
        x.normalize();
        x
    }

    /// Create a pseudorandom number with `parts` number of words.
    /// The random number generator is initialized with `seed`.
    pub fn pseudorandom(parts: usize, seed: u32) -> Self {
        use crate::utils::Lfsr;
        let mut ll = Lfsr::new_with_seed(seed);

        BigInt::from_iter(&mut ll, parts)
    }

    // Construct a bigint from the words in 'parts'.
    pub fn from_parts(parts: &[Word]) -> Self {
        let mut x = BigInt {
            parts: parts.to_vec(),
        };
        if x.parts.is_empty() {
            x.parts.push(0);
        }
        x.normalize();
        x
    }

    // Construct a bigint from an iterator that generates words.
    // Take the first 'k' words.
    pub fn from_iter<I: Iterator<Item = Word>>(iter: &mut I, k: usize) -> Self {
        let parts: Vec<Word> = iter.take(k).collect();
        Self::from_parts(&parts)
    }

    /// Returns the number of words in use.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the storage of this number was released.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the word at idx `idx`.
    pub fn get_part(&self, idx: usize) -> Word {
        self.parts[idx]
    }

    /// Returns the value as a u64, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.parts[..] {
            [] => Some(0),
            [lo] => Some(lo as u64),
            [lo, hi] => Some(((hi as u64) << WORD_BITS) | lo as u64),
            _ => None,
        }
    }

    /// Return true if the number is equal to zero. A released number has no
    /// words and is also considered zero.
    pub fn is_zero(&self) -> bool {
        self.is_empty() || (self.len() == 1 && self.parts[0] == 0)
    }

    /// Returns true if there are no leading zero words, apart from the single
    /// word that represents zero.
    pub fn is_normalized(&self) -> bool {
        match self.parts.last() {
            Some(&top) => top != 0 || self.len() == 1,
            None => false,
        }
    }

    /// Remove the leading zero words from the bigint, keeping at least one.
    pub fn normalize(&mut self) {
        while self.len() > 1 && self.parts[self.len() - 1] == 0 {
            self.parts.pop();
        }
    }

    /// Free the storage of this number. The number has no words after this
    /// call and must be rebuilt (for example with `reinit`) before reuse.
    pub fn release(&mut self) {
        self.parts = Vec::new();
    }

    /// Reset a number, released or not, to the value zero.
    pub fn reinit(&mut self) -> Result<(), Error> {
        self.parts.clear();
        self.parts.try_reserve(1)?;
        self.parts.push(0);
        Ok(())
    }

    /// Append one word that holds the final carry of an in-place operation.
    fn push_carry(&mut self, carry: DoubleWord) -> Result<(), Error> {
        debug_assert!(carry != 0 && carry <= Word::MAX as DoubleWord);
        self.parts.try_reserve(1)?;
        self.parts.push(carry as Word);
        Ok(())
    }

    /// Multiply this number by the single word `k`, in place. The number
    /// grows by exactly one word when the product does not fit. The number
    /// must not be released.
    pub fn inplace_mul_small(&mut self, k: Word) -> Result<(), Error> {
        debug_assert!(!self.is_empty(), "use of a released number");
        let mut carry: DoubleWord = 0;
        for part in self.parts.iter_mut() {
            let cur = *part as DoubleWord * k as DoubleWord + carry;
            *part = cur as Word;
            carry = cur >> WORD_BITS;
        }
        if carry != 0 {
            self.push_carry(carry)?;
        }
        Ok(())
    }

    /// Add the single word `k` to this number, in place. The number grows by
    /// exactly one word when the carry runs past the top word. The number
    /// must not be released.
    pub fn inplace_add_small(&mut self, k: Word) -> Result<(), Error> {
        debug_assert!(!self.is_empty(), "use of a released number");
        let mut carry = k as DoubleWord;
        for part in self.parts.iter_mut() {
            if carry == 0 {
                break;
            }
            let cur = *part as DoubleWord + carry;
            *part = cur as Word;
            carry = cur >> WORD_BITS;
        }
        if carry != 0 {
            self.push_carry(carry)?;
        }
        Ok(())
    }

    /// Multiply self by `rhs` and return the product as a new number. Neither
    /// operand is modified. Fails only if the product can't be allocated.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, Error> {
        let mut product = Self::with_words(self.len() + rhs.len())?;
        Self::mul_slices(&self.parts, &rhs.parts, &mut product.parts);
        product.normalize();
        Ok(product)
    }

    /// Schoolbook multiplication of `lhs` and `rhs` into `out`, which must be
    /// zeroed and hold at least `lhs.len() + rhs.len()` words.
    fn mul_slices(lhs: &[Word], rhs: &[Word], out: &mut [Word]) {
        debug_assert!(out.len() >= lhs.len() + rhs.len());
        let m = rhs.len();

        for (i, &a) in lhs.iter().enumerate() {
            let a = a as DoubleWord;
            let mut carry: DoubleWord = 0;

            for (j, &b) in rhs.iter().enumerate() {
                // (2^32-1) + (2^32-1)^2 + (2^32-1) == 2^64 - 1, no overflow.
                let cur = out[i + j] as DoubleWord + a * b as DoubleWord + carry;
                out[i + j] = cur as Word;
                carry = cur >> WORD_BITS;
            }

            // Nothing was written to this word yet in this row.
            debug_assert_eq!(out[i + m], 0);
            out[i + m] = carry as Word;
        }
    }

    /// Print the words of the number, most significant first.
    #[cfg(feature = "std")]
    pub fn dump(&self) {
        use std::println;
        println!("{:08X?}", self.parts.iter().rev().collect::<Vec<_>>());
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Deref for BigInt {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.parts[..]
    }
}

/// The operator form of `try_mul`. Allocation failure aborts, like any other
/// `Vec` growth.
fn mul_infallible(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let mut parts: Vec<Word> = alloc::vec![0; (lhs.len() + rhs.len()).max(1)];
    BigInt::mul_slices(lhs, rhs, &mut parts);
    let mut product = BigInt { parts };
    product.normalize();
    product
}

// Self * Self
impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_infallible(&self, &rhs)
    }
}

// Self * &Self -> Self
impl Mul<&Self> for BigInt {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        mul_infallible(&self, rhs)
    }
}

// &Self * &Self -> Self
impl Mul<Self> for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: Self) -> Self::Output {
        mul_infallible(self, rhs)
    }
}

// Self * u64 -> Self
impl Mul<u64> for BigInt {
    type Output = Self;
    fn mul(self, rhs: u64) -> Self::Output {
        mul_infallible(&self, &Self::from_u64(rhs))
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = mul_infallible(self, &rhs);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = mul_infallible(self, rhs);
    }
}

#[cfg(test)]
fn to_reference(x: &BigInt) -> num_bigint::BigUint {
    num_bigint::BigUint::from_slice(x)
}

#[test]
fn test_create() {
    let x = BigInt::with_words(4).unwrap();
    assert_eq!(x.len(), 4);
    assert!(x.iter().all(|&w| w == 0));

    // A zero-word request still yields the single zero word.
    let x = BigInt::with_words(0).unwrap();
    assert_eq!(x.len(), 1);
    assert!(x.is_zero());
    assert!(x.is_normalized());
}

#[test]
fn test_create_fails() {
    // The reservation overflows, so nothing is allocated and the failure is
    // reported as an error.
    let err = BigInt::with_words(usize::MAX).unwrap_err();
    assert!(err.is_allocation());
    assert!(!err.is_invalid_format());
    assert_eq!(err, Error::AllocationFailed);
}

#[test]
fn test_normalize() {
    let mut x = BigInt::with_words(3).unwrap();
    assert!(!x.is_normalized());
    x.normalize();
    assert_eq!(x.len(), 1);
    assert!(x.is_zero());
    x.normalize();
    assert_eq!(x.len(), 1);

    let mut x = BigInt {
        parts: Vec::from([5, 0, 7, 0, 0]),
    };
    x.normalize();
    assert_eq!(&x[..], &[5, 0, 7]);
    x.normalize();
    assert_eq!(&x[..], &[5, 0, 7]);
    assert!(x.is_normalized());

    // Constructors normalize their input.
    assert_eq!(BigInt::from_parts(&[1, 0, 0]).len(), 1);
    assert_eq!(BigInt::from_parts(&[]).len(), 1);
    assert_eq!(BigInt::from_u64(0xffff_ffff).len(), 1);
    assert_eq!(BigInt::from_u64(0x1_0000_0000).len(), 2);
}

#[test]
fn test_is_zero() {
    assert!(BigInt::zero().is_zero());
    assert!(BigInt::default().is_zero());
    assert!(!BigInt::from_u64(1).is_zero());
    assert!(!BigInt::from_parts(&[0, 1]).is_zero());
}

#[test]
fn test_release() {
    let mut x = BigInt::from_u64(0xdead_beef_cafe);
    x.release();
    assert!(x.is_empty());
    assert_eq!(x.len(), 0);
    assert!(x.is_zero());
    assert!(!x.is_normalized());

    x.reinit().unwrap();
    assert_eq!(x, BigInt::zero());
    x.inplace_add_small(9).unwrap();
    assert_eq!(x.to_u64(), Some(9));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "use of a released number")]
fn test_add_small_released() {
    let mut x = BigInt::from_u64(3);
    x.release();
    let _ = x.inplace_add_small(1);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "use of a released number")]
fn test_mul_small_released() {
    let mut x = BigInt::from_u64(3);
    x.release();
    let _ = x.inplace_mul_small(10);
}

#[test]
fn test_mul_small() {
    let mut x = BigInt::from_u64(12345);
    x.inplace_mul_small(10).unwrap();
    assert_eq!(x.to_u64(), Some(123450));

    // Carry into a new word.
    let mut x = BigInt::from_u64(0xffff_ffff);
    x.inplace_mul_small(10).unwrap();
    assert_eq!(&x[..], &[0xffff_fff6, 0x9]);

    // The full word range for the factor.
    let mut x = BigInt::from_parts(&[0xffff_ffff, 0xffff_ffff]);
    x.inplace_mul_small(0xffff_ffff).unwrap();
    assert_eq!(&x[..], &[0x1, 0xffff_ffff, 0xffff_fffe]);
    assert!(x.is_normalized());

    // Multiplying by zero leaves zero words behind.
    let mut x = BigInt::from_parts(&[1, 2, 3]);
    x.inplace_mul_small(0).unwrap();
    assert!(x.iter().all(|&w| w == 0));
    x.normalize();
    assert!(x.is_zero());
}

#[test]
fn test_add_small() {
    let mut x = BigInt::from_u64(41);
    x.inplace_add_small(1).unwrap();
    assert_eq!(x.to_u64(), Some(42));

    // Ripple the carry through every word.
    let mut x = BigInt::from_parts(&[0xffff_ffff, 0xffff_ffff]);
    x.inplace_add_small(1).unwrap();
    assert_eq!(&x[..], &[0, 0, 1]);

    // Stop as soon as the carry is absorbed.
    let mut x = BigInt::from_parts(&[0xffff_fffe, 0xffff_ffff]);
    x.inplace_add_small(1).unwrap();
    assert_eq!(&x[..], &[0xffff_ffff, 0xffff_ffff]);

    let mut x = BigInt::zero();
    x.inplace_add_small(0xffff_ffff).unwrap();
    x.inplace_add_small(0xffff_ffff).unwrap();
    assert_eq!(x.to_u64(), Some(0x1_ffff_fffe));
}

#[test]
fn test_mul_basic() {
    let x = BigInt::from_u64(0xffff_ffff);
    let y = BigInt::from_u64(2);
    let z = x.try_mul(&y).unwrap();
    assert_eq!(z.to_u64(), Some(0x1_ffff_fffe));

    let x = BigInt::from_u64(100000);
    let z = x.try_mul(&x).unwrap();
    assert_eq!(z.to_u64(), Some(10_000_000_000));

    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    let x = BigInt::from_u64(u64::MAX);
    let z = x.try_mul(&x).unwrap();
    assert_eq!(&z[..], &[0x1, 0x0, 0xffff_fffe, 0xffff_ffff]);

    // The operands are left alone.
    assert_eq!(x.to_u64(), Some(u64::MAX));
}

#[test]
fn test_mul_zero_and_one() {
    let x = BigInt::pseudorandom(17, 99);
    let zero = BigInt::zero();
    let one = BigInt::from_u64(1);

    let z = x.try_mul(&zero).unwrap();
    assert!(z.is_zero());
    assert_eq!(z.len(), 1);
    assert!(zero.try_mul(&x).unwrap().is_zero());
    assert_eq!(x.try_mul(&one).unwrap(), x);
    assert_eq!(one.try_mul(&x).unwrap(), x);
}

#[test]
fn test_mul_released_operand() {
    let x = BigInt::from_u64(12345);
    let mut y = BigInt::from_u64(678);
    y.release();
    let z = x.try_mul(&y).unwrap();
    assert!(z.is_zero());
    assert!(z.is_normalized());
    assert!(y.try_mul(&y).unwrap().is_zero());
}

#[test]
fn test_mul_against_reference() {
    use crate::utils::Lfsr;
    let mut ll = Lfsr::new();

    // Compare the product of two random numbers of lengths 'l' and 'r' with
    // the one computed by num-bigint.
    fn test_sizes(l: usize, r: usize, ll: &mut Lfsr) {
        let a = BigInt::from_iter(ll, l);
        let b = BigInt::from_iter(ll, r);
        let res = a.try_mul(&b).unwrap();
        assert!(res.is_normalized());
        assert_eq!(to_reference(&res), to_reference(&a) * to_reference(&b));
        // Multiplication is commutative.
        assert_eq!(res, b.try_mul(&a).unwrap());
    }

    test_sizes(1, 1, &mut ll);
    test_sizes(100, 1, &mut ll);
    test_sizes(1, 100, &mut ll);
    test_sizes(100, 100, &mut ll);
    test_sizes(300, 301, &mut ll);

    for i in 1..20 {
        for j in 1..20 {
            test_sizes(i, j, &mut ll);
        }
    }
}

#[test]
fn test_mul_all_ones() {
    // Every partial product and every carry is at its maximum here.
    for n in 1..40 {
        let ones = alloc::vec![Word::MAX; n];
        let a = BigInt::from_parts(&ones);
        let res = a.try_mul(&a).unwrap();
        assert_eq!(res.len(), 2 * n);
        assert_eq!(to_reference(&res), to_reference(&a) * to_reference(&a));
    }
}

#[test]
fn test_bigint_operators() {
    type BI = BigInt;
    let x = BI::from_u64(10);
    let y = BI::from_u64(7);

    assert_eq!((&x * &y).to_u64(), Some(70));
    assert_eq!((x.clone() * &y).to_u64(), Some(70));
    assert_eq!((x.clone() * y.clone()).to_u64(), Some(70));
    assert_eq!((x.clone() * 3).to_u64(), Some(30));

    let mut z = x.clone();
    z *= &y;
    z *= y;
    assert_eq!(z.to_u64(), Some(490));

    let a = BI::pseudorandom(40, 1);
    let b = BI::pseudorandom(25, 2);
    assert_eq!(&a * &b, a.try_mul(&b).unwrap());
}

#[test]
fn test_pseudorandom() {
    type BI = BigInt;
    let a = BI::pseudorandom(10, 5);
    let b = BI::pseudorandom(10, 5);
    let c = BI::pseudorandom(10, 6);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.is_normalized());
}

#[test]
fn test_to_u64() {
    assert_eq!(BigInt::zero().to_u64(), Some(0));
    assert_eq!(BigInt::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(BigInt::from_parts(&[1, 2, 3]).to_u64(), None);
}

//! This module contains the implementation of string conversion: parsing
//! decimal strings into numbers and printing numbers as hexadecimal.

extern crate alloc;

use super::bigint::BigInt;
use crate::Error;
use alloc::string::String;
use core::fmt::{Display, UpperHex, Write};
use core::str::FromStr;

impl BigInt {
    /// Parse a non-negative decimal number. The input must be a non-empty
    /// sequence of ASCII digits with no sign and no whitespace. Leading zeros
    /// are accepted ("007" is 7).
    pub fn from_decimal(value: &str) -> Result<Self, Error> {
        if value.is_empty() {
            return Err(Error::InputEmpty);
        }
        // Reject the input before doing any arithmetic on it.
        if let Some((index, found)) =
            value.char_indices().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(Error::InvalidDigit { index, found });
        }

        // Horner's scheme: num = num * 10 + digit.
        let mut num = BigInt::zero();
        for digit in value.bytes() {
            num.inplace_mul_small(10)?;
            num.inplace_add_small((digit - b'0') as u32)?;
        }
        num.normalize();
        Ok(num)
    }

    /// Prints the bigint as an uppercase hexadecimal number with the `0x`
    /// prefix, for example `0x1FFFFFFFE`. Zero is printed as `0x0`.
    pub fn as_hex(&self) -> String {
        let mut sb = String::new();
        // Writing to a String can't fail.
        let _ = write!(sb, "{:#X}", self);
        sb
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        let top_non_zero = match self.iter().rposition(|&part| part != 0) {
            Some(idx) => idx,
            None => return f.write_str("0"),
        };

        // Don't print leading zeros for the first word.
        write!(f, "{:X}", self.get_part(top_non_zero))?;

        // Print leading zeros for the rest of the words.
        for part in self[..top_non_zero].iter().rev() {
            write!(f, "{:08X}", part)?;
        }
        Ok(())
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#X}", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(value)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

/// Multiply two decimal numbers and return the product in hexadecimal.
///
/// ```
///    assert_eq!(
///        bigmult::multiply_decimal("4294967295", "2").unwrap(),
///        "0x1FFFFFFFE"
///    );
/// ```
pub fn multiply_decimal(lhs: &str, rhs: &str) -> Result<String, Error> {
    let lhs = BigInt::from_decimal(lhs)?;
    let rhs = BigInt::from_decimal(rhs)?;
    Ok(lhs.try_mul(&rhs)?.as_hex())
}

#[test]
fn test_from_decimal() {
    let parse = |s: &str| BigInt::from_decimal(s).unwrap();

    assert_eq!(parse("0").to_u64(), Some(0));
    assert_eq!(parse("7").to_u64(), Some(7));
    assert_eq!(parse("4294967295").to_u64(), Some(0xffff_ffff));
    assert_eq!(parse("4294967296").to_u64(), Some(0x1_0000_0000));
    assert_eq!(parse("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(&parse("18446744073709551616")[..], &[0, 0, 1]);

    // Leading zeros are absorbed.
    assert_eq!(parse("007"), parse("7"));
    assert_eq!(parse("000123"), parse("123"));
    assert_eq!(parse("0000"), BigInt::zero());
    assert_eq!(parse("0000").len(), 1);
    assert_eq!(parse("00000000000000000000000000000001").len(), 1);
}

#[test]
fn test_from_decimal_rejects() {
    assert_eq!(BigInt::from_decimal(""), Err(Error::InputEmpty));
    assert_eq!(
        BigInt::from_decimal("12a3"),
        Err(Error::InvalidDigit {
            index: 2,
            found: 'a'
        })
    );
    assert_eq!(
        BigInt::from_decimal("-5"),
        Err(Error::InvalidDigit {
            index: 0,
            found: '-'
        })
    );
    assert_eq!(
        BigInt::from_decimal("+5"),
        Err(Error::InvalidDigit {
            index: 0,
            found: '+'
        })
    );
    for bad in [" 1", "1 ", "1.0", "0x10", "1_000", "٣", "12\n"] {
        let err = BigInt::from_decimal(bad).unwrap_err();
        assert!(err.is_invalid_format(), "accepted {:?}", bad);
    }

    // The trait entry points share the same validation.
    assert!("".parse::<BigInt>().is_err());
    assert!(BigInt::try_from("9x").is_err());
    assert_eq!("42".parse::<BigInt>().unwrap().to_u64(), Some(42));
}

#[test]
fn test_as_hex() {
    assert_eq!(BigInt::zero().as_hex(), "0x0");
    assert_eq!(BigInt::from_u64(4).as_hex(), "0x4");
    assert_eq!(BigInt::from_u64(0xabc).as_hex(), "0xABC");
    assert_eq!(BigInt::from_u64(0x1_ffff_fffe).as_hex(), "0x1FFFFFFFE");
    assert_eq!(BigInt::from_parts(&[0x5, 0x0, 0x1]).as_hex(), "0x10000000000000005");
    assert_eq!(BigInt::from_u64(10_000_000_000).as_hex(), "0x2540BE400");

    let mut released = BigInt::from_u64(99);
    released.release();
    assert_eq!(released.as_hex(), "0x0");
}

#[test]
fn test_hex_formatting() {
    use alloc::format;

    let x = BigInt::from_parts(&[0xdeadbeef, 0x1]);
    assert_eq!(format!("{}", x), "0x1DEADBEEF");
    assert_eq!(format!("{:X}", x), "1DEADBEEF");
    assert_eq!(format!("{:#X}", x), "0x1DEADBEEF");
    assert_eq!(format!("{:X}", BigInt::zero()), "0");
}

#[test]
fn test_multiply_decimal() {
    assert_eq!(
        multiply_decimal("100000", "100000").unwrap(),
        "0x2540BE400"
    );
    assert_eq!(multiply_decimal("0", "999999999999999999").unwrap(), "0x0");
    assert_eq!(multiply_decimal("2", "2").unwrap(), "0x4");
    assert_eq!(multiply_decimal("4294967295", "2").unwrap(), "0x1FFFFFFFE");
    assert_eq!(
        multiply_decimal("18446744073709551616", "18446744073709551616")
            .unwrap(),
        "0x100000000000000000000000000000000"
    );
    assert!(multiply_decimal("12", "-1").unwrap_err().is_invalid_format());
    assert!(multiply_decimal("", "1").unwrap_err().is_invalid_format());
}

#[cfg(test)]
fn random_decimal(lfsr: &mut crate::utils::Lfsr, len: usize) -> String {
    let mut sb = String::new();
    for _ in 0..len {
        sb.push(char::from(b'0' + lfsr.get_digit()));
    }
    sb
}

#[test]
fn test_round_trip_against_reference() {
    use crate::utils::Lfsr;
    use alloc::format;
    use num_bigint::BigUint;

    let mut lfsr = Lfsr::new();
    for len in 1..300 {
        let digits = random_decimal(&mut lfsr, len);
        let num = BigInt::from_decimal(&digits).unwrap();
        assert!(num.is_normalized(), "{} is not normalized", digits);

        let expected = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap();
        assert_eq!(num.as_hex(), format!("0x{:X}", expected), "{}", digits);
    }
}

#[test]
fn test_product_properties() {
    use crate::utils::Lfsr;
    use alloc::format;
    use num_bigint::BigUint;

    let mut lfsr = Lfsr::new_with_seed(1995);
    for i in 0..100 {
        let a = random_decimal(&mut lfsr, 1 + i * 3);
        let b = random_decimal(&mut lfsr, 1 + (i * 7) % 120);

        let ab = multiply_decimal(&a, &b).unwrap();
        let ba = multiply_decimal(&b, &a).unwrap();
        assert_eq!(ab, ba);

        let expected = BigUint::parse_bytes(a.as_bytes(), 10).unwrap()
            * BigUint::parse_bytes(b.as_bytes(), 10).unwrap();
        assert_eq!(ab, format!("0x{:X}", expected));

        // Multiplicative identity and zero.
        let a_hex = BigInt::from_decimal(&a).unwrap().as_hex();
        assert_eq!(multiply_decimal(&a, "1").unwrap(), a_hex);
        assert_eq!(multiply_decimal(&a, "0").unwrap(), "0x0");

        let product = BigInt::from_decimal(&a)
            .unwrap()
            .try_mul(&BigInt::from_decimal(&b).unwrap())
            .unwrap();
        assert!(product.is_normalized());
    }
}

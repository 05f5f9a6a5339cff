// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the two's-complement binary/hexadecimal text codec.
//!
//! Binary and hexadecimal literals use two's-complement semantics with
//! minimum canonical width: the leading bit (or, for hex, the leading
//! digit's high bit) carries the sign, and formatting always produces the
//! shortest string that round-trips to the same value.

use super::bigint_core::BigInt;

/// Describes why a binary or hexadecimal two's-complement string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TwosComplementParseError {
    /// The digit body (after the `0b`/`0x` prefix) was empty.
    Empty,
    /// A character outside the digit alphabet for the given base was found.
    InvalidDigit,
}

impl std::fmt::Display for TwosComplementParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TwosComplementParseError::Empty => write!(f, "two's-complement digit body is empty"),
            TwosComplementParseError::InvalidDigit => {
                write!(f, "two's-complement digit body contains an invalid digit")
            }
        }
    }
}

impl std::error::Error for TwosComplementParseError {}

fn binary_digit_value(c: char) -> Option<u32> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Parses `digits` (the body after the `0b`/`0x` prefix has been stripped) as
/// an unsigned value in `base`, using `digit_value` to map each character.
fn parse_unsigned(
    digits: &str,
    base: u32,
    digit_value: impl Fn(char) -> Option<u32>,
) -> Result<BigInt, TwosComplementParseError> {
    if digits.is_empty() {
        return Err(TwosComplementParseError::Empty);
    }

    let base_bigint = BigInt::from(base);
    let mut value = BigInt::zero();
    for c in digits.chars() {
        let d = digit_value(c).ok_or(TwosComplementParseError::InvalidDigit)?;
        value = &value * &base_bigint + BigInt::from(d);
    }
    Ok(value)
}

impl BigInt {
    /// Parses the digit body of a `0b…` two's-complement binary literal.
    pub fn parse_binary(digits: &str) -> Result<BigInt, TwosComplementParseError> {
        if digits.is_empty() {
            return Err(TwosComplementParseError::Empty);
        }

        let unsigned_all = parse_unsigned(digits, 2, binary_digit_value)?;
        let n_bits = digits.len();
        let leading_bit_is_one = digits.starts_with('1');

        Ok(if leading_bit_is_one {
            unsigned_all - (BigInt::one() << n_bits)
        } else {
            unsigned_all
        })
    }

    /// Parses the digit body of a `0x…` two's-complement hexadecimal literal.
    pub fn parse_hexadecimal(digits: &str) -> Result<BigInt, TwosComplementParseError> {
        if digits.is_empty() {
            return Err(TwosComplementParseError::Empty);
        }

        let unsigned_all = parse_unsigned(digits, 16, hex_digit_value)?;
        let n_bits = digits.len() * 4;
        let leading_digit = hex_digit_value(digits.chars().next().unwrap())
            .ok_or(TwosComplementParseError::InvalidDigit)?;
        let leading_bit_is_one = leading_digit >= 8;

        Ok(if leading_bit_is_one {
            unsigned_all - (BigInt::one() << n_bits)
        } else {
            unsigned_all
        })
    }

    /// Returns the canonical minimum bit width needed to represent `self` in
    /// two's complement (the binary literal's width, including the sign bit).
    fn canonical_twos_complement_bit_width(&self) -> usize {
        debug_assert!(!self.is_zero());

        if self.is_negative() {
            let magnitude_minus_one = -self.clone() - BigInt::one();
            magnitude_minus_one.bit_len() + 1
        } else {
            self.bit_len() + 1
        }
    }

    /// Returns the non-negative two's-complement bit pattern of `self` at the
    /// given `width`, as a `BigInt` in `[0, 2^width)`.
    fn twos_complement_pattern(&self, width: usize) -> BigInt {
        if self.is_negative() {
            (BigInt::one() << width) + self.clone()
        } else {
            self.clone()
        }
    }

    /// Extracts exactly `width_digits` digits of `value` in `base`, most
    /// significant first. `value` must be in `[0, base^width_digits)`.
    fn digits_in_base(mut value: BigInt, base: u32, width_digits: usize) -> Vec<u32> {
        let base_bigint = BigInt::from(base);
        let mut digits = Vec::with_capacity(width_digits);
        for _ in 0..width_digits {
            let (q, r) = value
                .checked_div_rem(&base_bigint)
                .expect("divisor is never zero");
            digits.push(r.to_u64().expect("digit always fits in u64") as u32);
            value = q;
        }
        digits.reverse();
        digits
    }

    /// Formats `self` as the canonical-minimum-width two's-complement binary
    /// literal, including the `0b` prefix.
    pub fn format_binary(&self) -> String {
        if self.is_zero() {
            return "0b0".to_string();
        }

        let width = self.canonical_twos_complement_bit_width();
        let pattern = self.twos_complement_pattern(width);
        let bits = Self::digits_in_base(pattern, 2, width);

        let mut s = String::with_capacity(width + 2);
        s.push_str("0b");
        for bit in bits {
            s.push(if bit == 1 { '1' } else { '0' });
        }
        s
    }

    /// Formats `self` as the canonical-minimum-width two's-complement
    /// hexadecimal literal, including the `0x` prefix.
    pub fn format_hexadecimal(&self) -> String {
        if self.is_zero() {
            return "0x0".to_string();
        }

        let bit_width = self.canonical_twos_complement_bit_width();
        let hex_width = (bit_width + 3) / 4;
        let pattern = self.twos_complement_pattern(hex_width * 4);
        let digits = Self::digits_in_base(pattern, 16, hex_width);

        let mut s = String::with_capacity(hex_width + 2);
        s.push_str("0x");
        for digit in digits {
            s.push(std::char::from_digit(digit, 16).unwrap());
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_format_binary() {
        let data = [(5i64, "0b0101"), (-1, "0b1"), (-6, "0b1010"), (0, "0b0")];
        for (n, expected) in data {
            assert_eq!(BigInt::from(n).format_binary(), expected);
        }
    }

    #[test]
    fn test_format_hexadecimal() {
        let data = [
            (255i64, "0x0ff"),
            (-1, "0xf"),
            (128, "0x080"),
            (127, "0x7f"),
            (8, "0x08"),
            (0, "0x0"),
        ];
        for (n, expected) in data {
            assert_eq!(BigInt::from(n).format_hexadecimal(), expected);
        }
    }

    #[test]
    fn test_parse_binary() {
        let data = [("0101", 5i64), ("1", -1), ("1010", -6), ("0", 0)];
        for (digits, expected) in data {
            assert_eq!(BigInt::parse_binary(digits).unwrap(), BigInt::from(expected));
        }
    }

    #[test]
    fn test_parse_hexadecimal() {
        let data = [("0ff", 255i64), ("f", -1), ("080", 128), ("7f", 127), ("08", 8)];
        for (digits, expected) in data {
            assert_eq!(
                BigInt::parse_hexadecimal(digits).unwrap(),
                BigInt::from(expected)
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BigInt::parse_binary(""), Err(TwosComplementParseError::Empty));
        assert_eq!(
            BigInt::parse_binary("012"),
            Err(TwosComplementParseError::InvalidDigit)
        );
        assert_eq!(
            BigInt::parse_hexadecimal("g"),
            Err(TwosComplementParseError::InvalidDigit)
        );
    }

    #[test]
    fn test_binary_round_trip() {
        for n in [0i64, 1, -1, 2, -2, 5, -6, 255, -255, 128, -128, 127, -127] {
            let big = BigInt::from(n);
            let formatted = big.format_binary();
            let digits = &formatted[2..];
            assert_eq!(BigInt::parse_binary(digits).unwrap(), big);
        }
    }

    #[test]
    fn test_hexadecimal_round_trip() {
        for n in [0i64, 1, -1, 2, -2, 5, -6, 255, -255, 128, -128, 127, -127] {
            let big = BigInt::from(n);
            let formatted = big.format_hexadecimal();
            let digits = &formatted[2..];
            assert_eq!(BigInt::parse_hexadecimal(digits).unwrap(), big);
        }
    }

    #[quickcheck]
    fn format_hexadecimal_matches_reference(dec: crate::testing_tools::quickcheck::BigIntDecimalString) -> bool {
        let n = BigInt::from_decimal_str(&dec.0).unwrap();
        n.format_hexadecimal() == devtools::twos_complement::reference_format_hex(&n.to_decimal_string())
    }

    #[test]
    fn test_canonical_minimality() {
        // truncating one leading character from the formatted output must
        // either fail to parse, or parse to a different value.
        for n in [5i64, -1, -6, 255, -255, 128, 127, 8] {
            let big = BigInt::from(n);

            let binary = big.format_binary();
            let binary_digits = &binary[2..];
            if binary_digits.len() > 1 {
                let truncated = &binary_digits[1..];
                let reparsed = BigInt::parse_binary(truncated);
                assert_ne!(reparsed, Ok(big.clone()));
            }

            let hex = big.format_hexadecimal();
            let hex_digits = &hex[2..];
            if hex_digits.len() > 1 {
                let truncated = &hex_digits[1..];
                let reparsed = BigInt::parse_hexadecimal(truncated);
                assert_ne!(reparsed, Ok(big.clone()));
            }
        }
    }
}

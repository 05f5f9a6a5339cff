// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements decimal text conversions.

use super::bigint_core::{BigInt, Sign};

/// Describes why a decimal string could not be parsed into a `BigInt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecimalParseError {
    /// The input was empty, or contained a bare sign with no digits.
    Empty,
    /// A byte other than an ASCII digit (and an optional leading sign) was found.
    InvalidDigit,
}

impl std::fmt::Display for DecimalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecimalParseError::Empty => write!(f, "decimal string is empty"),
            DecimalParseError::InvalidDigit => write!(f, "decimal string contains an invalid digit"),
        }
    }
}

impl std::error::Error for DecimalParseError {}

impl BigInt {
    /// Parses a decimal string, e.g. `"-123"`, `"0"`, `"+7"`, into a `BigInt`.
    pub fn from_decimal_str(s: &str) -> Result<BigInt, DecimalParseError> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(DecimalParseError::Empty);
        }

        let (sign, digits) = match bytes[0] {
            b'-' => (Sign::Negative, &bytes[1..]),
            b'+' => (Sign::Positive, &bytes[1..]),
            _ => (Sign::Positive, bytes),
        };

        if digits.is_empty() {
            return Err(DecimalParseError::Empty);
        }
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(DecimalParseError::InvalidDigit);
        }

        let ten = BigInt::from(10u32);
        let mut acc = BigInt::zero();
        for &byte in digits {
            let digit = BigInt::from((byte - b'0') as u32);
            acc = &acc * &ten + &digit;
        }

        if acc.is_zero() {
            Ok(acc)
        } else {
            Ok(BigInt::new(acc.digits_storage, acc.digits_len, sign))
        }
    }

    /// Returns the decimal string representation of this big integer, e.g. `"-123"`.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let ten = BigInt::from(10u32);
        let mut n = BigInt::new(self.digits_storage.clone(), self.digits_len, Sign::Positive);
        let mut digits = Vec::new();
        while !n.is_zero() {
            let (q, r) = n.checked_div_rem(&ten).expect("divisor is never zero");
            let digit = r.to_u64().expect("remainder of /10 always fits in u64") as u8;
            digits.push(b'0' + digit);
            n = q;
        }
        if self.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();
        String::from_utf8(digits).expect("decimal digits are always valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_str() {
        let data = [
            ("0", 0i64),
            ("7", 7),
            ("-7", -7),
            ("+7", 7),
            ("123456789012345", 123456789012345),
            ("-123456789012345", -123456789012345),
        ];
        for (s, n) in data {
            assert_eq!(BigInt::from_decimal_str(s).unwrap(), BigInt::from(n));
        }
    }

    #[test]
    fn test_from_decimal_str_errors() {
        assert_eq!(BigInt::from_decimal_str(""), Err(DecimalParseError::Empty));
        assert_eq!(BigInt::from_decimal_str("-"), Err(DecimalParseError::Empty));
        assert_eq!(BigInt::from_decimal_str("12a"), Err(DecimalParseError::InvalidDigit));
        assert_eq!(BigInt::from_decimal_str("1 2"), Err(DecimalParseError::InvalidDigit));
    }

    #[test]
    fn test_to_decimal_string() {
        let data = [
            (0i64, "0"),
            (7, "7"),
            (-7, "-7"),
            (123456789012345, "123456789012345"),
            (-123456789012345, "-123456789012345"),
        ];
        for (n, expected) in data {
            assert_eq!(BigInt::from(n).to_decimal_string(), expected);
        }
    }

    #[test]
    fn test_decimal_round_trip() {
        let data = ["0", "1", "-1", "999999999999999999999999", "-999999999999999999999999"];
        for s in data {
            let n = BigInt::from_decimal_str(s).unwrap();
            assert_eq!(n.to_decimal_string(), s);
        }
    }
}

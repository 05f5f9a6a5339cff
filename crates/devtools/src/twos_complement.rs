// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A second, independently-sourced implementation of the canonical-minimum-width
//! two's-complement hex format, built on `num-bigint` instead of the crate's own
//! `BigInt`. Used only to cross-check `lightcalc`'s codec in tests.

use num_bigint::{BigInt, Sign};

/// Formats the decimal string `decimal` as a canonical-minimum-width
/// two's-complement hexadecimal literal, including the `0x` prefix.
pub fn reference_format_hex(decimal: &str) -> String {
    let value = BigInt::parse_bytes(decimal.as_bytes(), 10).expect("valid decimal string");

    if value == BigInt::from(0) {
        return "0x0".to_string();
    }

    let is_negative = value.sign() == Sign::Minus;
    let mut width_digits: usize = 1;
    loop {
        let bit_width = width_digits * 4;
        let modulus = BigInt::from(1) << bit_width;
        let pattern = if is_negative {
            &modulus + &value
        } else {
            value.clone()
        };

        // `pattern` only represents a valid bit pattern at this width once it
        // fits in `[0, modulus)`; otherwise this width is too narrow outright,
        // regardless of what its (meaningless) leading nibble would say.
        if pattern.sign() == Sign::Minus || pattern >= modulus {
            width_digits += 1;
            continue;
        }

        let leading_nibble = (&pattern >> (bit_width - 4)) & BigInt::from(0xf);
        let leading_nibble: u32 = leading_nibble.try_into().expect("nibble fits in u32");

        let canonical = if is_negative {
            leading_nibble >= 8
        } else {
            leading_nibble < 8
        };

        if canonical {
            let hex = pattern.to_str_radix(16);
            let padded = format!("{hex:0>width_digits$}");
            return format!("0x{padded}");
        }

        width_digits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format_hex() {
        let data = [
            ("255", "0x0ff"),
            ("-1", "0xf"),
            ("128", "0x080"),
            ("127", "0x7f"),
            ("8", "0x08"),
            ("0", "0x0"),
            ("5", "0x5"),
            ("-6", "0xa"),
        ];
        for (decimal, expected) in data {
            assert_eq!(reference_format_hex(decimal), expected);
        }
    }
}

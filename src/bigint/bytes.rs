// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts big-endian byte sequences to little-endian digit vectors, used by
//! the `u128`/`i128` constructors.

use crate::bigint::digit::{Digit, DIGIT_BYTES};
use std::borrow::Cow;

/// Creates a digit vector from its byte array representation `bytes`.
/// The digits in the vector are in big-endian order.
fn be_bytes_to_be_digits(bytes: &[u8]) -> Vec<Digit> {
    if bytes.is_empty() {
        return Vec::new();
    }

    let extend_n = DIGIT_BYTES as usize - bytes.len() % DIGIT_BYTES as usize;
    let bytes: Cow<[u8]> = if extend_n > 0 {
        // Inserts padding for digit alignment.
        let mut bytes = bytes.to_vec();
        bytes.extend(&vec![0; extend_n]);
        bytes.rotate_right(extend_n); // e.g., 123 => 0123
        bytes.into()
    } else {
        bytes.into()
    };

    let mut digits = Vec::with_capacity(bytes.len() / DIGIT_BYTES as usize);
    for chunk in bytes.chunks_exact(DIGIT_BYTES as usize) {
        let digit = Digit::from_be_bytes(chunk.try_into().unwrap());
        digits.push(digit);
    }

    digits
}

pub(crate) fn be_bytes_to_le_digits(bytes: &[u8]) -> Vec<Digit> {
    let mut digits = be_bytes_to_be_digits(bytes);
    digits.reverse();

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_bytes_to_le_digits() {
        assert_eq!(be_bytes_to_le_digits(&[]), Vec::<Digit>::new());
        assert_eq!(be_bytes_to_le_digits(&[1]), vec![1 as Digit]);
    }
}

// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::BigInt;
use super::digit::DIGIT_BITS;

impl BigInt {
    /// Converts this big integer to a `u64`, returning `None` if it doesn't fit
    /// (including when it is negative).
    pub(crate) fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }

        let digits = self.as_digits();
        let mut result: u128 = 0;
        for (i, &digit) in digits.iter().enumerate() {
            let shift = i as u32 * DIGIT_BITS;
            if shift >= u128::BITS {
                if digit != 0 {
                    return None;
                }
                continue;
            }
            result |= (digit as u128) << shift;
        }
        u64::try_from(result).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u64() {
        assert_eq!(BigInt::zero().to_u64(), Some(0));
        assert_eq!(BigInt::from(42u64).to_u64(), Some(42));
        assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigInt::from(-1i64).to_u64(), None);
        assert_eq!(BigInt::from(u128::MAX).to_u64(), None);
    }
}

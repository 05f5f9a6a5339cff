// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::{BigInt, Sign};

impl From<u128> for BigInt {
    fn from(n: u128) -> Self {
        BigInt::from_u128(n, Sign::Positive)
    }
}

impl From<i128> for BigInt {
    fn from(i: i128) -> Self {
        BigInt::from_i128(i)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    BigInt::from(n as u128)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    BigInt::from(n as i128)
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsigned() {
        assert_eq!(BigInt::from(0u8), BigInt::zero());
        assert_eq!(BigInt::from(255u8), BigInt::from(255u128));
        assert_eq!(BigInt::from(u64::MAX), BigInt::from(u64::MAX as u128));
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(BigInt::from(0i32), BigInt::zero());
        assert_eq!(BigInt::from(-1i32), -BigInt::one());
        assert_eq!(BigInt::from(i64::MIN), BigInt::from(i64::MIN as i128));
        assert!(BigInt::from(-5i32).is_negative());
        assert!(!BigInt::from(5i32).is_negative());
    }
}

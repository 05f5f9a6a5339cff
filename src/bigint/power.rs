// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements integer exponentiation via binary (square-and-multiply) exponentiation.

use super::bigint_core::BigInt;

/// Describes why a power operation could not be computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PowerError {
    /// `0` raised to a negative exponent (equivalent to dividing by zero).
    DivisionByZero,
}

impl std::fmt::Display for PowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerError::DivisionByZero => write!(f, "0 raised to a negative power is undefined"),
        }
    }
}

impl std::error::Error for PowerError {}

impl BigInt {
    /// Computes `self^exp`.
    ///
    /// For non-negative `exp`, this is the mathematical value `self^exp`. For
    /// negative `exp`, the result is the truncation of `1 / self^|exp|` towards
    /// zero: `0` for `|self| > 1`, `±1` for `self == ±1`, and a
    /// [`PowerError::DivisionByZero`] for `self == 0`.
    pub fn power(&self, exp: &BigInt) -> Result<BigInt, PowerError> {
        if exp.is_negative() {
            if self.is_zero() {
                return Err(PowerError::DivisionByZero);
            }
            if self == &BigInt::one() {
                return Ok(BigInt::one());
            }
            if self == &-BigInt::one() {
                return Ok(if exp.is_even() {
                    BigInt::one()
                } else {
                    -BigInt::one()
                });
            }
            return Ok(BigInt::zero());
        }

        if exp.is_zero() {
            return Ok(BigInt::one());
        }

        // Binary exponentiation: walk the exponent's bits from least to most
        // significant, squaring the base at each step and folding it into the
        // result whenever the corresponding bit is set.
        let bits = exp.le_bits();
        let mut result = BigInt::one();
        let mut base = self.clone();
        for (i, bit) in bits.iter().enumerate() {
            if *bit {
                result = &result * &base;
            }
            if i + 1 < bits.len() {
                base = &base * &base;
            }
        }

        Ok(result)
    }
}

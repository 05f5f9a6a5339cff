// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements factorial via a product tree.

use super::bigint_core::BigInt;

/// Describes why a factorial could not be computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FactorialError {
    /// The operand was negative.
    NegativeOperand,
    /// The operand is too large to enumerate the product tree over (doesn't
    /// fit a `u64` index), regardless of sign.
    TooLarge,
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorialError::NegativeOperand => write!(f, "factorial operand must not be negative"),
            FactorialError::TooLarge => write!(f, "factorial operand is too large"),
        }
    }
}

impl std::error::Error for FactorialError {}

/// Multiplies the integers in `[low, high]` (inclusive) by recursively
/// splitting the range at its midpoint and multiplying the subproducts.
///
/// This halves the number of multiplications performed on wide operands
/// compared with a left-to-right fold, since the two halves can each be
/// multiplied down to roughly equal bit widths before being combined.
fn product_tree(low: u64, high: u64) -> BigInt {
    if low == high {
        return BigInt::from(low);
    }
    if high - low == 1 {
        return BigInt::from(low) * BigInt::from(high);
    }

    let mid = low + (high - low) / 2;
    &product_tree(low, mid) * &product_tree(mid + 1, high)
}

impl BigInt {
    /// Computes `self!`, defined for `self >= 0`. `0! = 1! = 1`.
    pub fn factorial(&self) -> Result<BigInt, FactorialError> {
        if self.is_negative() {
            return Err(FactorialError::NegativeOperand);
        }

        let n = self.to_u64().ok_or(FactorialError::TooLarge)?;

        if n < 2 {
            return Ok(BigInt::one());
        }

        Ok(product_tree(1, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        let data = [(0i64, 1i64), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120), (10, 3628800)];
        for (n, expected) in data {
            assert_eq!(BigInt::from(n).factorial().unwrap(), BigInt::from(expected));
        }
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(
            BigInt::from(-1).factorial(),
            Err(FactorialError::NegativeOperand)
        );
    }

    #[test]
    fn test_factorial_too_large() {
        let huge = BigInt::one() << 100;
        assert_eq!(huge.factorial(), Err(FactorialError::TooLarge));
    }

    #[test]
    fn test_factorial_recurrence() {
        // factorial(n+1) == factorial(n) * (n+1)
        let mut n = BigInt::zero();
        let mut previous = n.factorial().unwrap();
        for _ in 0..30 {
            n = &n + &BigInt::one();
            let current = n.factorial().unwrap();
            assert_eq!(current, &previous * &n);
            previous = current;
        }
    }
}

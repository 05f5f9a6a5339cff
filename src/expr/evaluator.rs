// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walks a postfix token stream on a single operand stack to produce a value.

use crate::bigint::BigInt;

use super::token::{BinaryOperator, Token};

/// Describes why evaluation of an otherwise-tokenizable line failed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    /// Division or modulo by zero, or `0` raised to a negative power.
    DivisionByZero,
    /// Factorial of a negative number.
    NegativeFactorial,
    /// A number literal's digit body didn't parse, the postfix stream was
    /// malformed in a way the shunting yard couldn't have produced on its
    /// own, or evaluation finished with other than exactly one value on the
    /// stack.
    InvalidToken,
    /// An operator was applied with too few operands on the stack.
    StackUnderflow,
    /// A configured magnitude cap was exceeded.
    Memory,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "Division by zero!"),
            EvalError::NegativeFactorial => write!(f, "Input of factorial must not be negative!"),
            EvalError::InvalidToken | EvalError::StackUnderflow => write!(f, "Syntax error!"),
            EvalError::Memory => write!(f, "Memory allocation error!"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Caps the magnitude of any intermediate or final value, as a bit length.
/// `None` means unbounded, the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_bit_len: Option<usize>,
}

impl Limits {
    fn check(&self, value: &BigInt) -> Result<(), EvalError> {
        if let Some(max) = self.max_bit_len {
            if value.bit_len() > max {
                return Err(EvalError::Memory);
            }
        }
        Ok(())
    }
}

/// Parses a `Token::Number`'s literal text, dispatching to the decimal,
/// binary, or hexadecimal codec by its prefix.
fn parse_number(text: &str) -> Result<BigInt, EvalError> {
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        BigInt::parse_binary(digits).map_err(|_| EvalError::InvalidToken)
    } else if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        BigInt::parse_hexadecimal(digits).map_err(|_| EvalError::InvalidToken)
    } else {
        BigInt::from_decimal_str(text).map_err(|_| EvalError::InvalidToken)
    }
}

fn apply_binary(op: BinaryOperator, left: BigInt, right: BigInt) -> Result<BigInt, EvalError> {
    match op {
        BinaryOperator::Add => Ok(&left + &right),
        BinaryOperator::Sub => Ok(&left - &right),
        BinaryOperator::Mul => Ok(&left * &right),
        BinaryOperator::Div => left.checked_div(&right).ok_or(EvalError::DivisionByZero),
        BinaryOperator::Mod => left.checked_rem(&right).ok_or(EvalError::DivisionByZero),
        BinaryOperator::Pow => left.power(&right).map_err(|_| EvalError::DivisionByZero),
    }
}

/// Evaluates a postfix token stream (as produced by [`super::shunting_yard::to_postfix`]).
pub fn evaluate(postfix: &[Token], limits: &Limits) -> Result<BigInt, EvalError> {
    let mut stack: Vec<BigInt> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value = parse_number(text)?;
                limits.check(&value)?;
                stack.push(value);
            }
            Token::UnaryMinus => {
                let value = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(-value);
            }
            Token::Factorial => {
                let value = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let result = value.factorial().map_err(|e| match e {
                    crate::bigint::FactorialError::NegativeOperand => EvalError::NegativeFactorial,
                    crate::bigint::FactorialError::TooLarge => EvalError::Memory,
                })?;
                limits.check(&result)?;
                stack.push(result);
            }
            Token::BinaryOp(op) => {
                let right = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let result = apply_binary(*op, left, right)?;
                limits.check(&result)?;
                stack.push(result);
            }
            Token::LParen | Token::RParen => return Err(EvalError::InvalidToken),
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::InvalidToken);
    }

    Ok(stack.pop().unwrap())
}

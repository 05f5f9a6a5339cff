// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts an infix token stream to postfix order via the shunting-yard algorithm.

use super::token::Token;

/// Describes why a token stream could not be converted to postfix order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuntingYardError {
    /// A `)` was popped against but no matching `(` was found on the operator stack.
    UnmatchedParenthesis,
}

impl std::fmt::Display for ShuntingYardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuntingYardError::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
        }
    }
}

impl std::error::Error for ShuntingYardError {}

/// An entry on the shunting-yard operator stack. `Token::Number`/`Factorial`
/// never land here: numbers go straight to output, and `!` (postfix, already
/// highest precedence) is emitted to output the moment it's read.
#[derive(Clone, Debug, PartialEq, Eq)]
enum StackOp {
    Binary(super::token::BinaryOperator),
    UnaryMinus,
    LParen,
}

/// Converts `tokens` (already validated by the tokenizer) to postfix order.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ShuntingYardError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<StackOp> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Factorial => output.push(token.clone()),
            Token::UnaryMinus => operators.push(StackOp::UnaryMinus),
            Token::BinaryOp(op) => {
                while let Some(top) = operators.last() {
                    let should_pop = match top {
                        StackOp::LParen => false,
                        StackOp::UnaryMinus => true,
                        StackOp::Binary(top_op) => {
                            top_op.precedence() > op.precedence()
                                || (top_op.precedence() == op.precedence()
                                    && !op.is_right_associative())
                        }
                    };
                    if !should_pop {
                        break;
                    }
                    output.push(pop_to_token(operators.pop().unwrap()));
                }
                operators.push(StackOp::Binary(*op));
            }
            Token::LParen => operators.push(StackOp::LParen),
            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(StackOp::LParen) => break,
                        Some(op) => output.push(pop_to_token(op)),
                        None => return Err(ShuntingYardError::UnmatchedParenthesis),
                    }
                }
                // a unary minus directly outside the parenthesized group binds
                // to the whole group, and is popped here too
                if matches!(operators.last(), Some(StackOp::UnaryMinus)) {
                    output.push(pop_to_token(operators.pop().unwrap()));
                }
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == StackOp::LParen {
            return Err(ShuntingYardError::UnmatchedParenthesis);
        }
        output.push(pop_to_token(op));
    }

    Ok(output)
}

fn pop_to_token(op: StackOp) -> Token {
    match op {
        StackOp::Binary(b) => Token::BinaryOp(b),
        StackOp::UnaryMinus => Token::UnaryMinus,
        StackOp::LParen => unreachable!("LParen is never pushed to output"),
    }
}

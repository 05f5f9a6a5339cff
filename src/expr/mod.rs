// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parses and evaluates arithmetic expressions: lexing, shunting-yard
//! infix-to-postfix conversion, and postfix evaluation.

mod evaluator;
mod shunting_yard;
mod token;
mod tokenizer;

pub use evaluator::{evaluate, EvalError, Limits};
pub use shunting_yard::{to_postfix, ShuntingYardError};
pub use token::{BinaryOperator, Token};
pub use tokenizer::{tokenize, TokenizeError};

use crate::bigint::BigInt;

/// Describes why a source line could not be turned into a value, across all
/// three stages of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExprError {
    Tokenize(TokenizeError),
    ShuntingYard(ShuntingYardError),
    Eval(EvalError),
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // every tokenizer/shunting-yard failure is a malformed expression
            ExprError::Tokenize(_) | ExprError::ShuntingYard(_) => write!(f, "Syntax error!"),
            ExprError::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExprError {}

/// Runs the full pipeline — tokenize, convert to postfix, evaluate — over a
/// single source line.
pub fn evaluate_line(input: &str, limits: &Limits) -> Result<BigInt, ExprError> {
    let tokens = tokenize(input).map_err(ExprError::Tokenize)?;
    let postfix = to_postfix(&tokens).map_err(ExprError::ShuntingYard)?;
    evaluate(&postfix, limits).map_err(ExprError::Eval)
}

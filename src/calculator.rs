// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatches a single input line to either a mode command or the
//! expression pipeline, and renders the result as the line of text the CLI
//! prints.

use crate::bigint::BigInt;
use crate::expr::{evaluate_line, Limits};

/// The base a result is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Decimal,
    Binary,
    Hexadecimal,
}

impl Default for Base {
    fn default() -> Self {
        Base::Decimal
    }
}

impl Base {
    fn name(self) -> &'static str {
        match self {
            Base::Decimal => "dec",
            Base::Binary => "bin",
            Base::Hexadecimal => "hex",
        }
    }

    fn render(self, value: &BigInt) -> String {
        match self {
            Base::Decimal => value.to_decimal_string(),
            Base::Binary => value.format_binary(),
            Base::Hexadecimal => value.format_hexadecimal(),
        }
    }
}

/// The calculator's only piece of mutable state: the base results are
/// rendered in. Mutated only by the `dec`/`bin`/`hex` commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorState {
    pub output_base: Base,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one input line, returning the text to print, or `None` if
    /// the line was `quit`.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Some(String::new());
        }

        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "quit" => return None,
            "dec" => {
                self.output_base = Base::Decimal;
                return Some(self.output_base.name().to_string());
            }
            "bin" => {
                self.output_base = Base::Binary;
                return Some(self.output_base.name().to_string());
            }
            "hex" => {
                self.output_base = Base::Hexadecimal;
                return Some(self.output_base.name().to_string());
            }
            "out" => return Some(self.output_base.name().to_string()),
            _ => {}
        }

        if !looks_like_expression(trimmed) {
            return Some(format!("Invalid command \"{trimmed}\"!"));
        }

        let result = match evaluate_line(trimmed, &Limits::default()) {
            Ok(value) => self.output_base.render(&value),
            Err(err) => err.to_string(),
        };
        Some(result)
    }
}

/// Lines containing at least one digit, operator, or parenthesis are
/// attempted as expressions (and may still fail, with `Syntax error!`);
/// anything else (including pure-letter lines, which could never lex into a
/// number literal) is reported as an unrecognized command.
fn looks_like_expression(trimmed: &str) -> bool {
    trimmed
        .chars()
        .any(|c| c.is_ascii_digit() || "+-*/%^!()".contains(c))
}

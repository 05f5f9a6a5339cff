// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arbitrary-precision integer calculator.
//!
//! # Examples
//!
//! cargo run --bin calc
//! cargo run --bin calc -- path/to/script.txt

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use lightcalc::calculator::CalculatorState;
use lightcalc::io::{BufReadLineSource, LineSource};

fn run(mut source: impl LineSource) -> io::Result<()> {
    let mut state = CalculatorState::new();

    while let Some(line) = source.next_line()? {
        match state.process_line(&line) {
            Some(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            None => break,
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match std::env::args().nth(1) {
        None => {
            let stdin = io::stdin();
            let source = BufReadLineSource::new(stdin.lock());
            if run(source).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Some(path) => match File::open(&path) {
            Ok(file) => {
                let source = BufReadLineSource::new(BufReader::new(file));
                if run(source).is_err() {
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            }
            Err(_) => {
                println!("Invalid input file!");
                ExitCode::FAILURE
            }
        },
    }
}

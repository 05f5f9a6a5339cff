// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod add;
mod bigint_core;
mod bigint_display;
mod bigint_from;
mod bigint_into;
mod bigint_new;
mod bigint_slice;
mod bigint_vec;
mod bits;
mod bytes;
mod cmp;
mod decimal;
mod digit;
mod divrem;
mod factorial;
mod helper_methods;
mod len;
mod math;
mod mul;
mod power;
mod shift;
mod sub;
mod twos_complement;
mod zero;

pub use bigint_core::{BigInt, Sign};
pub use decimal::DecimalParseError;
pub use digit::{Digit, DIGIT_BYTES};
pub use factorial::FactorialError;
pub use power::PowerError;
pub use twos_complement::TwosComplementParseError;

// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input plumbing shared by the interactive and batch CLI modes.

mod line_source;

pub use line_source::{BufReadLineSource, LineSource};
#[cfg(test)]
pub use line_source::MockLineSource;

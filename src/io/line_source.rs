// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstracts over where input lines come from, so the calculator's dispatch
//! loop can be driven by interactive stdin, a batch file, or a fixed script
//! of lines in tests.

use std::io::{self, BufRead};

#[cfg(test)]
use mockall::automock;

/// Supplies source lines one at a time.
#[cfg_attr(test, automock)]
pub trait LineSource {
    /// Returns the next line with its trailing line ending stripped, or
    /// `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// A [`LineSource`] backed by any [`BufRead`] (stdin, a file, or an
/// in-memory buffer).
pub struct BufReadLineSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadLineSource<R> {
    pub fn new(reader: R) -> Self {
        BufReadLineSource { reader }
    }
}

impl<R: BufRead> LineSource for BufReadLineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buf_read_line_source() {
        let data = "first\nsecond\r\nthird";
        let mut source = BufReadLineSource::new(data.as_bytes());
        assert_eq!(source.next_line().unwrap(), Some("first".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("second".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("third".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_mock_line_source() {
        let mut mock = MockLineSource::new();
        let mut calls = 0;
        mock.expect_next_line().returning(move || {
            calls += 1;
            match calls {
                1 => Ok(Some("1+1".to_string())),
                _ => Ok(None),
            }
        });
        assert_eq!(mock.next_line().unwrap(), Some("1+1".to_string()));
        assert_eq!(mock.next_line().unwrap(), None);
    }
}

//! The two-line `rows=` / `cols=` header

use alloc::format;
use alloc::string::String;

use super::constants::{COLS_PREFIX, HEADER_PREFIX_LEN, ROWS_PREFIX};
use crate::validation::parse_dimension;
use crate::{MatrixError, Result};

/// Matrix dimensions as declared at the top of a text matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixHeader {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the `rows=<R>` line
    pub fn parse_rows(line: &str) -> Result<usize> {
        parse_prefixed(line, ROWS_PREFIX)
    }

    /// Parse the `cols=<C>` line
    pub fn parse_cols(line: &str) -> Result<usize> {
        parse_prefixed(line, COLS_PREFIX)
    }

    /// Render both header lines, each terminated by `\n`
    pub fn render(&self) -> String {
        format!("{ROWS_PREFIX}{}\n{COLS_PREFIX}{}\n", self.rows, self.cols)
    }
}

fn parse_prefixed(line: &str, prefix: &str) -> Result<usize> {
    debug_assert_eq!(prefix.len(), HEADER_PREFIX_LEN);
    let rest = line.strip_prefix(prefix).ok_or(MatrixError::MalformedFile)?;
    parse_dimension(rest)
}

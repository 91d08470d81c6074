//! Incremental decoder fed one line at a time

use super::entry::parse_body_line;
use super::header::MatrixHeader;
use super::strip_line_ending;
use crate::matrix::SparseMatrix;
use crate::{MatrixError, Result};

/// What a fed line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// One of the two header lines
    Header,
    /// An entry line applied to the matrix
    Entry,
    /// A body line ignored because it is not bracketed
    Skipped,
}

#[derive(Debug)]
enum DecoderState {
    Rows,
    Cols { rows: usize },
    Body(SparseMatrix),
}

/// Line-fed decoder for the text matrix format
///
/// The header must arrive first; every later line is applied to the matrix
/// through the set contract. Line numbers are 1-based and count every line
/// fed so far, which lets callers report where decoding failed.
#[derive(Debug)]
pub struct MatrixDecoder {
    state: DecoderState,
    line_number: usize,
}

impl Default for MatrixDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixDecoder {
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Rows,
            line_number: 0,
        }
    }

    /// Number of lines fed so far
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Feed the next line, without its trailing newline
    pub fn feed_line(&mut self, line: &str) -> Result<LineOutcome> {
        self.line_number += 1;
        let line = strip_line_ending(line);

        match self.state {
            DecoderState::Rows => {
                let rows = MatrixHeader::parse_rows(line)?;
                self.state = DecoderState::Cols { rows };
                Ok(LineOutcome::Header)
            }
            DecoderState::Cols { rows } => {
                let cols = MatrixHeader::parse_cols(line)?;
                self.state = DecoderState::Body(SparseMatrix::new(rows, cols));
                Ok(LineOutcome::Header)
            }
            DecoderState::Body(ref mut matrix) => match parse_body_line(line)? {
                Some((row, col, value)) => {
                    // An entry the matrix cannot hold is a property of the file
                    matrix
                        .set(row, col, value)
                        .map_err(|_| MatrixError::MalformedFile)?;
                    Ok(LineOutcome::Entry)
                }
                None => Ok(LineOutcome::Skipped),
            },
        }
    }

    /// Finish decoding; fails if the header was never completed
    pub fn finish(self) -> Result<SparseMatrix> {
        match self.state {
            DecoderState::Body(matrix) => Ok(matrix),
            _ => Err(MatrixError::MalformedFile),
        }
    }
}

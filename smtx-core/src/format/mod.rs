//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! This module only deals with `&str` lines and owned strings; reading and
//! writing files is left to the I/O layer.

pub mod constants;
pub mod decoder;
pub mod entry;
pub mod header;

pub use decoder::{LineOutcome, MatrixDecoder};
pub use entry::{format_entry, parse_body_line};
pub use header::MatrixHeader;

use alloc::string::String;

use crate::matrix::SparseMatrix;
use crate::traits::MatrixOperations;
use crate::Result;

/// Strip a trailing carriage return left over from CRLF line endings
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Render a matrix as text: header first, then one line per entry in `(row, col)` order
pub fn encode<M: MatrixOperations + ?Sized>(matrix: &M) -> String {
    let (rows, cols) = matrix.dimensions();
    let mut out = MatrixHeader::new(rows, cols).render();
    for entry in matrix.sorted_entries() {
        out.push_str(&format_entry(&entry));
        out.push('\n');
    }
    out
}

/// Decode a whole document held in memory
pub fn decode(text: &str) -> Result<SparseMatrix> {
    let mut decoder = MatrixDecoder::new();
    for line in text.lines() {
        decoder.feed_line(line)?;
    }
    decoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_encode_layout() {
        let matrix = SparseMatrix::from_entries(3, 4, [(2, 1, -7), (0, 3, 5)]).unwrap();
        assert_eq!(encode(&matrix), "rows=3\ncols=4\n(0, 3, 5)\n(2, 1, -7)\n");
        assert_eq!(encode(&SparseMatrix::new(0, 0)), "rows=0\ncols=0\n");
    }

    #[test]
    fn test_decode_round_trip() {
        let matrix =
            SparseMatrix::from_entries(4, 4, [(0, 0, 1), (3, 3, -2), (1, 2, 9)]).unwrap();
        assert_eq!(decode(&encode(&matrix)), Ok(matrix));
    }

    #[test]
    fn test_decode_crlf() {
        let text = "rows=2\r\ncols=2\r\n(1, 1, 3)\r\n";
        let matrix = decode(text).unwrap();
        assert_eq!(matrix.get(1, 1), Ok(3));
    }

    #[test]
    fn test_decode_missing_cols() {
        assert_eq!(decode("rows=2\n(0, 0, 1)\n"), Err(MatrixError::MalformedFile));
        assert_eq!(decode("rows=2\n"), Err(MatrixError::MalformedFile));
        assert_eq!(decode(""), Err(MatrixError::MalformedFile));
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("(1, 2, 3)\r"), "(1, 2, 3)");
        assert_eq!(strip_line_ending("rows=1"), "rows=1");
    }
}

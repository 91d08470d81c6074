//! File I/O for text matrices
//!
//! Reading and writing work over any `BufRead` / `Write`; [`MatrixFile`]
//! adds the path-level entry points. File handles live only for the duration
//! of a single call and are closed on every exit path.

use log::{debug, trace};
use smtx_core::format::{encode, LineOutcome, MatrixDecoder};
use smtx_core::{MatrixError, MatrixOperations, SparseMatrix};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Decode a matrix from a line-oriented reader
///
/// `origin` names the source in error messages (usually the file path).
pub fn read_matrix<R: BufRead>(reader: R, origin: &str) -> Result<SparseMatrix> {
    let mut decoder = MatrixDecoder::new();

    for line in reader.lines() {
        let line = line.map_err(|source| read_error(origin, decoder.line_number() + 1, source))?;

        match decoder.feed_line(&line) {
            Ok(LineOutcome::Skipped) => {
                trace!("{origin}:{}: skipped unbracketed line", decoder.line_number());
            }
            Ok(_) => {}
            Err(source) => {
                return Err(Error::Malformed {
                    origin: origin.to_owned(),
                    line: decoder.line_number(),
                    source,
                });
            }
        }
    }

    // A header cut short is reported on the line that should have followed
    let next_line = decoder.line_number() + 1;
    decoder.finish().map_err(|source| Error::Malformed {
        origin: origin.to_owned(),
        line: next_line,
        source,
    })
}

/// Invalid UTF-8 is a property of the content, anything else of the file
fn read_error(origin: &str, line: usize, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::InvalidData {
        Error::Malformed {
            origin: origin.to_owned(),
            line,
            source: MatrixError::MalformedFile,
        }
    } else {
        Error::FileUnavailable {
            origin: origin.to_owned(),
            source,
        }
    }
}

/// Encode a matrix into a writer: header, then entries in `(row, col)` order
pub fn write_matrix<W: Write, M: MatrixOperations + ?Sized>(
    mut writer: W,
    matrix: &M,
) -> io::Result<()> {
    writer.write_all(encode(matrix).as_bytes())?;
    writer.flush()
}

/// Path-level load and save of text matrices
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix from a text file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let file = File::open(path).map_err(|source| Error::FileUnavailable {
            origin: origin.clone(),
            source,
        })?;
        let matrix = read_matrix(BufReader::new(file), &origin)?;

        let (rows, cols) = matrix.dimensions();
        debug!("loaded {origin}: {rows}x{cols}, nnz={}", matrix.nnz());
        Ok(matrix)
    }

    /// Save a matrix to a text file, replacing any existing content
    pub fn save<P: AsRef<Path>, M: MatrixOperations + ?Sized>(path: P, matrix: &M) -> Result<()> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let to_error = |source| Error::FileUnavailable {
            origin: origin.clone(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        write_matrix(BufWriter::new(file), matrix).map_err(to_error)?;

        let (rows, cols) = matrix.dimensions();
        debug!("saved {origin}: {rows}x{cols}, nnz={}", matrix.nnz());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_matrix() {
        let text = "rows=3\ncols=3\n(0, 0, 1)\n\nnot an entry\n(2, 1, -5)\n";
        let matrix = read_matrix(Cursor::new(text), "mem").unwrap();
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(2, 1), Ok(-5));
    }

    #[test]
    fn test_read_matrix_reports_line() {
        let text = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, x)\n";
        let err = read_matrix(Cursor::new(text), "mem").unwrap_err();
        assert_eq!(err.kind(), MatrixError::MalformedFile);
        assert!(matches!(err, Error::Malformed { line: 4, .. }));
    }

    #[test]
    fn test_read_matrix_missing_cols() {
        let err = read_matrix(Cursor::new("rows=2\n"), "mem").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_read_matrix_invalid_utf8() {
        let bytes: &[u8] = b"rows=1\ncols=1\n(0, 0, \xff)\n";
        let err = read_matrix(Cursor::new(bytes), "mem").unwrap_err();
        assert_eq!(err.kind(), MatrixError::MalformedFile);
    }

    #[test]
    fn test_write_matrix_bytes() {
        let matrix = SparseMatrix::from_entries(2, 3, [(1, 2, 7), (0, 0, -1)]).unwrap();
        let mut out = Vec::new();
        write_matrix(&mut out, &matrix).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rows=2\ncols=3\n(0, 0, -1)\n(1, 2, 7)\n"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatrixFile::load("/definitely/not/here/matrix.txt").unwrap_err();
        assert_eq!(err.kind(), MatrixError::FileUnavailable);
    }
}

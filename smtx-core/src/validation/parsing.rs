//! Parsing utilities for the text matrix format
//!
//! Every failure maps to `MatrixError::MalformedFile`; the caller decides
//! which lines are worth parsing at all.

use crate::format::constants::{ENTRY_FIELD_COUNT, FIELD_SEPARATOR};
use crate::matrix::Value;
use crate::MatrixError;

/// Parse a header dimension such as the `3` in `rows=3`
///
/// Surrounding ASCII whitespace is tolerated. Negative or non-numeric
/// values are rejected.
pub fn parse_dimension(s: &str) -> Result<usize, MatrixError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::MalformedFile)
}

/// Parse a signed integer token from an entry line
pub fn parse_integer(s: &str) -> Result<Value, MatrixError> {
    let token = s.trim();
    if token.is_empty() {
        return Err(MatrixError::MalformedFile);
    }
    token.parse::<Value>().map_err(|_| MatrixError::MalformedFile)
}

/// Convert a parsed integer into a row or column index
pub fn parse_coordinate(value: Value) -> Result<usize, MatrixError> {
    usize::try_from(value).map_err(|_| MatrixError::MalformedFile)
}

/// Parse the text between the parentheses of an entry line
///
/// Exactly three comma-separated integers are required.
pub fn parse_triple(inner: &str) -> Result<(Value, Value, Value), MatrixError> {
    let mut tokens = inner.split(FIELD_SEPARATOR);
    let mut fields = [0 as Value; ENTRY_FIELD_COUNT];

    for field in fields.iter_mut() {
        let token = tokens.next().ok_or(MatrixError::MalformedFile)?;
        *field = parse_integer(token)?;
    }

    if tokens.next().is_some() {
        return Err(MatrixError::MalformedFile);
    }

    Ok((fields[0], fields[1], fields[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("0"), Ok(0));
        assert_eq!(parse_dimension("42"), Ok(42));
        assert_eq!(parse_dimension(" 7 "), Ok(7));

        assert_eq!(parse_dimension(""), Err(MatrixError::MalformedFile));
        assert_eq!(parse_dimension("-1"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_dimension("3x"), Err(MatrixError::MalformedFile));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("5"), Ok(5));
        assert_eq!(parse_integer(" -12"), Ok(-12));
        assert_eq!(parse_integer("+3"), Ok(3));

        assert_eq!(parse_integer(""), Err(MatrixError::MalformedFile));
        assert_eq!(parse_integer("  "), Err(MatrixError::MalformedFile));
        assert_eq!(parse_integer("abc"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_integer("1.5"), Err(MatrixError::MalformedFile));
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err(MatrixError::MalformedFile)
        );
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(0), Ok(0));
        assert_eq!(parse_coordinate(17), Ok(17));
        assert_eq!(parse_coordinate(-1), Err(MatrixError::MalformedFile));
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("0, 1, 5"), Ok((0, 1, 5)));
        assert_eq!(parse_triple("2,3,-4"), Ok((2, 3, -4)));

        // Wrong token counts
        assert_eq!(parse_triple(""), Err(MatrixError::MalformedFile));
        assert_eq!(parse_triple("1, 2"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_triple("1, 2, 3, 4"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_triple("1, 2, 3,"), Err(MatrixError::MalformedFile));

        // Non-integer tokens
        assert_eq!(parse_triple("a, 2, 3"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_triple("1, , 3"), Err(MatrixError::MalformedFile));
    }
}

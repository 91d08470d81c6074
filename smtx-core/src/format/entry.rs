//! Entry lines: `(<row>, <col>, <value>)`

use alloc::format;
use alloc::string::String;

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN, RENDERED_SEPARATOR};
use crate::matrix::{Entry, Value};
use crate::validation::{parse_coordinate, parse_triple};
use crate::Result;

/// Parse one body line
///
/// Lines that are empty or not wrapped in `(` ... `)` are skipped and yield
/// `Ok(None)`. Bracketed lines must hold exactly three integers with
/// non-negative coordinates, otherwise the line is malformed. A zero value is
/// returned as-is; storing it is a no-op.
pub fn parse_body_line(line: &str) -> Result<Option<(usize, usize, Value)>> {
    let Some(inner) = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
    else {
        return Ok(None);
    };

    let (row, col, value) = parse_triple(inner)?;
    Ok(Some((parse_coordinate(row)?, parse_coordinate(col)?, value)))
}

/// Render an entry with a single space after each comma
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "{ENTRY_OPEN}{}{RENDERED_SEPARATOR}{}{RENDERED_SEPARATOR}{}{ENTRY_CLOSE}",
        entry.row, entry.col, entry.value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_parse_body_line() {
        assert_eq!(parse_body_line("(0, 1, 5)"), Ok(Some((0, 1, 5))));
        assert_eq!(parse_body_line("(3,4,-2)"), Ok(Some((3, 4, -2))));
        assert_eq!(parse_body_line("(0, 0, 0)"), Ok(Some((0, 0, 0))));
    }

    #[test]
    fn test_unbracketed_lines_are_skipped() {
        assert_eq!(parse_body_line(""), Ok(None));
        assert_eq!(parse_body_line("# comment"), Ok(None));
        assert_eq!(parse_body_line("0, 1, 5"), Ok(None));
        assert_eq!(parse_body_line("(0, 1, 5"), Ok(None));
        assert_eq!(parse_body_line(" (0, 1, 5)"), Ok(None));
        assert_eq!(parse_body_line("(0, 1, oops"), Ok(None));
        // A lone "(" cannot also end with ")"
        assert_eq!(parse_body_line("("), Ok(None));
    }

    #[test]
    fn test_bracketed_lines_must_be_well_formed() {
        assert_eq!(parse_body_line("()"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_body_line("(1, 2)"), Err(MatrixError::MalformedFile));
        assert_eq!(
            parse_body_line("(1, 2, 3, 4)"),
            Err(MatrixError::MalformedFile)
        );
        assert_eq!(parse_body_line("(1, x, 3)"), Err(MatrixError::MalformedFile));
        assert_eq!(parse_body_line("(-1, 0, 3)"), Err(MatrixError::MalformedFile));
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry(&Entry::new(0, 12, -4)), "(0, 12, -4)");
    }
}

//! Fixed tokens of the text matrix format

/// Prefix of the first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line
pub const COLS_PREFIX: &str = "cols=";

/// Both header prefixes have the same fixed width
pub const HEADER_PREFIX_LEN: usize = 5;

/// Opening bracket of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing bracket of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields when reading
pub const FIELD_SEPARATOR: char = ',';

/// Separator between entry fields when writing
pub const RENDERED_SEPARATOR: &str = ", ";

/// Number of fields in an entry line
pub const ENTRY_FIELD_COUNT: usize = 3;

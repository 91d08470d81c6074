//! Error types for sparse matrix operations

/// Errors that can occur during matrix access, arithmetic or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Header missing or mis-prefixed, bad token count, or non-integer token
    MalformedFile,
    /// Input could not be opened or read, or output could not be written
    FileUnavailable,
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch,
    /// Unrecognized operation selector
    InvalidChoice,
    /// Coordinate outside the matrix dimensions
    IndexOutOfBounds,
    /// Checked integer arithmetic overflowed
    ArithmeticOverflow,
}

/// Broad grouping of errors, used by callers that only care about the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Persisted representation could not be decoded
    Format,
    /// Filesystem access failed
    Io,
    /// Shape or coordinate problems
    Shape,
    /// Bad user input to the collaborator
    Usage,
    /// Integer overflow
    Arithmetic,
}

impl MatrixError {
    /// Category this error belongs to
    pub const fn category(self) -> ErrorCategory {
        match self {
            MatrixError::MalformedFile => ErrorCategory::Format,
            MatrixError::FileUnavailable => ErrorCategory::Io,
            MatrixError::DimensionMismatch | MatrixError::IndexOutOfBounds => ErrorCategory::Shape,
            MatrixError::InvalidChoice => ErrorCategory::Usage,
            MatrixError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::MalformedFile => "Input file has wrong format",
            MatrixError::FileUnavailable => "Unable to open file",
            MatrixError::DimensionMismatch => "Matrix dimensions are not compatible",
            MatrixError::InvalidChoice => "Invalid operation choice",
            MatrixError::IndexOutOfBounds => "Index out of bounds",
            MatrixError::ArithmeticOverflow => "Integer overflow in matrix arithmetic",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", MatrixError::MalformedFile),
            "Input file has wrong format"
        );
        assert_eq!(
            format!("{}", MatrixError::InvalidChoice),
            "Invalid operation choice"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(MatrixError::MalformedFile.category(), ErrorCategory::Format);
        assert_eq!(MatrixError::FileUnavailable.category(), ErrorCategory::Io);
        assert_eq!(MatrixError::DimensionMismatch.category(), ErrorCategory::Shape);
        assert_eq!(MatrixError::IndexOutOfBounds.category(), ErrorCategory::Shape);
        assert_eq!(MatrixError::InvalidChoice.category(), ErrorCategory::Usage);
        assert_eq!(
            MatrixError::ArithmeticOverflow.category(),
            ErrorCategory::Arithmetic
        );
    }
}

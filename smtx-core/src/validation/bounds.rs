//! Coordinate and shape validation
//!
//! Pure checks used before touching a matrix's entry map or before
//! starting a binary operation, so that no partial result is ever built.

use crate::MatrixError;

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
pub const fn validate_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), MatrixError> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate that two shapes are equal, as required by addition and subtraction
pub const fn validate_same_shape(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), MatrixError> {
    if lhs.0 != rhs.0 || lhs.1 != rhs.1 {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok(())
}

/// Validate that the left column count matches the right row count
///
/// Returns the shape of the product on success.
pub const fn validate_product_shape(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(usize, usize), MatrixError> {
    if lhs.1 != rhs.0 {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok((lhs.0, rhs.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 0, 2, 3), Ok(()));
        assert_eq!(validate_index(1, 2, 2, 3), Ok(()));

        assert_eq!(
            validate_index(2, 0, 2, 3),
            Err(MatrixError::IndexOutOfBounds)
        );
        assert_eq!(
            validate_index(0, 3, 2, 3),
            Err(MatrixError::IndexOutOfBounds)
        );
        // Nothing is addressable in an empty matrix
        assert_eq!(
            validate_index(0, 0, 0, 0),
            Err(MatrixError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_validate_shapes() {
        assert_eq!(validate_same_shape((2, 3), (2, 3)), Ok(()));
        assert_eq!(
            validate_same_shape((2, 3), (3, 2)),
            Err(MatrixError::DimensionMismatch)
        );

        assert_eq!(validate_product_shape((2, 3), (3, 4)), Ok((2, 4)));
        assert_eq!(validate_product_shape((0, 0), (0, 5)), Ok((0, 5)));
        assert_eq!(
            validate_product_shape((2, 3), (2, 3)),
            Err(MatrixError::DimensionMismatch)
        );
    }
}

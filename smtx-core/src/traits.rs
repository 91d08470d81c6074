//! Read-only access traits for sparse matrices
//!
//! Encoding and reporting code is written against these traits rather than
//! the concrete storage.

use alloc::vec::Vec;

use crate::matrix::{Entry, SparseMatrix, Value};

/// Minimal read access every sparse matrix provides
pub trait MatrixAccess {
    /// Get the value stored at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Value>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Entry-level views built on top of [`MatrixAccess`]
pub trait MatrixOperations: MatrixAccess {
    /// All stored entries ordered by `(row, col)`
    fn sorted_entries(&self) -> Vec<Entry>;

    /// Stored entries of one row, in column order
    fn get_row(&self, row_index: usize) -> Vec<Entry>;

    /// Stored entries of one column, in row order
    fn get_col(&self, col_index: usize) -> Vec<Entry>;
}

impl MatrixAccess for SparseMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<Value> {
        self.get(row, col).ok().filter(|&value| value != 0)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl MatrixOperations for SparseMatrix {
    fn sorted_entries(&self) -> Vec<Entry> {
        SparseMatrix::sorted_entries(self)
    }

    fn get_row(&self, row_index: usize) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().filter(|e| e.row == row_index).collect();
        entries.sort_unstable_by_key(|e| e.col);
        entries
    }

    fn get_col(&self, col_index: usize) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().filter(|e| e.col == col_index).collect();
        entries.sort_unstable_by_key(|e| e.row);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_get_element() {
        let matrix = SparseMatrix::from_entries(2, 2, [(1, 0, 6)]).unwrap();
        assert_eq!(matrix.get_element(1, 0), Some(6));
        assert_eq!(matrix.get_element(0, 0), None);
        assert_eq!(matrix.get_element(9, 9), None);
    }

    #[test]
    fn test_row_and_col_views() {
        let matrix =
            SparseMatrix::from_entries(3, 3, [(1, 2, 3), (1, 0, 1), (0, 2, 5), (2, 2, 7)]).unwrap();

        assert_eq!(
            MatrixOperations::get_row(&matrix, 1),
            vec![Entry::new(1, 0, 1), Entry::new(1, 2, 3)]
        );
        assert_eq!(
            MatrixOperations::get_col(&matrix, 2),
            vec![Entry::new(0, 2, 5), Entry::new(1, 2, 3), Entry::new(2, 2, 7)]
        );
        assert!(MatrixOperations::get_row(&matrix, 2).len() == 1);
        assert!(MatrixOperations::get_col(&matrix, 1).is_empty());
    }
}

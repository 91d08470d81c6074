//! Shape and fill summary of a matrix, as printed by `smtx info`

use smtx_core::MatrixAccess;

/// Dimensions and fill statistics of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub density: f64,
}

impl MatrixSummary {
    pub fn of<M: MatrixAccess + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        let nnz = matrix.nnz();
        let cells = rows as f64 * cols as f64;
        let density = if cells == 0.0 { 0.0 } else { nnz as f64 / cells };
        Self {
            rows,
            cols,
            nnz,
            density,
        }
    }

    /// JSON rendering of the summary
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix dimensions: {} x {}", self.rows, self.cols)?;
        writeln!(f, "Non-zero entries: {}", self.nnz)?;
        write!(f, "Density: {:.6}", self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtx_core::SparseMatrix;

    #[test]
    fn test_summary() {
        let matrix = SparseMatrix::from_entries(4, 5, [(0, 0, 1), (3, 4, 2)]).unwrap();
        let summary = MatrixSummary::of(&matrix);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.cols, 5);
        assert_eq!(summary.nnz, 2);
        assert_eq!(summary.density, 0.1);
        assert_eq!(
            summary.to_string(),
            "Matrix dimensions: 4 x 5\nNon-zero entries: 2\nDensity: 0.100000"
        );
    }

    #[test]
    fn test_summary_of_empty_shape() {
        let summary = MatrixSummary::of(&SparseMatrix::new(0, 3));
        assert_eq!(summary.density, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_summary_json() {
        let matrix = SparseMatrix::from_entries(2, 2, [(1, 1, 3)]).unwrap();
        let json = MatrixSummary::of(&matrix).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 2);
        assert_eq!(value["nnz"], 1);
        assert_eq!(value["density"], 0.25);
    }
}

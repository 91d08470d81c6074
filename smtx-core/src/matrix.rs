//! Sparse integer matrix with coordinate-keyed entry storage
//!
//! Only nonzero values are stored. Dimensions are fixed at construction;
//! the entry set changes through [`SparseMatrix::set`].

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::ops::ArithmeticPolicy;
use crate::validation::validate_index;
use crate::Result;

/// Element type stored in a matrix
pub type Value = i64;

/// A stored nonzero `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: Value) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix over [`Value`]
///
/// Invariants: every key of `entries` is inside `rows x cols`, and no
/// stored value is zero. Equality compares dimensions and the entry set,
/// independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "MatrixRepr", try_from = "MatrixRepr")
)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), Value>,
}

impl SparseMatrix {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix by applying [`SparseMatrix::set`] to every triple in order
    ///
    /// Later triples for the same coordinate overwrite earlier ones and zero
    /// values are dropped.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Value)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Value at `(row, col)`, zero when nothing is stored
    pub fn get(&self, row: usize, col: usize) -> Result<Value> {
        validate_index(row, col, self.rows, self.cols)?;
        Ok(self.value_at(row, col))
    }

    /// Insert, update or remove the entry at `(row, col)`
    ///
    /// Setting zero removes any stored entry, so zeros are never stored.
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> Result<()> {
        validate_index(row, col, self.rows, self.cols)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Lookup without bounds validation, for coordinates already known to be in range
    pub(crate) fn value_at(&self, row: usize, col: usize) -> Value {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Apply the set contract without bounds validation
    pub(crate) fn store(&mut self, row: usize, col: usize, value: Value) {
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Matrix dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored, i.e. the matrix is all zeros
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of coordinates holding a nonzero value
    pub fn density(&self) -> f64 {
        let cells = self.rows as f64 * self.cols as f64;
        if cells == 0.0 {
            return 0.0;
        }
        self.nnz() as f64 / cells
    }

    /// Iterate over stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Stored entries ordered by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().collect();
        entries.sort_unstable();
        entries
    }

    /// Flip the sign of every entry, failing on `Value::MIN`
    pub fn negate(&self) -> Result<Self> {
        self.negate_with(ArithmeticPolicy::Checked)
    }

    /// Flip the sign of every entry under the given overflow policy
    pub fn negate_with(&self, policy: ArithmeticPolicy) -> Result<Self> {
        let mut result = Self::new(self.rows, self.cols);
        for (&(row, col), &value) in &self.entries {
            result.store(row, col, policy.neg(value)?);
        }
        Ok(result)
    }

    /// `cols x rows` matrix with every entry mirrored across the diagonal
    pub fn transpose(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| ((col, row), value))
            .collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            entries,
        }
    }

    /// Raw entry map, for operations that walk every entry
    pub(crate) fn entry_map(&self) -> &HashMap<(usize, usize), Value> {
        &self.entries
    }
}

/// Serialized shape of a matrix: dimensions plus entries in `(row, col)` order
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

#[cfg(feature = "serde")]
impl From<SparseMatrix> for MatrixRepr {
    fn from(matrix: SparseMatrix) -> Self {
        Self {
            rows: matrix.rows,
            cols: matrix.cols,
            entries: matrix.sorted_entries(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRepr> for SparseMatrix {
    type Error = crate::MatrixError;

    fn try_from(repr: MatrixRepr) -> core::result::Result<Self, Self::Error> {
        SparseMatrix::from_entries(
            repr.rows,
            repr.cols,
            repr.entries.into_iter().map(|e| (e.row, e.col, e.value)),
        )
    }
}

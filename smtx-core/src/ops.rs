//! Binary matrix operations
//!
//! All operations validate operand shapes before allocating the result, so a
//! failed call never leaves a partially built matrix behind. Integer overflow
//! is governed by [`ArithmeticPolicy`].

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::matrix::{SparseMatrix, Value};
use crate::validation::{validate_product_shape, validate_same_shape};
use crate::{MatrixError, Result};

/// How integer overflow is handled during matrix arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArithmeticPolicy {
    /// Overflow fails the whole operation with `ArithmeticOverflow`
    #[default]
    Checked,
    /// Two's complement wrap-around
    Wrapping,
    /// Clamp to `Value::MIN` / `Value::MAX`
    Saturating,
}

impl ArithmeticPolicy {
    pub fn add(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            ArithmeticPolicy::Checked => lhs
                .checked_add(rhs)
                .ok_or(MatrixError::ArithmeticOverflow),
            ArithmeticPolicy::Wrapping => Ok(lhs.wrapping_add(rhs)),
            ArithmeticPolicy::Saturating => Ok(lhs.saturating_add(rhs)),
        }
    }

    pub fn sub(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            ArithmeticPolicy::Checked => lhs
                .checked_sub(rhs)
                .ok_or(MatrixError::ArithmeticOverflow),
            ArithmeticPolicy::Wrapping => Ok(lhs.wrapping_sub(rhs)),
            ArithmeticPolicy::Saturating => Ok(lhs.saturating_sub(rhs)),
        }
    }

    pub fn neg(self, value: Value) -> Result<Value> {
        match self {
            ArithmeticPolicy::Checked => value.checked_neg().ok_or(MatrixError::ArithmeticOverflow),
            ArithmeticPolicy::Wrapping => Ok(value.wrapping_neg()),
            ArithmeticPolicy::Saturating => Ok(value.saturating_neg()),
        }
    }

    /// Bring an exact wide accumulator back into `Value` range
    pub fn narrow(self, wide: i128) -> Result<Value> {
        match self {
            ArithmeticPolicy::Checked => {
                Value::try_from(wide).map_err(|_| MatrixError::ArithmeticOverflow)
            }
            ArithmeticPolicy::Wrapping => Ok(wide as Value),
            ArithmeticPolicy::Saturating => {
                Ok(wide.clamp(Value::MIN as i128, Value::MAX as i128) as Value)
            }
        }
    }

    /// Bring a product sum back into `Value` range
    fn narrow_sum(self, sum: ProductSum) -> Result<Value> {
        if sum.wraps == 0 {
            return self.narrow(sum.low);
        }
        // Any nonzero wrap count puts the exact sum outside `i128`, hence outside `Value`
        match self {
            ArithmeticPolicy::Checked => Err(MatrixError::ArithmeticOverflow),
            // 2^128 is a multiple of 2^64, so the low bits are already the wrapped result
            ArithmeticPolicy::Wrapping => Ok(sum.low as Value),
            ArithmeticPolicy::Saturating if sum.wraps > 0 => Ok(Value::MAX),
            ArithmeticPolicy::Saturating => Ok(Value::MIN),
        }
    }
}

/// Exact sum of `Value * Value` products
///
/// A single product fits in `i128`, a sum of several may not. The exact sum is
/// `low + wraps * 2^128`.
#[derive(Debug, Clone, Copy, Default)]
struct ProductSum {
    low: i128,
    wraps: i64,
}

impl ProductSum {
    fn push(&mut self, lhs: Value, rhs: Value) {
        let term = i128::from(lhs) * i128::from(rhs);
        let (low, overflowed) = self.low.overflowing_add(term);
        if overflowed {
            self.wraps += if term > 0 { 1 } else { -1 };
        }
        self.low = low;
    }
}

impl SparseMatrix {
    /// Element-wise sum with checked overflow
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.add_with(other, ArithmeticPolicy::Checked)
    }

    /// Element-wise difference with checked overflow
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.subtract_with(other, ArithmeticPolicy::Checked)
    }

    /// Matrix product with checked overflow
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.multiply_with(other, ArithmeticPolicy::Checked)
    }

    /// Element-wise sum: copy `self`, then fold every entry of `other` in
    pub fn add_with(&self, other: &SparseMatrix, policy: ArithmeticPolicy) -> Result<SparseMatrix> {
        validate_same_shape(self.dimensions(), other.dimensions())?;
        self.combine(other, |acc, value| policy.add(acc, value))
    }

    /// Element-wise difference: copy `self`, then subtract every entry of `other`
    pub fn subtract_with(
        &self,
        other: &SparseMatrix,
        policy: ArithmeticPolicy,
    ) -> Result<SparseMatrix> {
        validate_same_shape(self.dimensions(), other.dimensions())?;
        self.combine(other, |acc, value| policy.sub(acc, value))
    }

    fn combine<F>(&self, other: &SparseMatrix, op: F) -> Result<SparseMatrix>
    where
        F: Fn(Value, Value) -> Result<Value>,
    {
        let mut result = self.clone();
        for (&(row, col), &value) in other.entry_map() {
            let current = result.value_at(row, col);
            // Cancellation to zero drops the entry through `store`
            result.store(row, col, op(current, value)?);
        }
        Ok(result)
    }

    /// Sparse matrix product `self * other`
    ///
    /// Entries of `other` are indexed by row once, so each entry `(i, k)` of
    /// `self` only visits row `k` of `other`. Products are accumulated exactly
    /// (past the range of `i128` if need be) and narrowed with `policy` once
    /// per output coordinate, which makes the outcome independent of entry
    /// iteration order.
    pub fn multiply_with(
        &self,
        other: &SparseMatrix,
        policy: ArithmeticPolicy,
    ) -> Result<SparseMatrix> {
        let (rows, cols) = validate_product_shape(self.dimensions(), other.dimensions())?;

        let mut rows_of_other: HashMap<usize, Vec<(usize, Value)>> = HashMap::new();
        for (&(k, j), &value) in other.entry_map() {
            rows_of_other.entry(k).or_default().push((j, value));
        }

        let mut sums: HashMap<(usize, usize), ProductSum> = HashMap::new();
        for (&(i, k), &lhs) in self.entry_map() {
            let Some(row) = rows_of_other.get(&k) else {
                continue;
            };
            for &(j, rhs) in row {
                sums.entry((i, j)).or_default().push(lhs, rhs);
            }
        }

        let mut result = SparseMatrix::new(rows, cols);
        for ((i, j), sum) in sums {
            result.store(i, j, policy.narrow_sum(sum)?);
        }
        Ok(result)
    }
}

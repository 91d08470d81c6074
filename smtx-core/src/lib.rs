#![no_std]

//! smtx core - sparse integer matrices and their text format
//!
//! This crate provides the matrix type, its arithmetic, and the pure
//! line-level codec for the `rows=` / `cols=` / `(r, c, v)` text format.
//! It performs no I/O; see the `smtx` crate for files and the CLI.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{decode, encode, MatrixDecoder, MatrixHeader};
pub use matrix::{Entry, SparseMatrix, Value};
pub use ops::ArithmeticPolicy;
pub use traits::{MatrixAccess, MatrixOperations};

//! smtx - sparse integer matrices in a line-oriented text format
//!
//! This library adds file I/O and the command-line workflow on top of
//! `smtx-core`:
//!
//! - **smtx-core**: matrix type, arithmetic, and the pure text codec (no I/O)
//! - **smtx**: reading/writing files, operation selection, session flow
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{MatrixFile, Operation, SessionConfig};
//!
//! fn example() -> smtx::Result<()> {
//!     let lhs = MatrixFile::load("a.txt")?;
//!     let rhs = MatrixFile::load("b.txt")?;
//!     let product = lhs.multiply(&rhs)?;
//!     MatrixFile::save("result.txt", &product)?;
//!
//!     // Or the whole flow at once
//!     smtx::run_operation(&SessionConfig::default(), Operation::Add, "a.txt", "b.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use smtx_core::{
    decode, encode, ArithmeticPolicy, Entry, ErrorCategory, MatrixAccess, MatrixError,
    MatrixOperations, SparseMatrix, Value,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod operation;
pub mod session;
pub mod summary;

pub use config::{SessionConfig, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use file_io::{read_matrix, write_matrix, MatrixFile};
pub use operation::Operation;
pub use session::{prompt, run_operation, PromptAnswers};
pub use summary::MatrixSummary;

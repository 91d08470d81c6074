//! Binary operation selector used by the CLI

use smtx_core::{ArithmeticPolicy, MatrixError, SparseMatrix};
use std::str::FromStr;

/// One of the three supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Parse a menu selection: `1` add, `2` subtract, `3` multiply
    pub fn from_choice(choice: &str) -> Result<Self, MatrixError> {
        match choice.trim() {
            "1" => Ok(Operation::Add),
            "2" => Ok(Operation::Subtract),
            "3" => Ok(Operation::Multiply),
            _ => Err(MatrixError::InvalidChoice),
        }
    }

    /// Menu number of this operation
    pub const fn choice(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// Run the operation on two operands
    pub fn apply(
        self,
        lhs: &SparseMatrix,
        rhs: &SparseMatrix,
        policy: ArithmeticPolicy,
    ) -> Result<SparseMatrix, MatrixError> {
        match self {
            Operation::Add => lhs.add_with(rhs, policy),
            Operation::Subtract => lhs.subtract_with(rhs, policy),
            Operation::Multiply => lhs.multiply_with(rhs, policy),
        }
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    /// Accepts menu numbers as well as `add`, `sub`/`subtract`, `mul`/`multiply`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "sub" | "subtract" => Ok(Operation::Subtract),
            "mul" | "multiply" => Ok(Operation::Multiply),
            other => Operation::from_choice(other),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! End-to-end flow: load two operands, apply one operation, save the result

use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::file_io::MatrixFile;
use crate::operation::Operation;

/// Load both operands, apply `operation`, and write the result
///
/// Nothing is written unless the operation succeeds. Returns the path the
/// result was saved to.
pub fn run_operation<L: AsRef<Path>, R: AsRef<Path>>(
    config: &SessionConfig,
    operation: Operation,
    left: L,
    right: R,
) -> Result<PathBuf> {
    let lhs = MatrixFile::load(left.as_ref())?;
    let rhs = MatrixFile::load(right.as_ref())?;

    info!(
        "{operation}: {}x{} and {}x{} ({:?} arithmetic)",
        lhs.rows(),
        lhs.cols(),
        rhs.rows(),
        rhs.cols(),
        config.policy
    );
    let result = operation.apply(&lhs, &rhs, config.policy)?;

    MatrixFile::save(config.output(), &result)?;
    Ok(config.output().to_path_buf())
}

/// Answers collected by the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    pub operation: Operation,
    pub left: String,
    pub right: String,
}

/// Ask for an operation and two input paths
///
/// Answers are whitespace-separated tokens, so they may arrive on one line or
/// several. The operation is a menu number or a name such as `mul`. An
/// unknown operation fails before any path is requested. A path
/// left unanswered comes back empty and fails when opened.
pub fn prompt<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PromptAnswers> {
    let mut tokens = Tokens::default();
    let io_error = |source| Error::FileUnavailable {
        origin: "console".to_owned(),
        source,
    };

    writeln!(output, "Select operation:").map_err(io_error)?;
    for op in Operation::ALL {
        writeln!(output, "{}. {}", op.choice(), op.label()).map_err(io_error)?;
    }
    output.flush().map_err(io_error)?;
    let operation: Operation = tokens.next(&mut input).map_err(io_error)?.parse()?;

    write!(output, "Enter the first input file path: ").map_err(io_error)?;
    output.flush().map_err(io_error)?;
    let left = tokens.next(&mut input).map_err(io_error)?;

    write!(output, "Enter the second input file path: ").map_err(io_error)?;
    output.flush().map_err(io_error)?;
    let right = tokens.next(&mut input).map_err(io_error)?;

    Ok(PromptAnswers {
        operation,
        left,
        right,
    })
}

/// Whitespace tokenizer over a line reader
#[derive(Default)]
struct Tokens {
    pending: std::collections::VecDeque<String>,
}

impl Tokens {
    /// Next token, or an empty string at end of input
    fn next<R: BufRead>(&mut self, input: &mut R) -> std::io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(String::new());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

//! Session configuration for running an operation end to end

use smtx_core::ArithmeticPolicy;
use std::path::{Path, PathBuf};

/// Output path used when none is configured
pub const DEFAULT_OUTPUT: &str = "result.txt";

/// Where results go and how arithmetic overflow is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Path the result matrix is written to
    pub output: PathBuf,
    /// Overflow handling for the selected operation
    pub policy: ArithmeticPolicy,
}

impl SessionConfig {
    /// Set the output path
    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    /// Set the overflow policy
    pub fn with_policy(mut self, policy: ArithmeticPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: ArithmeticPolicy::Checked,
        }
    }
}

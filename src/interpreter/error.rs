use std::{error::Error, fmt::Display};

/// Any semantic violation discovered while walking the AST: duplicate definitions, unknown
/// names, arity mismatches, a missing `main`, an unassignable left-hand side, division by
/// zero, or a call stack that ran past the configured depth limit (§4.3, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    pub line: usize,
    pub message: String,
}

impl RuntimeError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "runtime error at line {}: {}", self.line, self.message)
    }
}

impl Error for RuntimeError {}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

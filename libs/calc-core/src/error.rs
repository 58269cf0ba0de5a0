//! Error types for calc-core

use thiserror::Error;

/// Result type for calc-core operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Calculation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Average over an empty input sequence
    #[error("Cannot calculate average of empty list")]
    EmptyInput,

    /// Chained operation requested before any result exists
    #[error("No previous result to chain")]
    NoPriorResult,

    /// Operator tag not recognized at the parse boundary
    #[error("Unknown operation: {0}")]
    UnknownOperator(String),
}

impl CalcError {
    pub fn unknown_operator(tag: impl Into<String>) -> Self {
        Self::UnknownOperator(tag.into())
    }
}

//! Calculator - stateful wrapper over the arithmetic core
//!
//! Adds configurable precision, an append-only operation history and
//! chaining on top of the pure functions in [`crate::ops`], without
//! changing their arithmetic semantics.

use crate::error::{CalcError, Result};
use crate::history::{Operation, OperationRecord};
use crate::ops;
use std::str::FromStr;
use tracing::{debug, info};

/// Default number of decimal places for rounding
pub const DEFAULT_PRECISION: u32 = 2;

/// Chain-compatible binary operators
///
/// Closed set: averaging is not a binary operation and cannot be chained.
/// Textual tags (`"add"`, `"mul"`, `"div"`) are converted at the boundary
/// via [`FromStr`]; anything else is rejected with
/// [`CalcError::UnknownOperator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    Add,
    Multiply,
    Divide,
}

impl FromStr for ChainOp {
    type Err = CalcError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "add" => Ok(ChainOp::Add),
            "mul" => Ok(ChainOp::Multiply),
            "div" => Ok(ChainOp::Divide),
            other => Err(CalcError::unknown_operator(other)),
        }
    }
}

/// Calculator with history tracking and operation chaining
///
/// Every result is rounded to the configured precision (half away from
/// zero, see [`ops::round_to`]) before it is returned, recorded or used
/// for chaining. Precision is fixed at construction.
///
/// Failed operations change nothing: no history entry, no last-result
/// update. The instance is not safe for concurrent mutation; mutating
/// methods take `&mut self` and callers wanting to share one instance
/// across threads must add their own lock.
///
/// # Example
/// ```
/// use calc_core::Calculator;
///
/// let mut calc = Calculator::with_precision(2);
/// assert_eq!(calc.add(10.0, 20.0), 30.0);
/// assert_eq!(calc.get_history()[0].to_string(), "10 + 20 = 30");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Decimal places applied to every result
    precision: u32,
    /// Records of successful operations, in call order
    history: Vec<OperationRecord>,
    /// Most recent successful result, left operand for chaining
    last_result: Option<f64>,
}

impl Calculator {
    /// Create a calculator with [`DEFAULT_PRECISION`]
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create a calculator with the given number of decimal places
    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision,
            history: Vec::new(),
            last_result: None,
        }
    }

    /// Configured decimal places
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Most recent successful result, if any operation has completed
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Add two numbers
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = ops::round_to(ops::add(a, b), self.precision);
        self.record(Operation::Add { a, b }, result)
    }

    /// Multiply two numbers
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = ops::round_to(ops::multiply(a, b), self.precision);
        self.record(Operation::Multiply { a, b }, result)
    }

    /// Divide two numbers
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero; history and
    /// last result are left untouched.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        let raw = ops::divide(a, b)?;
        let result = ops::round_to(raw, self.precision);
        Ok(self.record(Operation::Divide { a, b }, result))
    }

    /// Calculate the arithmetic mean of a sequence of numbers
    ///
    /// # Errors
    /// Returns [`CalcError::EmptyInput`] when `values` is empty; history and
    /// last result are left untouched.
    pub fn calculate_average(&mut self, values: &[f64]) -> Result<f64> {
        let raw = ops::calculate_average(values)?;
        let result = ops::round_to(raw, self.precision);
        Ok(self.record(
            Operation::Average {
                values: values.to_vec(),
            },
            result,
        ))
    }

    /// Chain an operation using the last result as the left operand
    ///
    /// Behaves exactly like the corresponding binary method, including
    /// rounding and history recording.
    ///
    /// # Errors
    /// Returns [`CalcError::NoPriorResult`] when no operation has completed
    /// successfully yet. Arithmetic errors propagate unchanged and leave
    /// the calculator state as it was.
    ///
    /// # Example
    /// ```
    /// use calc_core::{Calculator, ChainOp};
    ///
    /// let mut calc = Calculator::new();
    /// calc.add(100.0, 50.0);
    /// assert_eq!(calc.chain_operation(ChainOp::Multiply, 2.0).unwrap(), 300.0);
    /// ```
    pub fn chain_operation(&mut self, op: ChainOp, value: f64) -> Result<f64> {
        let left = self.last_result.ok_or(CalcError::NoPriorResult)?;
        match op {
            ChainOp::Add => Ok(self.add(left, value)),
            ChainOp::Multiply => Ok(self.multiply(left, value)),
            ChainOp::Divide => self.divide(left, value),
        }
    }

    /// Snapshot of the history in insertion order
    ///
    /// Returns a copy; mutating it does not affect the calculator.
    pub fn get_history(&self) -> Vec<OperationRecord> {
        self.history.clone()
    }

    /// Borrowed view of the history in insertion order
    pub fn history(&self) -> &[OperationRecord] {
        &self.history
    }

    /// Empty the history
    ///
    /// The last result is kept: chaining remains possible after a clear.
    pub fn clear_history(&mut self) {
        self.history = Vec::new();
        info!("History cleared");
    }

    fn record(&mut self, operation: Operation, result: f64) -> f64 {
        let record = OperationRecord::new(operation, result);
        debug!(operation = %record, "operation");
        self.history.push(record);
        self.last_result = Some(result);
        result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

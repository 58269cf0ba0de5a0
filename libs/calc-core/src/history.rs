//! History record types
//!
//! Every successful calculation produces one immutable [`OperationRecord`].
//! Records render as human-readable lines like `10 + 20 = 30` and keep
//! insertion order as their only meaningful order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A performed operation together with its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Addition of two operands
    Add { a: f64, b: f64 },
    /// Multiplication of two operands
    Multiply { a: f64, b: f64 },
    /// Division of `a` by `b`
    Divide { a: f64, b: f64 },
    /// Arithmetic mean over a sequence
    Average { values: Vec<f64> },
}

impl Operation {
    /// Operator symbol used in rendered history lines
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "+",
            Operation::Multiply { .. } => "*",
            Operation::Divide { .. } => "/",
            Operation::Average { .. } => "avg",
        }
    }
}

/// One completed calculation
///
/// Created exactly once per successful operation and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// The operation that was performed
    pub operation: Operation,
    /// Result, already rounded to the owning calculator's precision
    pub result: f64,
    /// UTC time the operation completed
    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    pub(crate) fn new(operation: Operation, result: f64) -> Self {
        Self {
            operation,
            result,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Operation::Add { a, b } | Operation::Multiply { a, b } | Operation::Divide { a, b } => {
                write!(
                    f,
                    "{} {} {} = {}",
                    a,
                    self.operation.symbol(),
                    b,
                    self.result
                )
            }
            Operation::Average { values } => {
                let rendered: Vec<String> = values.iter().map(f64::to_string).collect();
                write!(f, "avg([{}]) = {}", rendered.join(", "), self.result)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_render_binary_record() {
        let record = OperationRecord::new(Operation::Add { a: 10.0, b: 20.0 }, 30.0);
        assert_eq!(record.to_string(), "10 + 20 = 30");

        let record = OperationRecord::new(Operation::Divide { a: 10.0, b: 4.0 }, 2.5);
        assert_eq!(record.to_string(), "10 / 4 = 2.5");
    }

    #[test]
    fn test_render_average_record() {
        let record = OperationRecord::new(
            Operation::Average {
                values: vec![10.0, 20.0, 30.0],
            },
            20.0,
        );
        assert_eq!(record.to_string(), "avg([10, 20, 30]) = 20");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = OperationRecord::new(Operation::Multiply { a: 2.5, b: 4.0 }, 10.0);
        let json = serde_json::to_string(&record).unwrap();
        let back: OperationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

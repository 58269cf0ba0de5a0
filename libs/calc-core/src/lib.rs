//! calc-core - Calculation library with history tracking
//!
//! Provides basic arithmetic with a stateless functional core and a stateful
//! calculator layered on top of it.
//!
//! # Features
//!
//! - **Stateless operations**: `add()`, `multiply()`, `divide()`,
//!   `calculate_average()` - pure functions, no shared state
//! - **Stateful calculator**: configurable decimal precision, append-only
//!   operation history, chaining on the last result
//! - **Typed errors**: division by zero, empty input, missing prior result
//!   and unknown operator tags are distinct error variants
//!
//! # Example
//!
//! ```rust
//! use calc_core::{ops, Calculator, ChainOp};
//!
//! // Stateless core
//! assert_eq!(ops::add(2.0, 3.0), 5.0);
//! assert_eq!(ops::divide(7.0, 2.0).unwrap(), 3.5);
//!
//! // Stateful calculator with 2 decimal places
//! let mut calc = Calculator::with_precision(2);
//! calc.add(100.0, 50.0);                                        // 150
//! let result = calc.chain_operation(ChainOp::Multiply, 2.0).unwrap();
//! assert_eq!(result, 300.0);
//!
//! for record in calc.history() {
//!     println!("{record}");                                      // "100 + 50 = 150", ...
//! }
//! ```
//!
//! # Rounding
//!
//! Every `Calculator` result is rounded to the configured precision before it
//! is returned, recorded or chained. The committed rule is round half away
//! from zero, see [`ops::round_to`].
//!
//! # Operations
//!
//! | Operation | Signature | Errors |
//! |-----------|-----------|--------|
//! | `add` | `add(a, b)` | none |
//! | `multiply` | `multiply(a, b)` | none |
//! | `divide` | `divide(a, b)` | `DivisionByZero` |
//! | `calculate_average` | `calculate_average(&[values])` | `EmptyInput` |
//! | `chain_operation` | `chain_operation(op, value)` | `NoPriorResult`, arithmetic errors |

pub mod calculator;
pub mod error;
pub mod history;
pub mod ops;

// Re-exports for convenience
pub use calculator::{Calculator, ChainOp, DEFAULT_PRECISION};
pub use error::{CalcError, Result};
pub use history::{Operation, OperationRecord};

// Re-export stateless functions for direct use
pub use ops::{add, calculate_average, divide, multiply, round_to};

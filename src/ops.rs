//! Arithmetic Operations Module
//!
//! Defines the closed set of supported operations and the pure evaluator.

use crate::error::ApiError;

// == Operation ==
/// One of the four supported arithmetic actions.
///
/// The set is closed: routing an unsupported action name fails at parse
/// time, so evaluation never sees an out-of-set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    // == Parse ==
    /// Parses an action name into an Operation.
    ///
    /// Returns None for anything outside {add, subtract, multiply, divide}.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            _ => None,
        }
    }

    // == Name ==
    /// Returns the wire name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    // == Apply ==
    /// Evaluates the operation over two integers.
    ///
    /// Pure and deterministic. Arithmetic wraps on overflow (two's
    /// complement), matching machine-int semantics; `wrapping_div` also
    /// covers `i64::MIN / -1`, which would otherwise panic. Division
    /// truncates toward zero and fails with `DivisionByZero` when the
    /// divisor is 0.
    pub fn apply(self, x: i64, y: i64) -> Result<i64, ApiError> {
        match self {
            Self::Add => Ok(x.wrapping_add(y)),
            Self::Subtract => Ok(x.wrapping_sub(y)),
            Self::Multiply => Ok(x.wrapping_mul(y)),
            Self::Divide => {
                if y == 0 {
                    Err(ApiError::DivisionByZero)
                } else {
                    Ok(x.wrapping_div(y))
                }
            }
        }
    }
}

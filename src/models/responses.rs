//! Response DTOs for the calculator API
//!
//! Defines the structure of the outgoing HTTP response body.

use serde::Serialize;

use crate::ops::Operation;

/// Response body for a successful calculation.
///
/// Field order matches the wire contract:
/// `{"action":…,"x":…,"y":…,"answer":…,"cached":…}`.
#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    /// The performed action
    pub action: &'static str,
    /// First operand
    pub x: i64,
    /// Second operand
    pub y: i64,
    /// The computed (or memoized) answer
    pub answer: i64,
    /// Whether the answer came from the cache
    pub cached: bool,
}

impl CalcResponse {
    /// Creates a new CalcResponse.
    pub fn new(op: Operation, x: i64, y: i64, answer: i64, cached: bool) -> Self {
        Self {
            action: op.name(),
            x,
            y,
            answer,
            cached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_response_serialize() {
        let resp = CalcResponse::new(Operation::Add, 3, 5, 8, false);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"action":"add","x":3,"y":5,"answer":8,"cached":false}"#
        );
    }

    #[test]
    fn test_calc_response_cached_flag() {
        let resp = CalcResponse::new(Operation::Multiply, 5, 5, 25, true);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""cached":true"#));
    }
}

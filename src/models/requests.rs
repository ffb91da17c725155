//! Request DTOs and validation for the calculator API
//!
//! Turns raw path/query input into a validated calculation request.

use serde::Deserialize;

use crate::error::ApiError;
use crate::ops::Operation;

/// Raw query parameters as received on the wire.
///
/// Operands are kept as strings so that missing or malformed values
/// produce this service's own 400 response instead of an extractor
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcParams {
    /// Raw first operand
    #[serde(default)]
    pub x: Option<String>,
    /// Raw second operand
    #[serde(default)]
    pub y: Option<String>,
}

/// A fully validated calculation request.
#[derive(Debug, Clone, Copy)]
pub struct CalcRequest {
    /// The operation to perform
    pub op: Operation,
    /// First operand
    pub x: i64,
    /// Second operand
    pub y: i64,
}

impl CalcRequest {
    /// Validates the raw action and operands.
    ///
    /// Operands must parse as base-10 signed integers with no trailing
    /// characters; the action must name a supported operation. Operands
    /// are checked first, so a request that is wrong in both ways reports
    /// the operand failure.
    pub fn validate(action: &str, params: &CalcParams) -> Result<Self, ApiError> {
        let x = parse_operand(params.x.as_deref())?;
        let y = parse_operand(params.y.as_deref())?;

        let op = Operation::parse(action)
            .ok_or_else(|| ApiError::UnknownAction(action.to_string()))?;

        Ok(Self { op, x, y })
    }
}

/// Parses one operand, treating a missing parameter as invalid.
fn parse_operand(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::InvalidOperand("missing".to_string()))?;
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidOperand(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(x: &str, y: &str) -> CalcParams {
        CalcParams {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
        }
    }

    #[test]
    fn test_validate_success() {
        let req = CalcRequest::validate("add", &params("3", "5")).unwrap();
        assert_eq!(req.op, Operation::Add);
        assert_eq!(req.x, 3);
        assert_eq!(req.y, 5);
    }

    #[test]
    fn test_validate_negative_operands() {
        let req = CalcRequest::validate("subtract", &params("-3", "-5")).unwrap();
        assert_eq!(req.x, -3);
        assert_eq!(req.y, -5);
    }

    #[test]
    fn test_validate_unknown_action() {
        let result = CalcRequest::validate("bogus", &params("1", "1"));
        assert!(matches!(result, Err(ApiError::UnknownAction(_))));
    }

    #[test]
    fn test_validate_non_integer_operand() {
        let result = CalcRequest::validate("add", &params("abc", "5"));
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));

        let result = CalcRequest::validate("add", &params("3", "5.5"));
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));
    }

    #[test]
    fn test_validate_trailing_characters_rejected() {
        let result = CalcRequest::validate("add", &params("3x", "5"));
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));

        let result = CalcRequest::validate("add", &params(" 3", "5"));
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));
    }

    #[test]
    fn test_validate_missing_operand() {
        let raw = CalcParams {
            x: Some("3".to_string()),
            y: None,
        };
        let result = CalcRequest::validate("add", &raw);
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));
    }

    #[test]
    fn test_operand_check_precedes_action_check() {
        // Both the action and an operand are invalid: the operand wins
        let result = CalcRequest::validate("bogus", &params("abc", "1"));
        assert!(matches!(result, Err(ApiError::InvalidOperand(_))));
    }

    #[test]
    fn test_params_deserialize() {
        let raw: CalcParams = serde_json::from_str(r#"{"x":"3","y":"5"}"#).unwrap();
        assert_eq!(raw.x.as_deref(), Some("3"));
        assert_eq!(raw.y.as_deref(), Some("5"));

        let raw: CalcParams = serde_json::from_str(r#"{"y":"5"}"#).unwrap();
        assert!(raw.x.is_none());
    }
}

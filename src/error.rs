//! Error types for the calculator service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

// == Response Bodies ==
// The HTTP contract fixes these bodies bit-exactly: each error response is
// a bare JSON string, not an object.
const MSG_UNKNOWN_ACTION: &str = "Provided action is not correct. Please use basic math equation";
const MSG_INVALID_OPERAND: &str = "Provided parameters are not correct. Assure integer numbers!";
const MSG_DIVISION_BY_ZERO: &str = "Division by zero is not allowed in this universe.";

// == Api Error Enum ==
/// Request-level failures, each mapped to a fixed HTTP response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Action outside the supported operation set
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Operand missing or not a base-10 signed integer
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UnknownAction(_) => (StatusCode::NOT_FOUND, MSG_UNKNOWN_ACTION),
            ApiError::InvalidOperand(_) => (StatusCode::BAD_REQUEST, MSG_INVALID_OPERAND),
            ApiError::DivisionByZero => (StatusCode::UNPROCESSABLE_ENTITY, MSG_DIVISION_BY_ZERO),
        };

        (status, Json(body)).into_response()
    }
}

// == Cache Write Error ==
/// Failure storing a computed result in the cache.
///
/// Never surfaced to the client: the handler logs it and responds as if
/// the write had succeeded.
#[derive(Error, Debug)]
pub enum CacheWriteError {
    /// Cache is at capacity and the key is not already present
    #[error("result cache is full ({0} entries)")]
    Full(usize),
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, ApiError>;

//! Request and Response models for the calculator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query parameters and serializing the response body,
//! plus the validation step that turns raw input into a typed request.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CalcParams, CalcRequest};
pub use responses::CalcResponse;

//! API Module
//!
//! HTTP handler and routing for the calculator service.
//!
//! # Endpoints
//! - `GET /:action?x={int}&y={int}` - Perform a calculation

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

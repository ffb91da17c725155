//! Calc Cache - A single-endpoint arithmetic HTTP API
//!
//! Serves four integer operations over `GET /:action?x=…&y=…` and
//! memoizes identical requests in a short-lived in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;

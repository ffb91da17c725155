//! Cache Module
//!
//! Provides in-memory memoization of computed results with TTL expiration.

mod entry;
mod key;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use store::ResultCache;

//! Cache Key Module
//!
//! Structured key identifying one (x, y, operation) computation.

use crate::ops::Operation;

// == Cache Key ==
/// Key under which a computed result is memoized.
///
/// A structured tuple rather than a concatenated string: derived `Eq` and
/// `Hash` make the key injective over the full integer domain, so negative
/// operands or adjacent digit boundaries cannot alias distinct requests the
/// way a delimiter-free string encoding can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    x: i64,
    y: i64,
    op: Operation,
}

impl CacheKey {
    /// Creates a key for one computation.
    pub fn new(x: i64, y: i64, op: Operation) -> Self {
        Self { x, y, op }
    }
}

//! Property-Based Tests for the Result Cache
//!
//! Uses proptest to verify round-trip and key-injectivity properties.

use proptest::prelude::*;

use crate::cache::{CacheKey, ResultCache};
use crate::ops::Operation;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 1000;
const TEST_TTL: u64 = 300;

// == Strategies ==
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A stored result is retrievable under the same (x, y, operation)
    // before its TTL elapses.
    #[test]
    fn prop_put_then_get_round_trip(x: i64, y: i64, op in operation_strategy(), answer: i64) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL);
        let key = CacheKey::new(x, y, op);

        cache.put(key, answer).unwrap();

        prop_assert_eq!(cache.get(&key), Some(answer));
    }

    // The latest put for a key wins.
    #[test]
    fn prop_overwrite_wins(x: i64, y: i64, op in operation_strategy(), first: i64, second: i64) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL);
        let key = CacheKey::new(x, y, op);

        cache.put(key, first).unwrap();
        cache.put(key, second).unwrap();

        prop_assert_eq!(cache.get(&key), Some(second));
        prop_assert_eq!(cache.len(), 1);
    }

    // Distinct (x, y, operation) tuples never alias: storing under one key
    // is invisible under any other. Exercises the negative-sign and
    // digit-boundary collision families that a concatenated string key
    // would be vulnerable to.
    #[test]
    fn prop_keys_are_injective(
        x1: i64, y1: i64, op1 in operation_strategy(),
        x2: i64, y2: i64, op2 in operation_strategy(),
    ) {
        prop_assume!((x1, y1, op1) != (x2, y2, op2));

        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL);
        cache.put(CacheKey::new(x1, y1, op1), 1).unwrap();

        prop_assert_eq!(cache.get(&CacheKey::new(x2, y2, op2)), None);
    }

    // Sweeping a cache of unexpired entries removes nothing.
    #[test]
    fn prop_sweep_keeps_live_entries(pairs in prop::collection::vec((any::<i64>(), any::<i64>()), 0..50)) {
        let mut cache = ResultCache::new(TEST_MAX_ENTRIES, TEST_TTL);
        for (x, y) in &pairs {
            cache.put(CacheKey::new(*x, *y, Operation::Add), x.wrapping_add(*y)).unwrap();
        }

        let len_before = cache.len();
        prop_assert_eq!(cache.sweep_expired(), 0);
        prop_assert_eq!(cache.len(), len_before);
    }
}

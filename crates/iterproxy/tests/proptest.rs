//! Property-based tests for iterproxy using proptest.

use iterproxy::{and_, not_, or_, IterProxy, Predicate};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn gt(threshold: i64) -> Predicate<i64> {
    Predicate::new(move |i| *i > threshold)
}

fn lte(threshold: i64) -> Predicate<i64> {
    Predicate::new(move |i| *i <= threshold)
}

/// Reference filtering: the in-order subsequence passing both bounds.
fn reference_filter(items: &[i64], lo: i64, hi: i64) -> Vec<i64> {
    items
        .iter()
        .copied()
        .filter(|i| *i > lo && *i <= hi)
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtered output is exactly the in-order subsequence of the source
    /// where every predicate holds.
    #[test]
    fn filter_yields_matching_subsequence(
        items in prop::collection::vec(any::<i64>(), 0..100),
        lo in any::<i64>(),
        hi in any::<i64>(),
    ) {
        let mut proxy = IterProxy::new(items.clone());
        proxy.filter_all([gt(lo), lte(hi)]).unwrap();

        prop_assert_eq!(proxy.all(), reference_filter(&items, lo, hi));
    }

    /// The proxy never yields more items than the source holds.
    #[test]
    fn filter_never_grows_output(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let mut proxy = IterProxy::new(items.clone());
        proxy.filter(gt(threshold)).unwrap();

        prop_assert!(proxy.all().len() <= items.len());
    }

    /// Successive many(k) calls partition the filtered sequence contiguously;
    /// their concatenation equals a fresh proxy's all().
    #[test]
    fn many_partitions_contiguously(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
        k in 1usize..10,
    ) {
        let mut proxy = IterProxy::new(items.clone());
        proxy.filter(gt(threshold)).unwrap();

        let mut batches = Vec::new();
        while let Ok(batch) = proxy.many(k) {
            prop_assert!(!batch.is_empty());
            prop_assert!(batch.len() <= k);
            batches.push(batch);
        }

        // Every batch is full except possibly the last.
        for batch in batches.iter().rev().skip(1) {
            prop_assert_eq!(batch.len(), k);
        }

        let concatenated: Vec<i64> = batches.into_iter().flatten().collect();

        let mut fresh = IterProxy::new(items);
        fresh.filter(gt(threshold)).unwrap();
        prop_assert_eq!(concatenated, fresh.all());
    }

    /// skip(k) then many(m) yields the trailing m items of many(k + m).
    #[test]
    fn skip_then_many_is_tail_of_larger_batch(
        items in prop::collection::vec(any::<i64>(), 0..100),
        k in 0usize..20,
        m in 1usize..20,
    ) {
        let mut skipped = IterProxy::new(items.clone());
        let head = skipped.skip(k).many(m);

        let expected: Vec<i64> = items.iter().copied().skip(k).take(m).collect();
        match head {
            Ok(batch) => prop_assert_eq!(batch, expected),
            Err(_) => prop_assert!(expected.is_empty()),
        }
    }

    /// iter_chunks(k) concatenated equals all(); every chunk is full except
    /// possibly the last.
    #[test]
    fn chunks_concatenate_to_all(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
        k in 1usize..10,
    ) {
        let mut chunked = IterProxy::new(items.clone());
        chunked.filter(gt(threshold)).unwrap();
        let chunks: Vec<Vec<i64>> = chunked.iter_chunks(k).collect();

        for chunk in chunks.iter().rev().skip(1) {
            prop_assert_eq!(chunk.len(), k);
        }
        if let Some(last) = chunks.last() {
            prop_assert!(!last.is_empty());
            prop_assert!(last.len() <= k);
        }

        let concatenated: Vec<i64> = chunks.into_iter().flatten().collect();

        let mut plain = IterProxy::new(items);
        plain.filter(gt(threshold)).unwrap();
        prop_assert_eq!(concatenated, plain.all());
    }

    /// one_or_none agrees with the head of the filtered sequence and never
    /// errors at exhaustion.
    #[test]
    fn one_or_none_agrees_with_head(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let mut proxy = IterProxy::new(items.clone());
        proxy.filter(gt(threshold)).unwrap();

        let expected = items.iter().copied().find(|i| *i > threshold);
        prop_assert_eq!(proxy.one_or_none(), expected);
    }

    /// and_/or_/not_ match the corresponding boolean operators pointwise.
    #[test]
    fn combinator_truth_tables(
        value in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        let f = gt(a);
        let g = lte(b);

        prop_assert_eq!(
            and_([f.clone(), g.clone()]).test(&value),
            f.test(&value) && g.test(&value)
        );
        prop_assert_eq!(
            or_([f.clone(), g.clone()]).test(&value),
            f.test(&value) || g.test(&value)
        );
        prop_assert_eq!(not_(f.clone()).test(&value), !f.test(&value));
    }

    /// De Morgan's laws hold for arbitrarily chosen predicates.
    #[test]
    fn de_morgan_laws(
        value in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        let f = gt(a);
        let g = lte(b);

        prop_assert_eq!(
            not_(and_([f.clone(), g.clone()])).test(&value),
            or_([not_(f.clone()), not_(g.clone())]).test(&value)
        );
        prop_assert_eq!(
            not_(or_([f.clone(), g.clone()])).test(&value),
            and_([not_(f), not_(g)]).test(&value)
        );
    }

    /// Any consuming call freezes the proxy against further filters.
    #[test]
    fn consumption_always_freezes(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let mut proxy = IterProxy::new(items);
        proxy.filter(gt(threshold)).unwrap();
        prop_assert!(!proxy.is_frozen());

        let _ = proxy.one_or_none();
        prop_assert!(proxy.is_frozen());
        prop_assert!(proxy.filter(lte(threshold)).is_err());
    }
}

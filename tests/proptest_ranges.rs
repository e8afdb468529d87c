//! Property-based tests for range sets and the boundedness heuristic

use plural_samples::prelude::*;
use plural_samples::sample::MAX_FRACTION_DIGITS;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Strategy for (scaled value, visible fraction digits) pairs
fn sample_strategy() -> impl Strategy<Value = (u64, u8)> {
    (0u64..2_000, 0u8..=MAX_FRACTION_DIGITS)
}

fn build(values: &[(u64, u8)]) -> RangeSet {
    let mut set = RangeSet::new();
    for &(scaled, digits) in values {
        set.add(&Sample::from_scaled(scaled, digits).unwrap());
    }
    set
}

proptest! {
    #[test]
    fn prop_size_counts_distinct_samples(values in prop::collection::vec(sample_strategy(), 0..200)) {
        let set = build(&values);
        let distinct: BTreeSet<_> = values.iter().copied().collect();
        prop_assert_eq!(set.len(), distinct.len());
    }

    #[test]
    fn prop_every_sample_is_covered(values in prop::collection::vec(sample_strategy(), 1..200)) {
        let set = build(&values);
        for &(scaled, digits) in &values {
            let covered = set
                .bucket(digits)
                .iter()
                .any(|range| range.start() <= scaled && scaled <= range.end());
            prop_assert!(covered, "{} at {} digits not covered by {}", scaled, digits, set);
        }
    }

    #[test]
    fn prop_buckets_are_sorted_and_disjoint(values in prop::collection::vec(sample_strategy(), 0..200)) {
        let set = build(&values);
        for digits in 0..=MAX_FRACTION_DIGITS {
            let bucket = set.bucket(digits);
            for range in bucket {
                prop_assert!(range.start() <= range.end());
                prop_assert_eq!(range.visible_fraction_digits(), digits);
            }
            for pair in bucket.windows(2) {
                prop_assert!(pair[0].end() < pair[1].start(), "{} overlaps {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn prop_trim_keeps_two_per_bucket(
        values in prop::collection::vec(sample_strategy(), 0..200),
        limit in 0usize..20,
    ) {
        let mut set = build(&values);
        let before: Vec<usize> = (0..=MAX_FRACTION_DIGITS).map(|d| set.bucket(d).len()).collect();
        let size = set.len();

        set.trim(limit);
        for digits in 0..=MAX_FRACTION_DIGITS {
            let kept = set.bucket(digits).len();
            let had = before[digits as usize];
            prop_assert!(kept <= had);
            prop_assert!(kept >= had.min(2));
        }
        prop_assert_eq!(set.len(), size);
    }

    #[test]
    fn prop_plain_equalities_are_bounded(values in prop::collection::vec(0u32..1000, 1..5)) {
        let rule = values
            .iter()
            .map(|value| format!("n is {}", value))
            .collect::<Vec<_>>()
            .join(" or ");
        prop_assert!(compute_bounded(Some(&rule), true));
        prop_assert!(compute_bounded(Some(&rule), false));
    }

    #[test]
    fn prop_modulus_alone_bounds_only_integers(divisor in 2u32..1000, remainder in 0u32..10) {
        let rule = format!("n mod {} is {}", divisor, remainder);
        prop_assert!(compute_bounded(Some(&rule), true));
        prop_assert!(!compute_bounded(Some(&rule), false));
    }
}

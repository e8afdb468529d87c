//! Add-only collection of ranges, bucketed by precision.

use std::fmt;

use super::range::{Range, RangeStatus, SEQUENCE_SEPARATOR};
use crate::sample::{Sample, MAX_FRACTION_DIGITS};

const BUCKET_COUNT: usize = MAX_FRACTION_DIGITS as usize + 1;

/// Fewest ranges [`RangeSet::trim`] keeps in a non-empty bucket.
const MIN_RANGES_PER_BUCKET: isize = 2;

/// An add-only set of disjoint [`Range`]s, one sorted bucket per visible
/// fraction digit count.
///
/// [`len`](Self::len) counts accepted samples, not ranges: a sample that
/// extends a range or opens a new one counts, a sample already covered does
/// not.
///
/// # Example
///
/// ```rust
/// use plural_samples::ranges::RangeSet;
/// use plural_samples::sample::Sample;
///
/// let mut set = RangeSet::new();
/// for value in [1, 2, 3, 7] {
///     set.add(&Sample::integer(value));
/// }
/// set.add(&Sample::from_scaled(15, 1).unwrap());
///
/// assert_eq!(set.to_string(), "1~3, 7, 1.5");
/// assert_eq!(set.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    buckets: [Vec<Range>; BUCKET_COUNT],
    size: usize,
}

impl RangeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample, extending an adjacent range or opening a new one.
    ///
    /// A sample already covered by any range changes nothing. Otherwise the
    /// first range in the sample's bucket that ends right before it is
    /// extended.
    pub fn add(&mut self, sample: &Sample) -> RangeStatus {
        let bucket = &mut self.buckets[sample.visible_fraction_digits() as usize];
        if bucket.iter().any(|range| range.contains(sample)) {
            return RangeStatus::Inside;
        }
        if let Some(range) = bucket
            .iter_mut()
            .find(|range| range.end().checked_add(1) == Some(sample.scaled()))
        {
            self.size += 1;
            return range.classify(sample);
        }

        let range = Range::singleton(sample);
        let position = bucket.partition_point(|existing| *existing < range);
        bucket.insert(position, range);
        self.size += 1;
        RangeStatus::Disjoint
    }

    /// Number of samples accepted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when no sample has been accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of ranges across all buckets.
    pub fn range_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Ranges holding samples with `visible_fraction_digits` fraction digits.
    pub fn bucket(&self, visible_fraction_digits: u8) -> &[Range] {
        self.buckets
            .get(visible_fraction_digits as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All ranges, bucket by bucket, each bucket in sorted order.
    pub fn ranges(&self) -> impl Iterator<Item = &Range> + '_ {
        self.buckets.iter().flatten()
    }

    /// Limit the number of retained ranges to about `limit`.
    ///
    /// Buckets are visited in precision order, sharing one budget. Before
    /// each bucket the budget is raised to at least two, so every non-empty
    /// bucket keeps its first two ranges even when `limit` is exhausted.
    /// Ranges beyond the budget are dropped from the tail of their bucket.
    ///
    /// The sample counter is left unchanged.
    pub fn trim(&mut self, limit: usize) {
        let mut budget = isize::try_from(limit).unwrap_or(isize::MAX);
        for bucket in &mut self.buckets {
            if budget < MIN_RANGES_PER_BUCKET {
                budget = MIN_RANGES_PER_BUCKET;
            }
            let keep = bucket.len().min(budget as usize);
            budget = budget.saturating_sub(bucket.len() as isize);
            bucket.truncate(keep);
        }
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, range) in self.ranges().enumerate() {
            if index > 0 {
                f.write_str(SEQUENCE_SEPARATOR)?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

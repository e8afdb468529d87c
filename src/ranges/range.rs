//! Contiguous runs of samples at one precision.

use std::fmt;

use crate::error::{Result, SampleError};
use crate::sample::{scale_for, write_scaled, Sample};

/// Separator between the endpoints of a two-element range (`5, 6`).
pub const SEQUENCE_SEPARATOR: &str = ", ";

/// Separator between the endpoints of a longer range (`5~9`).
pub const RANGE_SEPARATOR: &str = "~";

/// How a sample relates to an existing [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    /// The sample is already covered.
    Inside,
    /// The sample was `end + 1`; the range now ends at it.
    Extended,
    /// The sample is neither covered nor adjacent.
    Disjoint,
}

/// A contiguous interval `[start, end]` of scaled sample values.
///
/// All values share one visible fraction digit count. Once created the
/// interval can only grow, one unit at a time, through [`Range::classify`].
///
/// Ranges order by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    start: u64,
    end: u64,
    visible_fraction_digits: u8,
}

impl Range {
    /// Create a range spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// Fails when the samples differ in visible fraction digits or when
    /// `start` lies after `end`.
    pub fn new(start: &Sample, end: &Sample) -> Result<Self> {
        if start.visible_fraction_digits() != end.visible_fraction_digits() {
            return Err(SampleError::PrecisionMismatch {
                start: start.visible_fraction_digits(),
                end: end.visible_fraction_digits(),
            });
        }
        if start.scaled() > end.scaled() {
            return Err(SampleError::InvertedRange {
                start: start.scaled(),
                end: end.scaled(),
            });
        }
        Ok(Self {
            start: start.scaled(),
            end: end.scaled(),
            visible_fraction_digits: start.visible_fraction_digits(),
        })
    }

    /// Create a range holding exactly one sample.
    pub fn singleton(sample: &Sample) -> Self {
        Self {
            start: sample.scaled(),
            end: sample.scaled(),
            visible_fraction_digits: sample.visible_fraction_digits(),
        }
    }

    /// Scaled start value.
    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Scaled end value.
    #[inline]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// `10^visible_fraction_digits`.
    #[inline]
    pub fn scale(&self) -> u64 {
        scale_for(self.visible_fraction_digits)
    }

    /// Visible fraction digits shared by every value in the range.
    #[inline]
    pub fn visible_fraction_digits(&self) -> u8 {
        self.visible_fraction_digits
    }

    /// Number of samples the range covers.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `sample` lies within the range.
    pub fn contains(&self, sample: &Sample) -> bool {
        sample.visible_fraction_digits() == self.visible_fraction_digits
            && self.start <= sample.scaled()
            && sample.scaled() <= self.end
    }

    /// Classify `sample` against this range, extending the range when the
    /// sample sits directly after `end`.
    ///
    /// The sample must have the range's precision.
    pub fn classify(&mut self, sample: &Sample) -> RangeStatus {
        debug_assert_eq!(sample.visible_fraction_digits(), self.visible_fraction_digits);
        let value = sample.scaled();
        if self.start <= value && value <= self.end {
            RangeStatus::Inside
        } else if self.end.checked_add(1) == Some(value) {
            self.end = value;
            RangeStatus::Extended
        } else {
            RangeStatus::Disjoint
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.start, self.visible_fraction_digits)?;
        if self.start != self.end {
            let separator = if self.start + 1 == self.end {
                SEQUENCE_SEPARATOR
            } else {
                RANGE_SEPARATOR
            };
            f.write_str(separator)?;
            write_scaled(f, self.end, self.visible_fraction_digits)?;
        }
        Ok(())
    }
}

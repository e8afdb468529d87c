//! Per-class accumulation of one keyword's samples.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::diagnostics::Diagnostics;
use crate::error::{Result, SampleError};
use crate::ranges::RangeSet;
use crate::sample::Sample;

/// Samples kept in the range set for display.
pub const SAMPLE_LIMIT: usize = 8;

/// Distinct values at which a keyword is considered unbounded.
pub const UNBOUNDED_LIMIT: usize = 20;

/// Suffix marking a rendering that does not list every matching value.
pub const ELLIPSIS: &str = ", …";

// one slot per integer digit length; lengths of 9 and more share the last
const DIGIT_SLOTS: usize = 10;

/// Which samples a bucket holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleClass {
    /// Samples without visible fraction digits.
    Integer,
    /// Samples with one or more visible fraction digits.
    Decimal,
}

impl SampleClass {
    /// Class of a sample.
    pub fn of(sample: &Sample) -> Self {
        if sample.visible_fraction_digits() == 0 {
            Self::Integer
        } else {
            Self::Decimal
        }
    }
}

impl fmt::Display for SampleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        })
    }
}

#[derive(Debug, Clone)]
enum Observation {
    /// Distinct source values seen so far (as `f64` bits).
    Collecting(FxHashSet<u64>),
    /// Distinct count frozen by the first rendering.
    Rendered { distinct: usize },
}

/// The samples one keyword matched within one [`SampleClass`].
///
/// Memory stays bounded however many samples arrive: the range set stops
/// accepting after [`SAMPLE_LIMIT`] samples and the distinct-value tracker
/// stops growing once it exceeds [`UNBOUNDED_LIMIT`] entries. One sample per
/// integer digit length is kept aside so that renderings show every
/// magnitude that matched.
#[derive(Debug, Clone)]
pub struct SampleBucket {
    class: SampleClass,
    count: usize,
    samples: RangeSet,
    observation: Observation,
    representatives: [Option<Sample>; DIGIT_SLOTS],
}

impl SampleBucket {
    /// Create an empty bucket.
    pub fn new(class: SampleClass) -> Self {
        Self {
            class,
            count: 0,
            samples: RangeSet::new(),
            observation: Observation::Collecting(FxHashSet::default()),
            representatives: [None; DIGIT_SLOTS],
        }
    }

    /// Class of samples held.
    #[inline]
    pub fn class(&self) -> SampleClass {
        self.class
    }

    /// Total samples added.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Ranges retained for display.
    #[inline]
    pub fn ranges(&self) -> &RangeSet {
        &self.samples
    }

    /// True once [`render`](Self::render) has been called.
    pub fn is_rendered(&self) -> bool {
        matches!(self.observation, Observation::Rendered { .. })
    }

    /// Distinct values observed, capped just above [`UNBOUNDED_LIMIT`].
    pub fn distinct_observed(&self) -> usize {
        match &self.observation {
            Observation::Collecting(distinct) => distinct.len(),
            Observation::Rendered { distinct } => *distinct,
        }
    }

    /// Representative sample for each integer digit length, shortest first.
    pub fn representatives(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.representatives.iter().flatten()
    }

    /// Record a sample.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::AlreadyRendered`] after the first rendering.
    pub fn add(&mut self, sample: &Sample) -> Result<()> {
        let Observation::Collecting(distinct) = &mut self.observation else {
            return Err(SampleError::AlreadyRendered {
                keyword: self.class.to_string(),
            });
        };

        self.count += 1;
        if self.samples.len() < SAMPLE_LIMIT {
            self.samples.add(sample);
        }
        if distinct.len() <= UNBOUNDED_LIMIT {
            distinct.insert(sample.source().to_bits());
        }
        let slot = sample.digit_length().min(DIGIT_SLOTS - 1);
        if self.representatives[slot].is_none() {
            self.representatives[slot] = Some(*sample);
        }
        Ok(())
    }

    /// Render the retained samples.
    ///
    /// The bucket is bounded if the rule text says so or fewer than
    /// [`UNBOUNDED_LIMIT`] distinct values were observed. The first call
    /// freezes the observation and notes a diagnostic when the two disagree.
    /// Unbounded renderings are trimmed to [`SAMPLE_LIMIT`] ranges and end in
    /// [`ELLIPSIS`].
    pub fn render(
        &mut self,
        known_bounded: bool,
        keyword: &str,
        rule: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> String {
        let (distinct, first) = match &self.observation {
            Observation::Collecting(set) => (set.len(), true),
            Observation::Rendered { distinct } => (*distinct, false),
        };
        self.observation = Observation::Rendered { distinct };

        let bounded = known_bounded || distinct < UNBOUNDED_LIMIT;
        if first && bounded != known_bounded {
            diagnostics.note(format!(
                "{} computation from rule ≠ from items, rule: {}: {}; count: {}",
                self.class,
                keyword,
                rule.unwrap_or_default(),
                distinct
            ));
        }

        if !bounded {
            self.samples.trim(SAMPLE_LIMIT);
        }
        let mut display = self.samples.clone();
        for sample in self.representatives.iter().flatten() {
            display.add(sample);
        }

        let mut rendered = display.to_string();
        if !bounded {
            rendered.push_str(ELLIPSIS);
        }
        rendered
    }
}

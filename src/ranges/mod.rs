//! Compact ranges of samples.
//!
//! [`Range`] is a contiguous interval of scaled sample values at one
//! precision; [`RangeSet`] keeps one sorted bucket of ranges per precision and
//! merges arriving samples into them.

mod range;
mod range_set;

pub use self::range::{Range, RangeStatus, RANGE_SEPARATOR, SEQUENCE_SEPARATOR};
pub use self::range_set::RangeSet;

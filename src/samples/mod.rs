//! Per-keyword sample aggregation.
//!
//! A [`KeywordSamples`] holds two [`SampleBucket`]s, one for integer samples
//! and one for decimal samples, and the boundedness flags its rule text
//! implies (see [`compute_bounded`]).

pub mod bounded;
mod bucket;
mod keyword;

pub use self::bounded::{compute_bounded, conjunction_bounds, Clause, ClauseBounds};
pub use self::bucket::{SampleBucket, SampleClass, ELLIPSIS, SAMPLE_LIMIT, UNBOUNDED_LIMIT};
pub use self::keyword::{KeywordSamples, RenderedSamples, DECIMAL_LABEL, INTEGER_LABEL};

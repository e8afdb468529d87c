//! # plural-samples
//!
//! Compact sample ranges for plural rule keywords.
//!
//! A plural rule set maps numbers to keywords such as `one`, `few` or
//! `other`. This library probes a rule set with a fixed schedule of integers
//! and decimals, records which keyword each probe selects, and compresses the
//! matches of every keyword into a short, readable list of ranges:
//!
//! ```text
//! one     i is 1 and v is 0   @integers 1
//! other                       @integers 0, 2~8, 10, 100, 1000, 10000, 100000, …
//!                             @decimals 0.0~0.7, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …
//! ```
//!
//! Along the way it estimates whether each keyword matches finitely many
//! numbers, once from the rule text and once from the observed samples, and
//! records disagreements, overlapping rules and unmatched keywords as
//! [`Diagnostics`](diagnostics::Diagnostics).
//!
//! ## Example
//!
//! ```rust
//! use plural_samples::prelude::*;
//!
//! let rules = RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0);
//! let mut diagnostics = Diagnostics::new();
//! let mut collector = SampleCollector::collect(&rules, PluralType::Cardinal, &mut diagnostics)?;
//!
//! let one = collector.render("one", &mut diagnostics).unwrap();
//! assert_eq!(one.integers, "1");
//! assert_eq!(one.decimals, "1.0, 1.00, 1.000, 1.0000");
//!
//! let other = collector.render("other", &mut diagnostics).unwrap();
//! assert!(other.integers.ends_with(", …"));
//! # Ok::<(), plural_samples::error::SampleError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collector;
pub mod diagnostics;
pub mod error;
pub mod ranges;
pub mod report;
pub mod rules;
pub mod sample;
pub mod samples;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::collector::{check_for_duplicates, SampleCollector};
    pub use crate::diagnostics::Diagnostics;
    pub use crate::error::{Result, SampleError};
    pub use crate::ranges::{Range, RangeSet, RangeStatus};
    pub use crate::report::{generate, generate_builtin, KeywordReport, Report, RuleClassReport};
    pub use crate::rules::{PluralRules, PluralType, RuleSet};
    pub use crate::sample::Sample;
    pub use crate::samples::{compute_bounded, KeywordSamples, RenderedSamples, SampleBucket, ELLIPSIS};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        JsonWriter, PlainTextWriter, ReportWriter, SerializationError, XmlWriter,
    };
}

//! Error types for sample collection and range construction.

use thiserror::Error;

/// Errors that can occur while building samples, ranges and keyword buckets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// A sample value was negative.
    #[error("Sample value must not be negative: {0}")]
    NegativeValue(f64),

    /// A sample value was NaN or infinite.
    #[error("Sample value must be finite: {0}")]
    NonFiniteValue(f64),

    /// More visible fraction digits than the precision buckets support.
    #[error("Visible fraction digit count {0} exceeds the supported maximum of {max}", max = crate::sample::MAX_FRACTION_DIGITS)]
    PrecisionOutOfRange(u8),

    /// The two endpoints of a range have different visible fraction digits.
    #[error("Range endpoints must share precision: {start} vs {end} visible fraction digits")]
    PrecisionMismatch {
        /// Visible fraction digits of the start sample
        start: u8,
        /// Visible fraction digits of the end sample
        end: u8,
    },

    /// The start of a range lies after its end.
    #[error("Range start {start} lies after end {end}")]
    InvertedRange {
        /// Scaled start value
        start: u64,
        /// Scaled end value
        end: u64,
    },

    /// The scaled representation of a sample does not fit in 64 bits.
    #[error("Sample value {0} is too large to scale")]
    Overflow(f64),

    /// A sample was added after the samples were rendered.
    #[error("Can't add samples for '{keyword}' after rendering")]
    AlreadyRendered {
        /// Keyword (or sample class) that was already rendered
        keyword: String,
    },

    /// A locale filter was not a valid regular expression.
    #[error("Invalid locale filter '{pattern}': {reason}")]
    InvalidFilter {
        /// The pattern as given
        pattern: String,
        /// Why the regex engine rejected it
        reason: String,
    },
}

/// A specialized `Result` type for sample operations.
pub type Result<T> = std::result::Result<T, SampleError>;

//! Report serialization support.
//!
//! This module writes sample [`Report`]s in three formats: tab-separated
//! plain text, JSON, and the CLDR `supplementalData` XML layout with sample
//! annotations.
//!
//! # Example
//!
//! ```rust
//! use plural_samples::diagnostics::Diagnostics;
//! use plural_samples::report::generate_builtin;
//! use plural_samples::rules::PluralType;
//! use plural_samples::serialization::{PlainTextWriter, ReportWriter};
//!
//! let mut diagnostics = Diagnostics::new();
//! let report = generate_builtin(PluralType::Ordinal, Some("fr"), &mut diagnostics)?;
//!
//! let mut buffer = Vec::new();
//! PlainTextWriter::write(&[report], &mut buffer)?;
//! let text = String::from_utf8(buffer).unwrap();
//! assert!(text.starts_with("ordinal\tfr\tone\tn is 1\t@integers\t1\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::report::Report;

mod json_impl;
mod plaintext_impl;
mod xml_impl;

pub use self::json_impl::JsonWriter;
pub use self::plaintext_impl::PlainTextWriter;
pub use self::xml_impl::XmlWriter;

/// Trait for writing reports to an output stream.
pub trait ReportWriter {
    /// Write `reports`, one per plural type, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write<W>(reports: &[Report], writer: W) -> Result<(), SerializationError>
    where
        W: Write;
}

/// Errors that can occur while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

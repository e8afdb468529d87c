//! Integer and decimal samples for one plural keyword.

use std::fmt;

use super::bounded::compute_bounded;
use super::bucket::{SampleBucket, SampleClass};
use crate::diagnostics::Diagnostics;
use crate::error::{Result, SampleError};
use crate::rules::PluralType;
use crate::sample::Sample;

/// Label introducing integer samples.
pub const INTEGER_LABEL: &str = "@integer";

/// Label introducing decimal samples.
pub const DECIMAL_LABEL: &str = "@decimal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Collecting,
    Rendered,
}

/// The rendered samples of one keyword.
///
/// `Display` produces the tab-separated column layout:
/// `\t@integers\t{integers}` (or `\t\t` when there are none) followed by
/// `\t@decimals\t{decimals}` when there are decimal samples.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct RenderedSamples {
    /// Rendered integer samples, possibly empty.
    pub integers: String,
    /// Rendered decimal samples; empty for ordinals.
    pub decimals: String,
}

impl fmt::Display for RenderedSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.integers.is_empty() {
            f.write_str("\t\t")?;
        } else {
            write!(f, "\t{}s\t{}", INTEGER_LABEL, self.integers)?;
        }
        if !self.decimals.is_empty() {
            write!(f, "\t{}s\t{}", DECIMAL_LABEL, self.decimals)?;
        }
        Ok(())
    }
}

/// Collected samples for one keyword of a rule set.
///
/// The rule text is classified once, at construction, into a known-bounded
/// flag per sample class. The first [`render`](Self::render) compares those
/// flags with what was observed and closes the keyword to further samples.
///
/// # Example
///
/// ```rust
/// use plural_samples::diagnostics::Diagnostics;
/// use plural_samples::rules::PluralType;
/// use plural_samples::sample::Sample;
/// use plural_samples::samples::KeywordSamples;
///
/// let mut one = KeywordSamples::new("one", Some("n is 1"), PluralType::Cardinal);
/// one.add(&Sample::integer(1)).unwrap();
/// one.add(&Sample::from_scaled(10, 1).unwrap()).unwrap();
///
/// let rendered = one.render(&mut Diagnostics::new());
/// assert_eq!(rendered.integers, "1");
/// assert_eq!(rendered.decimals, "1.0");
/// assert!(one.add(&Sample::integer(1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSamples {
    keyword: String,
    rule: Option<String>,
    plural_type: PluralType,
    integers: SampleBucket,
    decimals: SampleBucket,
    known_integer_bounded: bool,
    known_decimal_bounded: bool,
    phase: Phase,
}

impl KeywordSamples {
    /// Create an empty collection for `keyword`, whose rule text is `rule`
    /// (`None` for the implicit `other`).
    pub fn new(keyword: impl Into<String>, rule: Option<&str>, plural_type: PluralType) -> Self {
        Self {
            keyword: keyword.into(),
            rule: rule.map(str::to_owned),
            plural_type,
            integers: SampleBucket::new(SampleClass::Integer),
            decimals: SampleBucket::new(SampleClass::Decimal),
            known_integer_bounded: compute_bounded(rule, true),
            known_decimal_bounded: compute_bounded(rule, false),
            phase: Phase::Collecting,
        }
    }

    /// The keyword.
    #[inline]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The rule text, `None` for the implicit `other`.
    #[inline]
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Whether the rule text alone proves the integer samples finite.
    #[inline]
    pub fn is_known_integer_bounded(&self) -> bool {
        self.known_integer_bounded
    }

    /// Whether the rule text alone proves the decimal samples finite.
    #[inline]
    pub fn is_known_decimal_bounded(&self) -> bool {
        self.known_decimal_bounded
    }

    /// Integer samples.
    #[inline]
    pub fn integers(&self) -> &SampleBucket {
        &self.integers
    }

    /// Decimal samples.
    #[inline]
    pub fn decimals(&self) -> &SampleBucket {
        &self.decimals
    }

    /// Total samples added to both classes.
    pub fn count(&self) -> usize {
        self.integers.count() + self.decimals.count()
    }

    /// True once [`render`](Self::render) has been called.
    #[inline]
    pub fn is_rendered(&self) -> bool {
        self.phase == Phase::Rendered
    }

    /// Route a sample to the bucket of its class.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::AlreadyRendered`] once the keyword was rendered.
    pub fn add(&mut self, sample: &Sample) -> Result<()> {
        if self.phase == Phase::Rendered {
            return Err(SampleError::AlreadyRendered {
                keyword: self.keyword.clone(),
            });
        }
        match SampleClass::of(sample) {
            SampleClass::Integer => self.integers.add(sample),
            SampleClass::Decimal => self.decimals.add(sample),
        }
    }

    /// Render both classes, closing the keyword to further samples.
    ///
    /// Decimal samples are suppressed for ordinal rule sets. Rendering twice
    /// yields the same text and reports mismatches only once.
    pub fn render(&mut self, diagnostics: &mut Diagnostics) -> RenderedSamples {
        if self.phase == Phase::Collecting {
            tracing::trace!(
                target: "plural_samples::samples",
                keyword = %self.keyword,
                count = self.count(),
                "rendering keyword samples"
            );
            self.phase = Phase::Rendered;
        }

        let rule = self.rule.as_deref();
        let integers = self.integers.render(
            self.known_integer_bounded,
            &self.keyword,
            rule,
            diagnostics,
        );
        let decimals = match self.plural_type {
            PluralType::Ordinal => String::new(),
            PluralType::Cardinal => self.decimals.render(
                self.known_decimal_bounded,
                &self.keyword,
                rule,
                diagnostics,
            ),
        };
        RenderedSamples { integers, decimals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bounds_come_from_rule_text() {
        let one = KeywordSamples::new("one", Some("i is 1 and v is 0"), PluralType::Cardinal);
        assert!(one.is_known_integer_bounded());
        assert!(one.is_known_decimal_bounded());

        let other = KeywordSamples::new("other", None, PluralType::Cardinal);
        assert!(!other.is_known_integer_bounded());
        assert!(!other.is_known_decimal_bounded());
    }

    #[test]
    fn test_samples_are_routed_by_class() {
        let mut samples = KeywordSamples::new("one", Some("i is 1"), PluralType::Cardinal);
        samples.add(&Sample::integer(1)).unwrap();
        samples.add(&Sample::from_scaled(15, 1).unwrap()).unwrap();
        samples.add(&Sample::from_scaled(150, 2).unwrap()).unwrap();
        assert_eq!(samples.integers().count(), 1);
        assert_eq!(samples.decimals().count(), 2);
        assert_eq!(samples.count(), 3);
    }

    #[test]
    fn test_ordinals_suppress_decimals() {
        let mut samples = KeywordSamples::new("one", Some("n is 1"), PluralType::Ordinal);
        samples.add(&Sample::integer(1)).unwrap();
        samples.add(&Sample::from_scaled(10, 1).unwrap()).unwrap();
        let rendered = samples.render(&mut Diagnostics::new());
        assert_eq!(rendered.integers, "1");
        assert_eq!(rendered.decimals, "");
        assert_eq!(rendered.to_string(), "\t@integers\t1");
    }

    #[test]
    fn test_display_layout() {
        let rendered = RenderedSamples {
            integers: String::new(),
            decimals: "0.1~0.9, …".to_string(),
        };
        assert_eq!(rendered.to_string(), "\t\t\t@decimals\t0.1~0.9, …");
    }

    #[test]
    fn test_render_is_repeatable_and_final() {
        let mut samples = KeywordSamples::new("two", Some("n is 2"), PluralType::Cardinal);
        samples.add(&Sample::integer(2)).unwrap();

        let mut diagnostics = Diagnostics::new();
        let first = samples.render(&mut diagnostics);
        let second = samples.render(&mut diagnostics);
        assert_eq!(first, second);
        assert!(samples.is_rendered());

        assert_eq!(
            samples.add(&Sample::integer(2)),
            Err(SampleError::AlreadyRendered {
                keyword: "two".to_string()
            })
        );
    }
}

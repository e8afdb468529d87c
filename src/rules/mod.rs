//! Plural rule sets.
//!
//! The collector only talks to rule sets through the [`PluralRules`] trait:
//! it needs the declared keywords, the keyword a sample selects, an
//! independent per-keyword match test and the textual rules.
//!
//! [`RuleSet`] is a concrete implementation made of `(keyword, text,
//! predicate)` triples. The text is what the boundedness heuristic and the
//! output see; the predicate is what actually evaluates samples, so the two
//! must describe the same condition. [`builtin`] bundles rule sets for a
//! handful of locales.
//!
//! ## Example
//!
//! ```rust
//! use plural_samples::rules::{PluralRules, RuleSet};
//! use plural_samples::sample::Sample;
//!
//! let rules = RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0);
//!
//! assert_eq!(rules.keywords(), vec!["one", "other"]);
//! assert_eq!(rules.select(&Sample::integer(1)), "one");
//! assert_eq!(rules.select(&Sample::integer(2)), "other");
//! assert_eq!(rules.rule_text("other"), None);
//! ```

pub mod builtin;

use std::fmt;

use crate::sample::Sample;

/// The implicit keyword selected when no rule matches.
pub const OTHER: &str = "other";

/// Kind of plural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PluralType {
    /// Counting plurals ("1 day", "2 days"); probed with decimals too.
    Cardinal,
    /// Ordering plurals ("1st", "2nd"); integers only.
    Ordinal,
}

impl PluralType {
    /// All plural types, cardinal first.
    pub const ALL: [PluralType; 2] = [PluralType::Cardinal, PluralType::Ordinal];
}

impl fmt::Display for PluralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
        })
    }
}

/// A plural rule set as seen by the sample collector.
pub trait PluralRules {
    /// Declared keywords in evaluation order, `other` last.
    fn keywords(&self) -> Vec<&str>;

    /// The keyword `sample` resolves to.
    fn select(&self, sample: &Sample) -> &str;

    /// Whether the rule for `keyword` alone matches `sample`.
    fn matches(&self, sample: &Sample, keyword: &str) -> bool;

    /// Rule text for `keyword`; `None` for the implicit `other`.
    fn rule_text(&self, keyword: &str) -> Option<&str>;

    /// Canonical text of the rules for `keyword`, used in diagnostics.
    fn rules_as_text(&self, keyword: &str) -> String {
        self.rule_text(keyword).unwrap_or_default().to_string()
    }

    /// Text identifying the rule set; equal signatures mean equivalent rules.
    fn signature(&self) -> String {
        self.keywords()
            .into_iter()
            .filter_map(|keyword| {
                self.rule_text(keyword)
                    .map(|rule| format!("{}: {}", keyword, rule))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Boxed sample predicate.
pub type Predicate = Box<dyn Fn(&Sample) -> bool + Send + Sync>;

/// One keyword's rule: its text and the predicate implementing it.
pub struct Rule {
    keyword: String,
    text: String,
    predicate: Predicate,
}

impl Rule {
    /// The keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The rule text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Evaluate the rule.
    pub fn applies_to(&self, sample: &Sample) -> bool {
        (self.predicate)(sample)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("keyword", &self.keyword)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// An ordered list of rules plus the implicit `other`.
///
/// [`select`](PluralRules::select) returns the first rule that applies.
/// [`matches`](PluralRules::matches) tests one keyword's rules in isolation,
/// which is what lets overlapping definitions be detected; the implicit
/// `other` matches exactly the samples no explicit rule applies to.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set containing only the implicit `other`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn with_rule<F>(mut self, keyword: impl Into<String>, text: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Sample) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            keyword: keyword.into(),
            text: text.into(),
            predicate: Box::new(predicate),
        });
        self
    }

    /// Explicit rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn declares(&self, keyword: &str) -> bool {
        self.rules.iter().any(|rule| rule.keyword == keyword)
    }
}

impl PluralRules for RuleSet {
    fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = Vec::with_capacity(self.rules.len() + 1);
        for rule in &self.rules {
            if !keywords.contains(&rule.keyword.as_str()) {
                keywords.push(&rule.keyword);
            }
        }
        if !keywords.contains(&OTHER) {
            keywords.push(OTHER);
        }
        keywords
    }

    fn select(&self, sample: &Sample) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(sample))
            .map_or(OTHER, |rule| rule.keyword.as_str())
    }

    fn matches(&self, sample: &Sample, keyword: &str) -> bool {
        if keyword == OTHER && !self.declares(OTHER) {
            return !self.rules.iter().any(|rule| rule.applies_to(sample));
        }
        self.rules
            .iter()
            .filter(|rule| rule.keyword == keyword)
            .any(|rule| rule.applies_to(sample))
    }

    fn rule_text(&self, keyword: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.keyword == keyword)
            .map(|rule| rule.text.as_str())
    }
}

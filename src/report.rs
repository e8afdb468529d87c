//! Sample reports across many locales.
//!
//! Locales whose rule sets have the same [`signature`](PluralRules::signature)
//! are grouped into one class and collected once. Every declared keyword of
//! every class is rendered; keywords no probe selected, and classes whose
//! renderings are indistinguishable from another class, are recorded as
//! failures.

use std::collections::BTreeMap;

use regex::Regex;

use crate::collector::SampleCollector;
use crate::diagnostics::Diagnostics;
use crate::error::{Result, SampleError};
use crate::rules::{builtin, PluralRules, PluralType, RuleSet};
use crate::samples::RenderedSamples;

/// Rendered samples of one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct KeywordReport {
    /// The keyword.
    pub keyword: String,
    /// Rule text; `None` for the implicit `other`.
    pub rule: Option<String>,
    /// Rendered samples; `None` when no probe selected the keyword.
    pub samples: Option<RenderedSamples>,
}

/// One group of locales sharing a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct RuleClassReport {
    /// Locales in the group, representative first.
    pub locales: Vec<String>,
    /// Per-keyword results, in declared keyword order.
    pub keywords: Vec<KeywordReport>,
}

impl RuleClassReport {
    /// The locale standing for the whole group.
    pub fn representative(&self) -> &str {
        self.locales.first().map(String::as_str).unwrap_or_default()
    }

    /// Result for `keyword`.
    pub fn keyword(&self, keyword: &str) -> Option<&KeywordReport> {
        self.keywords.iter().find(|report| report.keyword == keyword)
    }
}

/// Samples for every rule class of one plural type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Report {
    /// Plural type of every class.
    pub plural_type: PluralType,
    /// Classes ordered by their representative's position in the input.
    pub classes: Vec<RuleClassReport>,
}

impl Report {
    /// The class containing `locale`.
    pub fn class_of(&self, locale: &str) -> Option<&RuleClassReport> {
        self.classes
            .iter()
            .find(|class| class.locales.iter().any(|candidate| candidate == locale))
    }
}

struct RuleClass<R> {
    signature: String,
    rules: R,
    locales: Vec<String>,
}

/// Group `locales` by rule signature, preserving first-seen order.
fn group_by_signature<R, L>(locales: impl IntoIterator<Item = (L, R)>) -> Vec<RuleClass<R>>
where
    R: PluralRules,
    L: Into<String>,
{
    let mut classes: Vec<RuleClass<R>> = Vec::new();
    for (locale, rules) in locales {
        let signature = rules.signature();
        match classes.iter_mut().find(|class| class.signature == signature) {
            Some(class) => class.locales.push(locale.into()),
            None => classes.push(RuleClass {
                signature,
                rules,
                locales: vec![locale.into()],
            }),
        }
    }
    classes
}

/// Collect and render samples for every locale class.
///
/// # Errors
///
/// Propagates probe construction errors from the collector.
pub fn generate<R, L>(
    plural_type: PluralType,
    locales: impl IntoIterator<Item = (L, R)>,
    diagnostics: &mut Diagnostics,
) -> Result<Report>
where
    R: PluralRules,
    L: Into<String>,
{
    let classes = group_by_signature(locales);
    let mut reports = Vec::with_capacity(classes.len());

    for class in &classes {
        let representative = class.locales[0].as_str();
        let _span = tracing::debug_span!(
            target: "plural_samples::report",
            "rule_class",
            %plural_type,
            locale = representative
        )
        .entered();

        let mut collector = SampleCollector::collect(&class.rules, plural_type, diagnostics)?;
        let mut keywords = Vec::new();
        for keyword in class.rules.keywords() {
            let samples = collector.render(keyword, diagnostics);
            if samples.is_none() {
                diagnostics.fail(format!(
                    "***Failure: no samples for {}\t{}\t{}",
                    plural_type, representative, keyword
                ));
            }
            keywords.push(KeywordReport {
                keyword: keyword.to_string(),
                rule: class.rules.rule_text(keyword).map(str::to_owned),
                samples,
            });
        }

        if class.locales.len() > 1 {
            diagnostics.note(format!(
                "{}\tEQUIV:\t\t{}\t≣\t{}",
                plural_type,
                representative,
                class.locales[1..].join(", ")
            ));
        }
        reports.push(RuleClassReport {
            locales: class.locales.clone(),
            keywords,
        });
    }

    check_duplicate_results(plural_type, &reports, diagnostics);
    tracing::info!(
        target: "plural_samples::report",
        %plural_type,
        classes = reports.len(),
        failures = diagnostics.failure_count(),
        "report generated"
    );
    Ok(Report {
        plural_type,
        classes: reports,
    })
}

/// Fail for every group of distinct rule classes that render identically.
fn check_duplicate_results(
    plural_type: PluralType,
    reports: &[RuleClassReport],
    diagnostics: &mut Diagnostics,
) {
    let mut by_rendering: BTreeMap<Vec<(&str, Option<&RenderedSamples>)>, Vec<&str>> = BTreeMap::new();
    for report in reports {
        let rendering = report
            .keywords
            .iter()
            .map(|keyword| (keyword.keyword.as_str(), keyword.samples.as_ref()))
            .collect();
        by_rendering
            .entry(rendering)
            .or_default()
            .push(report.representative());
    }
    for representatives in by_rendering.into_values() {
        if representatives.len() > 1 {
            diagnostics.fail(format!(
                "***Failure: Duplicate results for {}: {}",
                plural_type,
                representatives.join(", ")
            ));
        }
    }
}

/// Run [`generate`] over the bundled rule sets, keeping locales in which the
/// regex `filter` finds a match.
///
/// # Errors
///
/// Returns [`SampleError::InvalidFilter`] when `filter` does not compile, and
/// propagates probe construction errors from the collector.
pub fn generate_builtin(
    plural_type: PluralType,
    filter: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<Report> {
    let filter = filter
        .map(|pattern| {
            Regex::new(pattern).map_err(|error| SampleError::InvalidFilter {
                pattern: pattern.to_string(),
                reason: error.to_string(),
            })
        })
        .transpose()?;
    let locales: Vec<(&str, RuleSet)> = builtin::locales(plural_type)
        .filter(|locale| filter.as_ref().map_or(true, |regex| regex.is_match(locale)))
        .filter_map(|locale| builtin::rules_for(plural_type, locale).map(|rules| (locale, rules)))
        .collect();
    generate(plural_type, locales, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_is_one() -> RuleSet {
        RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0)
    }

    #[test]
    fn test_equivalent_locales_are_grouped() {
        let mut diagnostics = Diagnostics::new();
        let report = generate(
            PluralType::Ordinal,
            vec![("aa", one_is_one()), ("bb", RuleSet::new()), ("cc", one_is_one())],
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(report.classes.len(), 2);
        assert_eq!(report.classes[0].locales, vec!["aa", "cc"]);
        assert_eq!(report.class_of("cc").unwrap().representative(), "aa");
        assert!(diagnostics.contains("ordinal\tEQUIV:\t\taa\t≣\tcc"));
        assert_eq!(diagnostics.failure_count(), 0);
    }

    #[test]
    fn test_keyword_without_samples_fails() {
        let rules = RuleSet::new().with_rule("zero", "n is 0.5", |s| s.n() == 0.5);
        let mut diagnostics = Diagnostics::new();
        let report = generate(PluralType::Ordinal, vec![("xx", rules)], &mut diagnostics).unwrap();

        let zero = report.classes[0].keyword("zero").unwrap();
        assert_eq!(zero.samples, None);
        assert_eq!(zero.rule.as_deref(), Some("n is 0.5"));
        assert!(diagnostics.contains("***Failure: no samples for ordinal\txx\tzero"));
        assert_eq!(diagnostics.failure_count(), 1);
    }

    #[test]
    fn test_identical_renderings_fail() {
        // different rule text, same behavior
        let first = RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0);
        let second = RuleSet::new().with_rule("one", "n in 1..1", |s| s.n() == 1.0);
        let mut diagnostics = Diagnostics::new();
        let report = generate(
            PluralType::Ordinal,
            vec![("aa", first), ("bb", second)],
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(report.classes.len(), 2);
        assert!(diagnostics.contains("***Failure: Duplicate results for ordinal: aa, bb"));
        assert_eq!(diagnostics.failure_count(), 1);
    }

    #[test]
    fn test_builtin_filter() {
        let mut diagnostics = Diagnostics::new();
        let report = generate_builtin(PluralType::Ordinal, Some("fr"), &mut diagnostics).unwrap();
        assert_eq!(report.classes.len(), 1);
        assert_eq!(report.classes[0].locales, vec!["fr"]);
        let one = report.classes[0].keyword("one").unwrap();
        assert_eq!(one.samples.as_ref().unwrap().integers, "1");
    }

    #[test]
    fn test_builtin_filter_alternation() {
        let mut diagnostics = Diagnostics::new();
        let report =
            generate_builtin(PluralType::Ordinal, Some("^(en|fr)$"), &mut diagnostics).unwrap();
        assert_eq!(report.classes.len(), 2);
        assert!(report.class_of("en").is_some());
        assert!(report.class_of("fr").is_some());
        assert!(report.class_of("it").is_none());
    }

    #[test]
    fn test_builtin_filter_rejects_bad_pattern() {
        let mut diagnostics = Diagnostics::new();
        let result = generate_builtin(PluralType::Ordinal, Some("[a-"), &mut diagnostics);
        match result {
            Err(SampleError::InvalidFilter { pattern, reason }) => {
                assert_eq!(pattern, "[a-");
                assert!(!reason.is_empty());
            }
            other => panic!("expected InvalidFilter, got {:?}", other.map(|r| r.classes.len())),
        }
    }
}

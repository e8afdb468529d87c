//! Probe schedule and sample collection for one rule set.
//!
//! [`SampleCollector::collect`] walks a fixed schedule of synthetic samples,
//! asks the rule set which keyword each one selects, checks that exactly one
//! keyword matches, and files the sample under that keyword.
//!
//! ## Probe schedule
//!
//! | precision | every value up to | powers of ten up to | plural types |
//! |-----------|-------------------|---------------------|--------------|
//! | 0         | 10000             | 100000              | all          |
//! | 1         | 10000.0           | 1000000.0           | cardinal     |
//! | 2         | 1000.00           | 1000000.00          | cardinal     |
//! | 3         | 100.000           | 1000000.000         | cardinal     |
//! | 4         | 10.0000           | 1000000.0000        | cardinal     |
//!
//! ## Example
//!
//! ```rust
//! use plural_samples::collector::SampleCollector;
//! use plural_samples::diagnostics::Diagnostics;
//! use plural_samples::rules::{PluralType, RuleSet};
//!
//! let rules = RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0);
//! let mut diagnostics = Diagnostics::new();
//! let mut collector = SampleCollector::collect(&rules, PluralType::Ordinal, &mut diagnostics).unwrap();
//!
//! let one = collector.render("one", &mut diagnostics).unwrap();
//! assert_eq!(one.integers, "1");
//! assert_eq!(diagnostics.failure_count(), 0);
//! ```

use std::collections::BTreeMap;
use std::iter;

use smallvec::SmallVec;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::rules::{PluralRules, PluralType};
use crate::sample::{scale_for, Sample};
use crate::samples::{KeywordSamples, RenderedSamples};

/// One precision level of the probe schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStep {
    /// Visible fraction digits of every probe in the step.
    pub visible_fraction_digits: u8,
    /// Every value from zero up to this one is probed.
    pub linear_limit: u64,
    /// Powers of ten up to this value are probed.
    pub power_limit: u64,
}

impl ProbeStep {
    const fn new(visible_fraction_digits: u8, linear_limit: u64, power_limit: u64) -> Self {
        Self {
            visible_fraction_digits,
            linear_limit,
            power_limit,
        }
    }

    /// Scaled probe values: the linear run, then the powers of ten.
    pub fn scaled_values(&self) -> impl Iterator<Item = u64> {
        let scale = scale_for(self.visible_fraction_digits);
        let linear_end = self.linear_limit.saturating_mul(scale);
        let power_end = self.power_limit.saturating_mul(scale);
        let powers = iter::successors(Some(1u64), |power| power.checked_mul(10))
            .take_while(move |power| *power <= power_end);
        (0..=linear_end).chain(powers)
    }

    /// Probe samples of this step.
    pub fn samples(&self) -> impl Iterator<Item = Result<Sample>> {
        let digits = self.visible_fraction_digits;
        self.scaled_values()
            .map(move |scaled| Sample::from_scaled(scaled, digits))
    }
}

const SCHEDULE: [ProbeStep; 5] = [
    ProbeStep::new(0, 10_000, 100_000),
    ProbeStep::new(1, 10_000, 1_000_000),
    ProbeStep::new(2, 1_000, 1_000_000),
    ProbeStep::new(3, 100, 1_000_000),
    ProbeStep::new(4, 10, 1_000_000),
];

/// Probe steps for `plural_type`: integers only for ordinals, all five
/// precisions for cardinals.
pub fn schedule(plural_type: PluralType) -> &'static [ProbeStep] {
    match plural_type {
        PluralType::Cardinal => &SCHEDULE,
        PluralType::Ordinal => &SCHEDULE[..1],
    }
}

/// Check that exactly one keyword of `rules` matches `sample`.
///
/// Every declared keyword is tested on its own, not only the one `select`
/// returns. Returns a message listing the competing rules when zero or
/// several keywords match.
pub fn check_for_duplicates<R>(rules: &R, sample: &Sample) -> Option<String>
where
    R: PluralRules + ?Sized,
{
    let matching: SmallVec<[&str; 4]> = rules
        .keywords()
        .into_iter()
        .filter(|keyword| rules.matches(sample, keyword))
        .collect();
    if matching.len() == 1 {
        return None;
    }

    let mut message = format!("Duplicate rules with {}:\t", sample);
    for keyword in matching {
        message.push_str(keyword);
        message.push_str(": ");
        message.push_str(&rules.rules_as_text(keyword));
        message.push_str("; ");
    }
    Some(message)
}

/// Samples of one rule set, grouped by the keyword they select.
#[derive(Debug, Clone)]
pub struct SampleCollector {
    plural_type: PluralType,
    keyword_to_samples: BTreeMap<String, KeywordSamples>,
    probe_count: usize,
}

impl SampleCollector {
    /// Run the probe schedule for `plural_type` against `rules`.
    ///
    /// Probes matching zero or several keywords are recorded as failures in
    /// `diagnostics`; collection always runs to completion.
    ///
    /// # Errors
    ///
    /// Only fails if a probe sample cannot be constructed.
    pub fn collect<R>(rules: &R, plural_type: PluralType, diagnostics: &mut Diagnostics) -> Result<Self>
    where
        R: PluralRules + ?Sized,
    {
        let mut collector = Self {
            plural_type,
            keyword_to_samples: BTreeMap::new(),
            probe_count: 0,
        };
        for step in schedule(plural_type) {
            for sample in step.samples() {
                collector.add(rules, &sample?, diagnostics)?;
            }
        }

        tracing::debug!(
            target: "plural_samples::collector",
            %plural_type,
            probes = collector.probe_count,
            keywords = collector.keyword_to_samples.len(),
            "collected samples"
        );
        Ok(collector)
    }

    fn add<R>(&mut self, rules: &R, sample: &Sample, diagnostics: &mut Diagnostics) -> Result<()>
    where
        R: PluralRules + ?Sized,
    {
        self.probe_count += 1;
        let keyword = rules.select(sample);
        if let Some(message) = check_for_duplicates(rules, sample) {
            diagnostics.fail(message);
        }

        if let Some(samples) = self.keyword_to_samples.get_mut(keyword) {
            return samples.add(sample);
        }
        let mut samples = KeywordSamples::new(keyword, rules.rule_text(keyword), self.plural_type);
        samples.add(sample)?;
        self.keyword_to_samples.insert(keyword.to_string(), samples);
        Ok(())
    }

    /// Plural type the schedule was run for.
    #[inline]
    pub fn plural_type(&self) -> PluralType {
        self.plural_type
    }

    /// Number of probes evaluated.
    #[inline]
    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    /// Keywords selected by at least one probe, in sorted order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.keyword_to_samples.keys().map(String::as_str)
    }

    /// Samples collected for `keyword`; `None` if no probe selected it.
    pub fn keyword_samples(&self, keyword: &str) -> Option<&KeywordSamples> {
        self.keyword_to_samples.get(keyword)
    }

    /// Mutable access to the samples of `keyword`, for rendering.
    pub fn keyword_samples_mut(&mut self, keyword: &str) -> Option<&mut KeywordSamples> {
        self.keyword_to_samples.get_mut(keyword)
    }

    /// Render the samples of `keyword`; `None` if no probe selected it.
    pub fn render(&mut self, keyword: &str, diagnostics: &mut Diagnostics) -> Option<RenderedSamples> {
        self.keyword_samples_mut(keyword)
            .map(|samples| samples.render(diagnostics))
    }
}

//! Bundled rule sets for a fixed list of locales.
//!
//! Rule texts use the `is` / `in` / `within` / `mod` syntax the boundedness
//! heuristic recognises. Each rule's predicate is written out by hand next to
//! its text.
//!
//! ```rust
//! use plural_samples::rules::builtin;
//! use plural_samples::rules::{PluralRules, PluralType};
//! use plural_samples::sample::Sample;
//!
//! let czech = builtin::rules_for(PluralType::Cardinal, "cs").unwrap();
//! assert_eq!(czech.select(&Sample::integer(3)), "few");
//! assert_eq!(czech.select(&Sample::new(1.5, 1).unwrap()), "many");
//! ```

use super::{PluralType, RuleSet};

type Family = fn() -> RuleSet;

const CARDINAL: &[(&str, Family)] = &[
    ("ar", arabic_cardinal),
    ("cs", west_slavic_cardinal),
    ("de", integer_one_cardinal),
    ("en", integer_one_cardinal),
    ("fr", french_cardinal),
    ("it", integer_one_cardinal),
    ("ja", other_only),
    ("ko", other_only),
    ("nl", integer_one_cardinal),
    ("pl", polish_cardinal),
    ("ru", east_slavic_cardinal),
    ("sk", west_slavic_cardinal),
    ("sv", integer_one_cardinal),
    ("uk", east_slavic_cardinal),
    ("zh", other_only),
];

const ORDINAL: &[(&str, Family)] = &[
    ("ar", other_only),
    ("cs", other_only),
    ("de", other_only),
    ("en", english_ordinal),
    ("fr", french_ordinal),
    ("it", italian_ordinal),
    ("ja", other_only),
    ("ko", other_only),
    ("nl", other_only),
    ("pl", other_only),
    ("ru", other_only),
    ("sk", other_only),
    ("sv", swedish_ordinal),
    ("uk", other_only),
    ("zh", other_only),
];

fn table(plural_type: PluralType) -> &'static [(&'static str, Family)] {
    match plural_type {
        PluralType::Cardinal => CARDINAL,
        PluralType::Ordinal => ORDINAL,
    }
}

/// Locales with bundled rules of `plural_type`, sorted.
pub fn locales(plural_type: PluralType) -> impl Iterator<Item = &'static str> {
    table(plural_type).iter().map(|(locale, _)| *locale)
}

/// Build the bundled rules of `plural_type` for `locale`.
pub fn rules_for(plural_type: PluralType, locale: &str) -> Option<RuleSet> {
    table(plural_type)
        .iter()
        .find(|(candidate, _)| *candidate == locale)
        .map(|(_, family)| family())
}

/// `x` is a whole number in `low..=high`.
fn in_range(x: f64, low: u64, high: u64) -> bool {
    x.fract() == 0.0 && x >= low as f64 && x <= high as f64
}

fn other_only() -> RuleSet {
    RuleSet::new()
}

fn integer_one_cardinal() -> RuleSet {
    RuleSet::new().with_rule("one", "i is 1 and v is 0", |s| s.i() == 1 && s.v() == 0)
}

fn french_cardinal() -> RuleSet {
    RuleSet::new().with_rule("one", "i in 0..1", |s| s.i() <= 1)
}

fn west_slavic_cardinal() -> RuleSet {
    RuleSet::new()
        .with_rule("one", "i is 1 and v is 0", |s| s.i() == 1 && s.v() == 0)
        .with_rule("few", "i in 2..4 and v is 0", |s| {
            (2..=4).contains(&s.i()) && s.v() == 0
        })
        .with_rule("many", "v is not 0", |s| s.v() != 0)
}

fn east_slavic_cardinal() -> RuleSet {
    RuleSet::new()
        .with_rule(
            "one",
            "v is 0 and i mod 10 is 1 and i mod 100 is not 11",
            |s| s.v() == 0 && s.i() % 10 == 1 && s.i() % 100 != 11,
        )
        .with_rule(
            "few",
            "v is 0 and i mod 10 in 2..4 and i mod 100 not in 12..14",
            |s| s.v() == 0 && (2..=4).contains(&(s.i() % 10)) && !(12..=14).contains(&(s.i() % 100)),
        )
        .with_rule(
            "many",
            "v is 0 and i mod 10 is 0 or v is 0 and i mod 10 in 5..9 or v is 0 and i mod 100 in 11..14",
            |s| {
                s.v() == 0
                    && (s.i() % 10 == 0
                        || (5..=9).contains(&(s.i() % 10))
                        || (11..=14).contains(&(s.i() % 100)))
            },
        )
}

fn polish_cardinal() -> RuleSet {
    RuleSet::new()
        .with_rule("one", "i is 1 and v is 0", |s| s.i() == 1 && s.v() == 0)
        .with_rule(
            "few",
            "v is 0 and i mod 10 in 2..4 and i mod 100 not in 12..14",
            |s| s.v() == 0 && (2..=4).contains(&(s.i() % 10)) && !(12..=14).contains(&(s.i() % 100)),
        )
        .with_rule(
            "many",
            "v is 0 and i is not 1 and i mod 10 in 0..1 or v is 0 and i mod 10 in 5..9 or v is 0 and i mod 100 in 12..14",
            |s| {
                s.v() == 0
                    && ((s.i() != 1 && s.i() % 10 <= 1)
                        || (5..=9).contains(&(s.i() % 10))
                        || (12..=14).contains(&(s.i() % 100)))
            },
        )
}

fn arabic_cardinal() -> RuleSet {
    RuleSet::new()
        .with_rule("zero", "n is 0", |s| s.n() == 0.0)
        .with_rule("one", "n is 1", |s| s.n() == 1.0)
        .with_rule("two", "n is 2", |s| s.n() == 2.0)
        .with_rule("few", "n mod 100 in 3..10", |s| in_range(s.n() % 100.0, 3, 10))
        .with_rule("many", "n mod 100 in 11..99", |s| in_range(s.n() % 100.0, 11, 99))
}

fn english_ordinal() -> RuleSet {
    RuleSet::new()
        .with_rule("one", "n mod 10 is 1 and n mod 100 is not 11", |s| {
            s.n() % 10.0 == 1.0 && s.n() % 100.0 != 11.0
        })
        .with_rule("two", "n mod 10 is 2 and n mod 100 is not 12", |s| {
            s.n() % 10.0 == 2.0 && s.n() % 100.0 != 12.0
        })
        .with_rule("few", "n mod 10 is 3 and n mod 100 is not 13", |s| {
            s.n() % 10.0 == 3.0 && s.n() % 100.0 != 13.0
        })
}

fn french_ordinal() -> RuleSet {
    RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0)
}

fn italian_ordinal() -> RuleSet {
    RuleSet::new().with_rule("many", "n is 8 or n is 11 or n is 80 or n is 800", |s| {
        [8.0, 11.0, 80.0, 800.0].contains(&s.n())
    })
}

fn swedish_ordinal() -> RuleSet {
    RuleSet::new().with_rule(
        "one",
        "n mod 10 in 1..2 and n mod 100 not in 11..12",
        |s| in_range(s.n() % 10.0, 1, 2) && !in_range(s.n() % 100.0, 11, 12),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PluralRules;
    use crate::sample::Sample;

    #[test]
    fn test_every_locale_has_both_types() {
        let cardinal: Vec<_> = locales(PluralType::Cardinal).collect();
        let ordinal: Vec<_> = locales(PluralType::Ordinal).collect();
        assert_eq!(cardinal, ordinal);

        let mut sorted = cardinal.clone();
        sorted.sort_unstable();
        assert_eq!(cardinal, sorted);
    }

    #[test]
    fn test_unknown_locale() {
        assert!(rules_for(PluralType::Cardinal, "xx").is_none());
    }

    #[test]
    fn test_russian_cardinal() {
        let rules = rules_for(PluralType::Cardinal, "ru").unwrap();
        assert_eq!(rules.select(&Sample::integer(1)), "one");
        assert_eq!(rules.select(&Sample::integer(11)), "many");
        assert_eq!(rules.select(&Sample::integer(21)), "one");
        assert_eq!(rules.select(&Sample::integer(22)), "few");
        assert_eq!(rules.select(&Sample::integer(112)), "many");
        assert_eq!(rules.select(&Sample::new(1.5, 1).unwrap()), "other");
    }

    #[test]
    fn test_arabic_cardinal_decimals() {
        let rules = rules_for(PluralType::Cardinal, "ar").unwrap();
        assert_eq!(rules.select(&Sample::new(2.0, 1).unwrap()), "two");
        assert_eq!(rules.select(&Sample::new(103.0, 1).unwrap()), "few");
        assert_eq!(rules.select(&Sample::new(3.5, 1).unwrap()), "other");
    }

    #[test]
    fn test_english_ordinal() {
        let rules = rules_for(PluralType::Ordinal, "en").unwrap();
        let keywords: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23]
            .into_iter()
            .map(|value| rules.select(&Sample::integer(value)))
            .collect();
        assert_eq!(
            keywords,
            vec!["one", "two", "few", "other", "other", "other", "other", "one", "two", "few"]
        );
    }

    #[test]
    fn test_polish_many_excludes_one() {
        let rules = rules_for(PluralType::Cardinal, "pl").unwrap();
        assert_eq!(rules.select(&Sample::integer(1)), "one");
        assert_eq!(rules.select(&Sample::integer(0)), "many");
        assert_eq!(rules.select(&Sample::integer(11)), "many");
        assert_eq!(rules.select(&Sample::integer(24)), "few");
    }
}

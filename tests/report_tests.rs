//! Report generation over the bundled rule sets.

use plural_samples::prelude::*;
use plural_samples::rules::builtin;

#[test]
fn test_builtin_cardinal_classes() {
    let mut diagnostics = Diagnostics::new();
    let report = generate_builtin(PluralType::Cardinal, None, &mut diagnostics).unwrap();

    let germanic = report.class_of("en").unwrap();
    assert_eq!(germanic.locales, vec!["de", "en", "it", "nl", "sv"]);
    assert_eq!(germanic.representative(), "de");

    let east_slavic = report.class_of("uk").unwrap();
    assert_eq!(east_slavic.locales, vec!["ru", "uk"]);

    let total: usize = report.classes.iter().map(|class| class.locales.len()).sum();
    assert_eq!(total, builtin::locales(PluralType::Cardinal).count());

    assert!(diagnostics.contains("cardinal\tEQUIV:\t\tru\t≣\tuk"));
    assert!(diagnostics.contains("cardinal\tEQUIV:\t\tja\t≣\tko, zh"));
    assert_eq!(diagnostics.failure_count(), 0);
}

#[test]
fn test_builtin_ordinal_english() {
    let mut diagnostics = Diagnostics::new();
    let report = generate_builtin(PluralType::Ordinal, Some("en"), &mut diagnostics).unwrap();
    assert_eq!(report.classes.len(), 1);

    let english = &report.classes[0];
    let integers = |keyword: &str| {
        english
            .keyword(keyword)
            .and_then(|report| report.samples.as_ref())
            .map(|samples| samples.integers.clone())
            .unwrap()
    };

    // an explicit rule is always bounded for integers, so nothing is trimmed
    assert_eq!(integers("one"), "1, 21, 31, 41, 51, 61, 71, 81, 101, 1001");
    assert!(!integers("two").ends_with(", …"));
    assert!(integers("two").starts_with("2, 22, 32"));
    assert!(integers("few").starts_with("3, 23, 33"));
    // the sample limit is reached at 10, and 11 extends the run
    assert!(integers("other").starts_with("0, 4~11, 100"));
    assert_eq!(diagnostics.failure_count(), 0);
}

#[test]
fn test_builtin_ordinal_italian_is_bounded() {
    let mut diagnostics = Diagnostics::new();
    let report = generate_builtin(PluralType::Ordinal, Some("it"), &mut diagnostics).unwrap();
    let many = report.classes[0].keyword("many").unwrap();
    assert_eq!(many.samples.as_ref().unwrap().integers, "8, 11, 80, 800");
}

#[test]
fn test_fraction_free_slavic_rules_have_no_decimal_notes() {
    let mut diagnostics = Diagnostics::new();
    let report =
        generate_builtin(PluralType::Cardinal, Some("^(pl|ru|uk)$"), &mut diagnostics).unwrap();
    assert_eq!(report.classes.len(), 2);

    // every one/few/many disjunct starts with `v is 0`
    assert!(
        !diagnostics
            .messages()
            .any(|message| message.starts_with("decimal computation")),
        "{:?}",
        diagnostics
    );
    // `other` matches no integer at all, which the rule text cannot show
    assert!(diagnostics.contains("integer computation from rule ≠ from items, rule: other: ; count: 0"));
    assert!(diagnostics.contains("cardinal\tEQUIV:\t\tru\t≣\tuk"));
    assert_eq!(diagnostics.failure_count(), 0);

    let polish = report.class_of("pl").unwrap();
    let few = polish.keyword("few").unwrap().samples.as_ref().unwrap();
    assert_eq!(few.decimals, "");
}

#[test]
fn test_filter_is_a_regex() {
    let mut diagnostics = Diagnostics::new();
    let report = generate_builtin(PluralType::Cardinal, Some("^(en|fr)$"), &mut diagnostics).unwrap();
    let locales: Vec<&str> = report
        .classes
        .iter()
        .flat_map(|class| class.locales.iter().map(String::as_str))
        .collect();
    assert_eq!(locales, vec!["en", "fr"]);
}

#[test]
fn test_invalid_filter_is_an_error() {
    let mut diagnostics = Diagnostics::new();
    let error = generate_builtin(PluralType::Cardinal, Some("(en"), &mut diagnostics).unwrap_err();
    assert!(matches!(error, SampleError::InvalidFilter { ref pattern, .. } if pattern == "(en"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_filter_without_matches() {
    let mut diagnostics = Diagnostics::new();
    let report = generate_builtin(PluralType::Cardinal, Some("zz"), &mut diagnostics).unwrap();
    assert!(report.classes.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_custom_locales() {
    let rules = |locale: &str| {
        let keyword = if locale == "b" { "two" } else { "one" };
        RuleSet::new().with_rule(keyword, "n is 1", |s| s.n() == 1.0)
    };

    let mut diagnostics = Diagnostics::new();
    let report = generate(
        PluralType::Ordinal,
        ["a", "b", "c"].into_iter().map(|locale| (locale, rules(locale))),
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(report.classes.len(), 2);
    assert_eq!(report.classes[0].locales, vec!["a", "c"]);
    assert_eq!(report.classes[1].locales, vec!["b"]);
    assert_eq!(report.plural_type, PluralType::Ordinal);
}

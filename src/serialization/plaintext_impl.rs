//! Tab-separated report text.
//!
//! One line per keyword of every rule class:
//!
//! ```text
//! cardinal	de	one	i is 1 and v is 0	@integers	1
//! cardinal	de	other		@integers	0, 2~8, 10, 100, 1000, 10000, 100000, …	@decimals	0.0~0.7, …
//! ```
//!
//! The locale column holds the class representative. Keywords no probe
//! selected have nothing after the rule column.

use std::io::Write;

use super::{ReportWriter, SerializationError};
use crate::report::Report;

/// Plain text writer using tab-separated columns.
pub struct PlainTextWriter;

impl ReportWriter for PlainTextWriter {
    fn write<W>(reports: &[Report], mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        for report in reports {
            for class in &report.classes {
                for keyword in &class.keywords {
                    write!(
                        writer,
                        "{}\t{}\t{}\t{}",
                        report.plural_type,
                        class.representative(),
                        keyword.keyword,
                        keyword.rule.as_deref().unwrap_or_default()
                    )?;
                    if let Some(samples) = &keyword.samples {
                        write!(writer, "{}", samples)?;
                    }
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{KeywordReport, RuleClassReport};
    use crate::rules::PluralType;
    use crate::samples::RenderedSamples;

    fn sample_report() -> Report {
        Report {
            plural_type: PluralType::Cardinal,
            classes: vec![RuleClassReport {
                locales: vec!["de".to_string(), "en".to_string()],
                keywords: vec![
                    KeywordReport {
                        keyword: "one".to_string(),
                        rule: Some("i is 1 and v is 0".to_string()),
                        samples: Some(RenderedSamples {
                            integers: "1".to_string(),
                            decimals: String::new(),
                        }),
                    },
                    KeywordReport {
                        keyword: "other".to_string(),
                        rule: None,
                        samples: Some(RenderedSamples {
                            integers: "0, 2~16, …".to_string(),
                            decimals: "0.0~1.5, …".to_string(),
                        }),
                    },
                    KeywordReport {
                        keyword: "few".to_string(),
                        rule: Some("n is 0.5".to_string()),
                        samples: None,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_plaintext_format() {
        let mut buffer = Vec::new();
        PlainTextWriter::write(&[sample_report()], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "cardinal\tde\tone\ti is 1 and v is 0\t@integers\t1",
                "cardinal\tde\tother\t\t@integers\t0, 2~16, …\t@decimals\t0.0~1.5, …",
                "cardinal\tde\tfew\tn is 0.5",
            ]
        );
    }

    #[test]
    fn test_plaintext_empty() {
        let mut buffer = Vec::new();
        PlainTextWriter::write(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}

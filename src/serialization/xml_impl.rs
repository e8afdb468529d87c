//! CLDR `supplementalData` XML output.
//!
//! Each report becomes one `<plurals type="...">` block. Each rule class
//! becomes one `<pluralRules>` element listing its locales. Every keyword
//! with samples gets a `<pluralRule>` whose text is the rule followed by
//! `@integer` and `@decimal` sample annotations, each on its own continuation
//! line:
//!
//! ```text
//! <pluralRules locales="de en">
//!     <pluralRule count="one">i is 1 and v is 0
//!                           @integer 1</pluralRule>
//!     <pluralRule count="other">
//!                           @integer 0, 2~16, …
//!                           @decimal 0.0~1.5, …</pluralRule>
//! </pluralRules>
//! ```

use std::borrow::Cow;
use std::io::Write;

use super::{ReportWriter, SerializationError};
use crate::report::{KeywordReport, Report};
use crate::samples::{DECIMAL_LABEL, INTEGER_LABEL};

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
<!DOCTYPE supplementalData SYSTEM \"../../common/dtd/ldmlSupplemental.dtd\">\n\
<!--\n\
Copyright © 1991-2013 Unicode, Inc.\n\
CLDR data files are interpreted according to the LDML specification (http://unicode.org/reports/tr35/)\n\
For terms of use, see http://www.unicode.org/copyright.html\n\
-->\n\
<supplementalData>\n\
\x20   <version number=\"$Revision$\"/>\n\
\x20   <generation date=\"$Date$\"/>";

const PLURALS_COMMENTS: [&str; 2] = [
    "<!-- For a canonicalized list, use WritePluralRules -->",
    "<!-- if locale is known to have no plurals, there are no rules -->",
];

/// Line break and indent in front of each sample annotation.
const ANNOTATION_BREAK: &str = "\n                          ";

const FOOTER: &str = "</supplementalData>";

/// XML writer for the CLDR plural rules layout.
pub struct XmlWriter;

impl ReportWriter for XmlWriter {
    fn write<W>(reports: &[Report], mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        writeln!(writer, "{}", HEADER)?;
        for report in reports {
            writeln!(writer, "    <plurals type=\"{}\">", report.plural_type)?;
            for comment in PLURALS_COMMENTS {
                writeln!(writer, "        {}", comment)?;
            }
            for class in &report.classes {
                writeln!(
                    writer,
                    "        <pluralRules locales=\"{}\">",
                    escape(&class.locales.join(" "))
                )?;
                for keyword in &class.keywords {
                    if keyword.samples.is_none() {
                        continue;
                    }
                    writeln!(
                        writer,
                        "            <pluralRule count=\"{}\">{}</pluralRule>",
                        escape(&keyword.keyword),
                        escape(&annotated_rule(keyword))
                    )?;
                }
                writeln!(writer, "        </pluralRules>")?;
            }
            writeln!(writer, "    </plurals>")?;
        }
        writeln!(writer, "{}", FOOTER)?;
        writer.flush()?;
        Ok(())
    }
}

/// Rule text followed by its sample annotations.
fn annotated_rule(keyword: &KeywordReport) -> String {
    let mut text = keyword.rule.clone().unwrap_or_default();
    if let Some(samples) = &keyword.samples {
        for (label, rendered) in [
            (INTEGER_LABEL, &samples.integers),
            (DECIMAL_LABEL, &samples.decimals),
        ] {
            if !rendered.is_empty() {
                text.push_str(ANNOTATION_BREAK);
                text.push_str(label);
                text.push(' ');
                text.push_str(rendered);
            }
        }
    }
    text
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

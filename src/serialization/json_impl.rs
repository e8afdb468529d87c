//! JSON report output.

use std::io::Write;

use super::{ReportWriter, SerializationError};
use crate::report::Report;

/// JSON writer using serde_json.
///
/// Writes a pretty-printed array with one object per report.
pub struct JsonWriter;

impl ReportWriter for JsonWriter {
    fn write<W>(reports: &[Report], mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, reports)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::report::generate;
    use crate::rules::{PluralType, RuleSet};

    #[test]
    fn test_json_structure() {
        let rules = RuleSet::new().with_rule("one", "n is 1", |s| s.n() == 1.0);
        let report = generate(PluralType::Ordinal, vec![("xx", rules)], &mut Diagnostics::new()).unwrap();

        let mut buffer = Vec::new();
        JsonWriter::write(&[report], &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value[0]["plural_type"], "ordinal");
        let class = &value[0]["classes"][0];
        assert_eq!(class["locales"][0], "xx");
        assert_eq!(class["keywords"][0]["keyword"], "one");
        assert_eq!(class["keywords"][0]["rule"], "n is 1");
        assert_eq!(class["keywords"][0]["samples"]["integers"], "1");
        assert_eq!(class["keywords"][1]["rule"], serde_json::Value::Null);
    }
}

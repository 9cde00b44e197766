//! JSON output formatter for machine-readable display

use std::io::Write;

use crate::output::{OutputFormatter, ResolutionOutcome};

/// JSON formatter producing pretty-printed output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &ResolutionOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, outcome)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ResolvedItem;
    use crate::resolver::{DependencyScope, ResolvedCoordinates};
    use crate::version::VersionReference;

    #[test]
    fn test_json_output_is_valid() {
        let outcome = ResolutionOutcome {
            platform: "2.1.0.RELEASE".to_string(),
            dependencies: vec![ResolvedItem::new(
                "web",
                ResolvedCoordinates {
                    group_id: "com.acme".to_string(),
                    artifact_id: "acme-web".to_string(),
                    version: Some(VersionReference::of_value("1.2.0.RELEASE")),
                    scope: Some(DependencyScope::Compile),
                },
            )],
            ..Default::default()
        };

        let mut buffer = Vec::new();
        JsonFormatter::new().format(&outcome, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["platform"], "2.1.0.RELEASE");
        assert_eq!(value["dependencies"][0]["id"], "web");
        assert_eq!(value["dependencies"][0]["group_id"], "com.acme");
    }

    #[test]
    fn test_empty_collections_are_skipped() {
        let outcome = ResolutionOutcome {
            platform: "1.0.0".to_string(),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        JsonFormatter::new().format(&outcome, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("failures"));
        assert!(!text.contains("warnings"));
        assert!(text.ends_with('\n'));
    }
}

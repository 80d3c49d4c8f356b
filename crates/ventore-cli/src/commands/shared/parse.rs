use serde::de::DeserializeOwned;

/// Parse a lowercase or kebab-case enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use ventore_core::enums::{IssueKind, Severity};

    use super::parse_enum;

    #[test]
    fn parses_lowercase_enum() {
        let severity: Severity = parse_enum("HIGH", "severity").expect("severity should parse");
        assert_eq!(severity, Severity::High);
    }

    #[test]
    fn parses_kebab_and_snake_spellings() {
        let kind: IssueKind =
            parse_enum("unmatched_compliance", "kind").expect("kind should parse");
        assert_eq!(kind, IssueKind::UnmatchedCompliance);
        let kind: IssueKind = parse_enum("missing-project", "kind").expect("kind should parse");
        assert_eq!(kind, IssueKind::MissingProject);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Severity>("critical", "severity").expect_err("should fail");
        assert!(err.to_string().contains("invalid severity 'critical'"));
    }
}

//! Header-tolerant cell lookup and text coercion.
//!
//! Spreadsheet editors rename, re-case and re-space column headers. Lookups
//! therefore compare normalized header names (trimmed, whitespace runs
//! collapsed to one space, lowercased) on both sides, and accept a list of
//! candidate names per logical field.

use crate::row::Row;

/// Normalize a header name for comparison.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Value of the first candidate header present in `row`, or `""`.
///
/// Candidates are tried in order. If a row carries several headers that
/// normalize to the same name, the leftmost one is used.
#[must_use]
pub fn get_cell<'a, S: AsRef<str>>(row: &'a Row, candidates: &[S]) -> &'a str {
    let normalized: Vec<(String, &str)> = row
        .iter()
        .map(|(header, value)| (normalize_header(header), value))
        .collect();

    candidates
        .iter()
        .map(|candidate| normalize_header(candidate.as_ref()))
        .find_map(|wanted| {
            normalized
                .iter()
                .find(|(header, _)| *header == wanted)
                .map(|(_, value)| *value)
        })
        .unwrap_or("")
}

/// `true` for `true`, `yes`, `1` or `y` (any case, surrounding whitespace
/// ignored); `false` for everything else.
#[must_use]
pub fn to_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "1" | "y"
    )
}

/// Parse a spreadsheet number, ignoring thousands separators.
///
/// Returns `0.0` for empty, unparseable or non-finite input.
#[must_use]
pub fn to_number(value: &str) -> f64 {
    let cleaned = value.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(h, v)| ((*h).to_string(), (*v).to_string()))
            .collect()
    }

    #[rstest]
    #[case("Record ID", "record id")]
    #[case("  Known   Name ", "known name")]
    #[case("LEGAL\tINVESTMENT\nNAME", "legal investment name")]
    #[case("", "")]
    fn normalizes_headers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_header(input), expected);
    }

    #[test]
    fn get_cell_ignores_case_and_spacing() {
        let r = row(&[("  record   ID", "R1"), ("Known Name", "Acme")]);
        assert_eq!(get_cell(&r, &["Record ID"]), "R1");
        assert_eq!(get_cell(&r, &["known name"]), "Acme");
    }

    #[test]
    fn get_cell_tries_candidates_in_order() {
        let r = row(&[("Blocks Reserved", "12"), ("Shares Reserved", "7")]);
        assert_eq!(get_cell(&r, &["Shares Reserved", "Blocks Reserved"]), "7");
        assert_eq!(get_cell(&r, &["Shares Pending", "Blocks Reserved"]), "12");
    }

    #[test]
    fn get_cell_missing_column_is_empty() {
        let r = row(&[("Status", "Signed")]);
        assert_eq!(get_cell(&r, &["Notes"]), "");
        assert_eq!(get_cell::<&str>(&r, &[]), "");
    }

    #[test]
    fn get_cell_prefers_leftmost_duplicate() {
        let r = row(&[("Notes", "first"), ("NOTES ", "second")]);
        assert_eq!(get_cell(&r, &["notes"]), "first");
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case(" Yes ", true)]
    #[case("y", true)]
    #[case("Y", true)]
    #[case("1", true)]
    #[case("", false)]
    #[case("no", false)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("✓", false)]
    #[case("yes please", false)]
    fn coerces_bools(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(to_bool(input), expected);
    }

    #[rstest]
    #[case("1,250.5", 1250.5)]
    #[case("", 0.0)]
    #[case("   ", 0.0)]
    #[case("abc", 0.0)]
    #[case("42", 42.0)]
    #[case(" -3.5 ", -3.5)]
    #[case("1,000,000", 1_000_000.0)]
    #[case("$100", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    #[case("1e3", 1000.0)]
    #[case("0x1A", 0.0)]
    fn coerces_numbers(#[case] input: &str, #[case] expected: f64) {
        let n = to_number(input);
        assert!(n.is_finite());
        assert!((n - expected).abs() < f64::EPSILON, "{input} -> {n}");
    }
}

//! Tolerant header-row CSV parsing.
//!
//! The first non-blank record names the columns. Every later non-blank
//! record becomes a [`Row`] carrying every header: short records are padded
//! with empty cells, long records are cut to the header width. Both cases,
//! and any record the reader rejects, are reported as [`ParseWarning`]s and
//! parsing carries on.

use serde::Serialize;

use crate::row::Row;

/// A recoverable problem with one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line the record starts on (0 if unknown).
    pub line: u64,
    pub message: String,
}

/// Result of parsing one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse CSV text with a header row.
#[must_use]
pub fn parse_csv(text: &str) -> ParsedSheet {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warnings.push(ParseWarning {
                    line: error.position().map_or(0, csv::Position::line),
                    message: error.to_string(),
                });
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }

        let Some(header) = &headers else {
            headers = Some(record.iter().map(str::to_string).collect());
            continue;
        };

        let line = record.position().map_or(0, csv::Position::line);
        let width = header.len();
        if record.len() < width {
            warnings.push(ParseWarning {
                line,
                message: format!(
                    "too few fields: expected {width}, found {}",
                    record.len()
                ),
            });
        } else if record.len() > width {
            warnings.push(ParseWarning {
                line,
                message: format!(
                    "too many fields: expected {width}, found {}; extra cells dropped",
                    record.len()
                ),
            });
        }

        rows.push(
            header
                .iter()
                .enumerate()
                .map(|(index, name)| (name.clone(), record.get(index).unwrap_or("").to_string()))
                .collect(),
        );
    }

    ParsedSheet {
        headers: headers.unwrap_or_default(),
        rows,
        warnings,
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record.get(0).is_some_and(str::is_empty))
}

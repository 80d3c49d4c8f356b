//! Aligned plain-text tables.

const MIN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render string rows under `headers`, right-aligning numeric cells and
/// shrinking the widest columns first when `max_width` is exceeded.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(min_width(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn min_width(header: &str) -> usize {
    header.chars().count().max(MIN_WIDTH)
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > min_width(headers[*index]))
            .max_by_key(|(index, width)| (**width, std::cmp::Reverse(*index)))
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "\u{2026}".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('\u{2026}');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// ANSI color for status, severity and flag cells.
fn tone(value: &str) -> Option<&'static str> {
    match value.trim().to_ascii_lowercase().as_str() {
        "signed" | "sold" | "true" | "low" | "verified" => Some("32"),
        "pending" | "reserved" | "medium" => Some("33"),
        "lost" | "false" | "high" => Some("31"),
        _ => None,
    }
}

fn colorize(cell: &str, padded: String) -> String {
    match tone(cell) {
        Some(code) => padded.replacen(cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn aligns_columns_and_numbers() {
        let rows = vec![
            cells(&["A1", "Reserved", "1200"]),
            cells(&["aria:rid:R1:C1", "Signed", "25000.5"]),
        ];
        let table = render_table(&["id", "status", "value"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("   1200"));
        assert!(lines[3].ends_with("25000.5"));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![cells(&["R1", &"x".repeat(80)])];
        let table = render_table(&["id", "notes"], &rows, TableOptions {
            max_width: Some(40),
            color: false,
        });
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with('\u{2026}'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![cells(&["R1"])];
        let table = render_table(&["id", "name"], &rows, PLAIN);
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn colors_known_statuses_only() {
        let rows = vec![cells(&["high"]), cells(&["Acme"])];
        let table = render_table(&["value"], &rows, TableOptions {
            max_width: None,
            color: true,
        });
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[31mhigh\u{1b}[0m"));
        assert!(!lines[3].contains('\u{1b}'));
    }

    #[test]
    fn dash_is_not_numeric() {
        assert!(!looks_numeric("-"));
        assert!(looks_numeric("1,250.5"));
    }
}

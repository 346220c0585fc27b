#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_cell_width: Option<usize>,
}

/// Render a simple aligned table for string rows. Numeric-looking cells are
/// right-aligned; everything else left-aligned.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len());
            options
                .max_cell_width
                .map_or(longest, |max| longest.min(max.max(header.len())))
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.len());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let cell = truncate(cell, *width);
                let numeric = looks_numeric(&cell);
                pad(&cell, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_align_to_longest_cell() {
        let table = render_entity_table(
            &["id", "title"],
            &[
                vec!["t1".to_string(), "short".to_string()],
                vec!["t200".to_string(), "a longer title".to_string()],
            ],
            TableOptions::default(),
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id  "));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("t1    "));
    }

    #[test]
    fn long_cells_truncate_with_ellipsis() {
        let table = render_entity_table(
            &["title"],
            &[vec!["a very long title that should be cut".to_string()]],
            TableOptions {
                max_cell_width: Some(10),
            },
        );
        let row = table.lines().last().expect("row line");
        assert!(row.ends_with('…'));
        assert_eq!(row.chars().count(), 10);
    }

    #[test]
    fn numeric_cells_right_align() {
        let table = render_entity_table(
            &["points"],
            &[vec!["7".to_string()], vec!["1234".to_string()]],
            TableOptions::default(),
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     7");
        assert_eq!(lines[3], "  1234");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_entity_table(
            &["id", "due"],
            &[vec!["t1".to_string()]],
            TableOptions::default(),
        );
        assert!(table.lines().last().is_some_and(|line| line.contains('-')));
    }
}

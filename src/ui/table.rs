//! Comment table rendering

use crate::core::models::CommentRecord;

/// Column headings and widths (in characters) of the comment table
pub const COLUMNS: [(&str, usize); 7] = [
    ("Channel Id", 20),
    ("Author Display Name", 20),
    ("Video Id", 13),
    ("Like Count", 11),
    ("Reply Count", 11),
    ("Published At", 20),
    ("Text Display", 40),
];

const SEPARATOR: &str = " | ";

/// Flatten a cell to one line and fit it into `width` characters
pub fn fit_cell(value: &str, width: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    if flat.chars().count() <= width {
        return format!("{:<width$}", flat, width = width);
    }

    let mut cut: String = flat.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn render_row(cells: &[String]) -> String {
    COLUMNS
        .iter()
        .zip(cells)
        .map(|((_, width), cell)| fit_cell(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn header() -> String {
    let headings: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    let rule_width: usize =
        COLUMNS.iter().map(|(_, w)| w).sum::<usize>() + SEPARATOR.len() * (COLUMNS.len() - 1);
    format!("{}\n{}", render_row(&headings), "-".repeat(rule_width))
}

/// Number of pages needed for `total` rows, never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Render one page of the table. Out-of-range pages clamp to the last page.
pub fn render_page(records: &[CommentRecord], page: usize, page_size: usize) -> String {
    let page_size = page_size.max(1);
    let pages = page_count(records.len(), page_size);
    let page = page.min(pages - 1);

    let start = page * page_size;
    let end = (start + page_size).min(records.len());

    let mut lines = vec![header()];
    for record in &records[start..end] {
        lines.push(render_row(&record.cells()));
    }
    lines.push(format!(
        "Page {}/{} ({} comments)",
        page + 1,
        pages,
        records.len()
    ));
    lines.join("\n")
}

/// Render every record without paging
pub fn render_table(records: &[CommentRecord]) -> String {
    render_page(records, 0, records.len().max(1))
}

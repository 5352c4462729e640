//! Aligned table rendering for show and confirmation output
//!
//! Each column is as wide as its widest cell, header included. Lines are
//! tab-prefixed, cells left-aligned and space-padded, with a dash separator
//! under the header. With zero rows only the header and separator print.

/// Render rows under a header as an aligned text table.
///
/// Every row must have as many cells as the header; callers stringify
/// non-text cells (rowids) before handing them in.
pub fn render(rows: &[Vec<String>], header: &[String]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &separator, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push('\t');
    out.push_str(&padded.join(" "));
    out.push('\n');
}

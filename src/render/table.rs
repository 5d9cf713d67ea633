/// Column alignment. The separator row marks right-aligned columns with a
/// trailing colon, so the output stays valid markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render a markdown-compatible text table: one header row, a dashed
/// separator row, then the data rows, all padded to uniform column widths.
pub fn render_table(headers: &[&str], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), aligns, &widths);

    out.push('|');
    for (w, align) in widths.iter().zip(aligns) {
        match align {
            Align::Left => {
                out.push_str(&"-".repeat(w + 2));
            }
            Align::Right => {
                out.push_str(&"-".repeat(w + 1));
                out.push(':');
            }
        }
        out.push('|');
    }
    out.push('\n');

    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), aligns, &widths);
    }

    out
}

fn push_row<'a>(
    out: &mut String,
    cells: impl Iterator<Item = &'a str>,
    aligns: &[Align],
    widths: &[usize],
) {
    out.push('|');
    for ((cell, align), w) in cells.zip(aligns).zip(widths) {
        let pad = w - cell.chars().count();
        match align {
            Align::Left => {
                out.push(' ');
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 1));
            }
            Align::Right => {
                out.push_str(&" ".repeat(pad + 1));
                out.push_str(cell);
                out.push(' ');
            }
        }
        out.push('|');
    }
    out.push('\n');
}

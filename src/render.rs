//! Plain-text table rendering for terminal output.

use std::borrow::Cow;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Renders a header, a dashed separator and the rows, padding every column
/// to its widest cell. Columns without an explicit alignment are left-aligned.
pub fn render_table(headers: &[String], rows: &[Vec<String>], align: &[Align]) -> String {
    let mut widths = headers.iter().map(|h| display_width(h)).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }
    let widths = widths.into_iter().map(|w| w.max(3)).collect::<Vec<_>>();

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths, &[]));
    let dashes = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(&dashes, &widths, &[]));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths, align));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>], align: &[Align]) {
    print!("{}", render_table(headers, rows, align));
}

fn format_row(values: &[String], widths: &[usize], align: &[Align]) -> String {
    let line = values
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (value, width))| {
            let cell = sanitize_cell(value);
            let padding = " ".repeat(width.saturating_sub(display_width(&cell)));
            match align.get(idx).copied().unwrap_or_default() {
                Align::Left => format!("{cell}{padding}"),
                Align::Right => format!("{padding}{cell}"),
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

// ANSI colour sequences take no columns on screen.
fn display_width(value: &str) -> usize {
    let mut width = 0usize;
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

// ESC survives so colour sequences still measure as zero width.
fn sanitize_cell(value: &str) -> Cow<'_, str> {
    let is_stray_control = |ch: char| ch.is_control() && ch != '\u{1b}';
    if value.contains(is_stray_control) {
        Cow::Owned(value.replace(is_stray_control, " "))
    } else {
        Cow::Borrowed(value)
    }
}

//! Table rendering utilities for console outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

/// Cells carry their plain text (used for width) and the text to print,
/// which may contain ANSI sequences.
pub struct Cell {
    pub plain: String,
    pub styled: String,
}

impl Cell {
    pub fn plain(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            styled: s.clone(),
            plain: s,
        }
    }

    pub fn styled(plain: impl Into<String>, styled: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            styled: styled.into(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let columns = headers
            .into_iter()
            .map(|h| {
                let header = h.into();
                Column {
                    width: UnicodeWidthStr::width(header.as_str()),
                    header,
                }
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.plain.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, &col.header, col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                match row.get(i) {
                    Some(cell) => out.push_str(&pad(&cell.plain, &cell.styled, col.width)),
                    None => out.push_str(&pad("", "", col.width)),
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad(plain: &str, styled: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(plain));
    format!("{styled}{} ", " ".repeat(fill))
}

//! Plain-text table rendering for CLI listings.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut out = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            let pad = " ".repeat(widths[i].saturating_sub(UnicodeWidthStr::width(cell)));
            match col.align {
                Align::Left => {
                    out.push_str(cell);
                    out.push_str(&pad);
                }
                Align::Right => {
                    out.push_str(&pad);
                    out.push_str(cell);
                }
            }
            out.push_str("  ");
        }
        out.trim_end().to_string()
    }

    /// Header line followed by one line per row, without trailing newline.
    /// Rows are returned separately so callers can colour whole lines.
    pub fn render_lines(&self) -> (String, Vec<String>) {
        let widths = self.widths();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        let header = self.render_line(&headers, &widths);

        let rows = self
            .rows
            .iter()
            .map(|r| {
                let cells: Vec<&str> = r.iter().map(String::as_str).collect();
                self.render_line(&cells, &widths)
            })
            .collect();

        (header, rows)
    }

    pub fn render(&self) -> String {
        let (header, rows) = self.render_lines();
        let mut out = header;
        out.push('\n');
        for r in rows {
            out.push_str(&r);
            out.push('\n');
        }
        out
    }
}

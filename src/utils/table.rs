//! Fixed-width table rendering for the report summary.

use super::formatting::{pad_left, pad_right, rule, truncate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }

    /// Cells never widen the column: overlong text is truncated.
    fn fit(&self, value: &str) -> String {
        let value = truncate(value, self.width);
        match self.align {
            Align::Left => pad_right(&value, self.width),
            Align::Right => pad_left(&value, self.width),
        }
    }
}

enum Row {
    Cells(Vec<String>),
    Rule,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
    rule_width: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>, rule_width: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            rule_width,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Cells(row));
    }

    pub fn add_rule(&mut self) {
        self.rows.push(Row::Rule);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self.columns.iter().map(|c| c.fit(&c.header)).collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');
        out.push_str(&rule(self.rule_width, '-'));
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Rule => out.push_str(&rule(self.rule_width, '-')),
                Row::Cells(cells) => {
                    let line: Vec<String> = self
                        .columns
                        .iter()
                        .enumerate()
                        .map(|(i, col)| col.fit(cells.get(i).map(String::as_str).unwrap_or("")))
                        .collect();
                    out.push_str(line.join(" ").trim_end());
                }
            }
            out.push('\n');
        }

        out
    }
}

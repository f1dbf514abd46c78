// src/csv.rs
use std::borrow::Cow;

use crate::buffer::Buffer;

/* ---------------- Projection ---------------- */

/// The buffer laid out as a plain table: columns by ascending display index
/// (ties keep first-seen order), rows by ascending first-seen order.
/// Missing cells are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool { self.headers.is_empty() || self.rows.is_empty() }
    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }
}

pub fn project(buf: &Buffer) -> Table {
    if buf.is_empty() {
        return Table::default();
    }

    let mut cols: Vec<(&str, i64, &str)> = buf
        .columns()
        .map(|(id, c)| (id, c.index, c.name.as_str()))
        .collect();
    // stable: ties stay in first-seen order
    cols.sort_by_key(|&(_, index, _)| index);

    let mut rows: Vec<_> = buf.rows().map(|(_, r)| r).collect();
    rows.sort_by_key(|r| r.order);

    let headers = cols.iter().map(|&(_, _, name)| s!(name)).collect();
    let rows = rows
        .into_iter()
        .map(|r| {
            cols.iter()
                .map(|&(id, _, _)| r.cells.get(id).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Table { headers, rows }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Escape one field: `\r\n` → `\n`, then quote (doubling inner quotes) if the
/// field holds the separator, a quote or a line break. Otherwise raw.
pub fn escape_field(field: &str, sep: char) -> Cow<'_, str> {
    let field: Cow<'_, str> = if field.contains("\r\n") {
        Cow::Owned(field.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(field)
    };

    if needs_quotes(&field, sep) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        field
    }
}

/// Append one row (no line terminator).
pub fn write_row(out: &mut String, row: &[String], sep: char) {
    let mut first = true;
    for cell in row {
        if !first { out.push(sep); } else { first = false; }
        out.push_str(&escape_field(cell, sep));
    }
}

/// Header line plus one line per row, `\n`-joined, no trailing newline.
pub fn table_to_string(table: &Table, sep: char) -> String {
    if table.is_empty() {
        return s!();
    }

    let mut out = String::new();
    write_row(&mut out, &table.headers, sep);
    for r in &table.rows {
        out.push('\n');
        write_row(&mut out, r, sep);
    }
    out
}

/// Canonical CSV text of the buffer; "" when there is nothing to export.
pub fn serialize(buf: &Buffer) -> String {
    table_to_string(&project(buf), ',')
}

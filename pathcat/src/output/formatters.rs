//! Output formatter implementations.

use std::io::Write;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::TableFormatter;
use crate::table::{Row, Table};
use crate::Result;

/// Placeholder for empty cells in the human-readable table.
const EMPTY_CELL: &str = "-";

/// Formatter for delimited text (CSV or TSV).
///
/// Writes a header row followed by one record per table row. Empty cells
/// become empty fields.
pub struct DelimitedFormatter {
    delimiter: u8,
}

impl DelimitedFormatter {
    /// Comma-separated output.
    #[must_use]
    pub const fn csv() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab-separated output.
    #[must_use]
    pub const fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl TableFormatter for DelimitedFormatter {
    fn write_table(&self, table: &Table, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(out);

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.cells().iter().map(|c| c.as_deref().unwrap_or("")))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Formatter for JSON output.
///
/// Produces `{"columns": [...], "rows": [[...], ...]}` so column order is
/// kept and empty cells are `null`.
pub struct JsonFormatter;

struct JsonTable<'a>(&'a Table);

impl Serialize for JsonTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rows: Vec<&[Option<String>]> = self.0.rows().iter().map(Row::cells).collect();
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("columns", self.0.columns())?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

impl TableFormatter for JsonFormatter {
    fn write_table(&self, table: &Table, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &JsonTable(table))?;
        writeln!(out)?;
        Ok(())
    }
}

/// Formatter for a column-aligned table.
pub struct HumanFormatter;

impl TableFormatter for HumanFormatter {
    fn write_table(&self, table: &Table, out: &mut dyn Write) -> Result<()> {
        if table.is_empty() {
            writeln!(out, "No paths found.")?;
            return Ok(());
        }

        let render = |row: &Row| -> Vec<String> {
            row.cells()
                .iter()
                .map(|c| c.as_deref().unwrap_or(EMPTY_CELL).to_string())
                .collect()
        };
        let rendered: Vec<Vec<String>> = table.rows().iter().map(render).collect();

        let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
        for cells in &rendered {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_aligned(out, table.columns(), &widths)?;
        for cells in &rendered {
            write_aligned(out, cells, &widths)?;
        }
        Ok(())
    }
}

fn write_aligned(out: &mut dyn Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

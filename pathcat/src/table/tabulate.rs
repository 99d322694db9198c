//! Row construction.

use super::{Cell, Row, Table};
use crate::path::PathEntry;

/// Lay out classified entries as a table.
///
/// The number of folder-level columns is the largest folder depth among
/// `entries` (zero when there are none). Rows keep the order of `entries`.
#[must_use]
pub fn tabulate(entries: &[PathEntry]) -> Table {
    let depth = entries.iter().map(PathEntry::depth).max().unwrap_or(0);
    let rows = entries.iter().map(|entry| build_row(entry, depth)).collect();
    Table::new(depth, rows)
}

fn build_row(entry: &PathEntry, depth: usize) -> Row {
    let folders = entry.folders();
    let mut cells: Vec<Cell> = Vec::with_capacity(depth + 3);

    cells.push(Some(entry.drive().to_string()));
    cells.extend((0..depth).map(|level| folders.get(level).cloned()));
    cells.push(entry.file_name().map(str::to_string));
    cells.push(Some(entry.folder_path().to_string()));

    Row::new(cells)
}

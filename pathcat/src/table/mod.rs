//! Tabular output of classified paths.
//!
//! A [`Table`] has one `Drive` column, one `Folder Level N` column per level
//! of the deepest entry, then `File Name` and `Folder Path`. Shallower entries
//! are padded with empty cells, which are `None` rather than empty strings so
//! that exporters can tell "no folder at this level" apart from a value.
//!
//! # Examples
//!
//! ```
//! use pathcat::path::{classify, ClassifyOptions};
//! use pathcat::table::tabulate;
//!
//! let options = ClassifyOptions::default();
//! let entries: Vec<_> = [r"C:\a\b\c.txt", r"D:\x.txt"]
//!     .iter()
//!     .filter_map(|line| classify(line, &options))
//!     .collect();
//!
//! let table = tabulate(&entries);
//! assert_eq!(table.depth(), 2);
//! assert_eq!(
//!     table.columns(),
//!     ["Drive", "Folder Level 1", "Folder Level 2", "File Name", "Folder Path"]
//! );
//! assert_eq!(table.rows()[1].get(2), None);
//! ```

mod tabulate;

pub use tabulate::tabulate;

/// Header of the drive column.
pub const DRIVE_COLUMN: &str = "Drive";
/// Header of the file name column.
pub const FILE_NAME_COLUMN: &str = "File Name";
/// Header of the reconstructed path column.
pub const FOLDER_PATH_COLUMN: &str = "Folder Path";

/// Header of the folder column at 1-based `level`.
#[must_use]
pub fn folder_level_column(level: usize) -> String {
    format!("Folder Level {level}")
}

/// A single cell; `None` is an empty cell.
pub type Cell = Option<String>;

/// One table row, positionally aligned with [`Table::columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// All cells in column order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The value at `index`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(Option::as_deref)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The tabulated result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    depth: usize,
}

impl Table {
    pub(crate) fn new(depth: usize, rows: Vec<Row>) -> Self {
        Self {
            columns: Self::header(depth),
            rows,
            depth,
        }
    }

    /// A table with no rows and the minimal three-column header.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcat::Table;
    ///
    /// let table = Table::empty();
    /// assert!(table.is_empty());
    /// assert_eq!(table.columns(), ["Drive", "File Name", "Folder Path"]);
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    fn header(depth: usize) -> Vec<String> {
        let mut columns = Vec::with_capacity(depth + 3);
        columns.push(DRIVE_COLUMN.to_string());
        columns.extend((1..=depth).map(folder_level_column));
        columns.push(FILE_NAME_COLUMN.to_string());
        columns.push(FOLDER_PATH_COLUMN.to_string());
        columns
    }

    /// Column headers.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of folder-level columns.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}

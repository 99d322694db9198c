#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathcat
//!
//! A library for turning path listings into folder-level tables.
//!
//! A path listing is a text file with one path per line, as produced by
//! `dir /s /b`, `find`, backup catalogs or storage reports. pathcat decodes
//! the listing, classifies each line into a drive, folders and an optional
//! file name, and lays the result out as a table with one column per folder
//! level so it can be filtered and sorted in a spreadsheet.
//!
//! ## Core Types
//!
//! - [`PathEntry`] and [`ClassifyOptions`]: classification of one line
//! - [`Table`]: the tabulated result with variable folder-level columns
//! - [`ProcessOptions`] and [`Processed`]: end-to-end processing of a listing
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathcat::decode::FixedDetector;
//! use pathcat::{process, ProcessOptions};
//!
//! let listing = b"C:\\Users\\Ann\\notes.txt\nD:\\Backup\\2023\n";
//! let processed = process(listing, &ProcessOptions::default(), &FixedDetector::none());
//!
//! let table = &processed.table;
//! assert_eq!(
//!     table.columns(),
//!     ["Drive", "Folder Level 1", "Folder Level 2", "File Name", "Folder Path"]
//! );
//! assert_eq!(table.rows()[0].get(3), Some("notes.txt"));
//! assert_eq!(table.rows()[1].get(3), None);
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod pipeline;
pub mod table;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use decode::{ChardetDetector, EncodingDetector};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, TableFormatter};
pub use path::{classify, ClassifyOptions, PathEntry};
pub use pipeline::{process, process_file, process_text, ProcessOptions, Processed};
pub use table::{tabulate, Row, Table};

//! End-to-end processing of a path listing.
//!
//! Ties decoding, classification and tabulation together. A decode failure
//! is not returned as `Err`: it is reported on the [`Processed`] value next
//! to an empty table, so callers can show the message and still render
//! something.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::decode::{self, EncodingDetector, EncodingSource, ResolvedEncoding};
use crate::error::{Error, Result};
use crate::path::{classify, ClassifyOptions, PathEntry};
use crate::table::{tabulate, Table};

/// Options for one processing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    /// Classification options, including `filter_files`.
    pub classify: ClassifyOptions,
    /// Decode with this encoding instead of detecting one.
    pub encoding: Option<&'static Encoding>,
    /// Encoding used when detection has no answer.
    pub fallback_encoding: &'static Encoding,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            classify: ClassifyOptions::default(),
            encoding: None,
            fallback_encoding: encoding_rs::UTF_8,
        }
    }
}

impl ProcessOptions {
    /// Options with only the file filter changed from the defaults.
    #[must_use]
    pub fn with_filter_files(filter_files: bool) -> Self {
        Self {
            classify: ClassifyOptions {
                filter_files,
                ..ClassifyOptions::default()
            },
            ..Self::default()
        }
    }
}

/// Outcome of processing one input buffer.
#[derive(Debug)]
pub struct Processed {
    /// The resulting table; empty when decoding failed.
    pub table: Table,
    /// The encoding used (or attempted).
    pub encoding: ResolvedEncoding,
    /// Number of lines in the decoded input.
    pub lines: usize,
    /// Lines that produced no row (blank, root-only, or filtered out).
    pub skipped: usize,
    /// Set when the input could not be decoded.
    pub decode_error: Option<Error>,
}

impl Processed {
    /// Whether decoding failed.
    #[must_use]
    pub fn is_decode_failure(&self) -> bool {
        self.decode_error.is_some()
    }
}

/// Classify every line of `text`, returning the kept entries and the number
/// of skipped lines.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, and are trimmed before
/// classification.
#[must_use]
pub fn classify_lines(text: &str, options: &ClassifyOptions) -> (Vec<PathEntry>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for (index, line) in lines(text).enumerate() {
        match classify(line.trim(), options) {
            Some(entry) => entries.push(entry),
            None => {
                log::debug!("line {}: skipped {:?}", index + 1, line);
                skipped += 1;
            }
        }
    }

    (entries, skipped)
}

/// Split text into lines on any of the common terminators.
///
/// A terminator at the very end does not start an extra line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        let Some(idx) = current.find(['\n', '\r']) else {
            rest = None;
            return Some(current);
        };
        let terminator = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = Some(&current[idx + terminator..]).filter(|t| !t.is_empty());
        Some(&current[..idx])
    })
}

/// Process already-decoded text.
///
/// # Examples
///
/// ```
/// use pathcat::pipeline::{process_text, ProcessOptions};
///
/// let table = process_text("C:\\a\\b\r\nC:\\a\\b\\c.txt\r\n", &ProcessOptions::with_filter_files(true));
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows()[0].get(3), Some("c.txt"));
/// ```
#[must_use]
pub fn process_text(text: &str, options: &ProcessOptions) -> Table {
    let (entries, _) = classify_lines(text, &options.classify);
    tabulate(&entries)
}

/// Decode and process a raw byte buffer.
///
/// Never fails: a decode failure yields an empty table and sets
/// [`Processed::decode_error`].
///
/// # Examples
///
/// ```
/// use pathcat::decode::FixedDetector;
/// use pathcat::pipeline::{process, ProcessOptions};
///
/// let processed = process(b"C:\\x\\y.pdf\n\n", &ProcessOptions::default(), &FixedDetector::none());
/// assert_eq!(processed.table.len(), 1);
/// assert_eq!(processed.skipped, 1);
/// assert!(!processed.is_decode_failure());
///
/// let broken = process(b"C:\\caf\xE9", &ProcessOptions::default(), &FixedDetector::none());
/// assert!(broken.is_decode_failure());
/// assert!(broken.table.is_empty());
/// ```
#[must_use]
pub fn process(bytes: &[u8], options: &ProcessOptions, detector: &dyn EncodingDetector) -> Processed {
    let encoding = decode::resolve(bytes, options.encoding, detector, options.fallback_encoding);
    if encoding.source == EncodingSource::Fallback {
        log::info!("no encoding detected; falling back to {}", encoding.name());
    } else {
        log::info!("decoding as {} ({})", encoding.name(), encoding.source);
    }

    let text = match decode::decode(bytes, &encoding) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("{err}");
            return Processed {
                table: Table::empty(),
                encoding,
                lines: 0,
                skipped: 0,
                decode_error: Some(err),
            };
        }
    };

    let (entries, skipped) = classify_lines(&text, &options.classify);
    Processed {
        table: tabulate(&entries),
        encoding,
        lines: entries.len() + skipped,
        skipped,
        decode_error: None,
    }
}

/// Read a whole file and [`process`] it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read. Decode failures are
/// reported on the returned value, as with [`process`].
pub fn process_file(
    path: &Path,
    options: &ProcessOptions,
    detector: &dyn EncodingDetector,
) -> Result<Processed> {
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(process(&bytes, options, detector))
}

//! Character decoding of path listings.
//!
//! Path listings come from many tools and may use any legacy encoding. This
//! module resolves which encoding to use and decodes strictly, so a wrong
//! guess shows up as an error instead of replacement characters in the
//! table.
//!
//! # Resolution Order
//!
//! 1. A byte-order mark (UTF-8, UTF-16LE, UTF-16BE)
//! 2. An explicitly requested encoding
//! 3. The [`EncodingDetector`] guess
//! 4. The fallback encoding (UTF-8 unless configured)
//!
//! # Examples
//!
//! ```
//! use pathcat::decode::{decode, resolve, FixedDetector, EncodingSource};
//!
//! let bytes = b"C:\\docs\\plan.txt\n";
//! let resolved = resolve(bytes, None, &FixedDetector::none(), encoding_rs::UTF_8);
//! assert_eq!(resolved.source, EncodingSource::Fallback);
//!
//! let text = decode(bytes, &resolved).unwrap();
//! assert_eq!(text, "C:\\docs\\plan.txt\n");
//! ```

mod detector;

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

pub use detector::{ChardetDetector, EncodingDetector, FixedDetector};

/// Where a resolved encoding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    /// A byte-order mark at the start of the input.
    ByteOrderMark,
    /// Requested by the caller or configuration.
    Requested,
    /// Guessed by the detector.
    Detected,
    /// Nothing better was available.
    Fallback,
}

impl fmt::Display for EncodingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteOrderMark => write!(f, "byte-order mark"),
            Self::Requested => write!(f, "requested"),
            Self::Detected => write!(f, "detected"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// The encoding chosen for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEncoding {
    /// The encoding to decode with.
    pub encoding: &'static Encoding,
    /// How it was chosen.
    pub source: EncodingSource,
    /// Length of the byte-order mark to skip, if any.
    pub bom_len: usize,
}

impl ResolvedEncoding {
    /// Canonical name of the encoding, e.g. `UTF-8` or `windows-1252`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Look up an encoding by its WHATWG label (`utf-8`, `latin1`, `cp1251`...).
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] for unrecognized labels, including the
/// labels that only map to the WHATWG "replacement" encoding.
///
/// # Examples
///
/// ```
/// use pathcat::decode::lookup_encoding;
///
/// assert_eq!(lookup_encoding("latin1").unwrap().name(), "windows-1252");
/// assert!(lookup_encoding("no-such-charset").is_err());
/// ```
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label_no_replacement(label.trim().as_bytes()).ok_or_else(|| {
        Error::UnknownEncoding {
            label: label.to_string(),
        }
    })
}

/// Choose the encoding for `bytes`.
///
/// `requested` wins over detection but not over a byte-order mark.
#[must_use]
pub fn resolve(
    bytes: &[u8],
    requested: Option<&'static Encoding>,
    detector: &dyn EncodingDetector,
    fallback: &'static Encoding,
) -> ResolvedEncoding {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return ResolvedEncoding {
            encoding,
            source: EncodingSource::ByteOrderMark,
            bom_len,
        };
    }

    let (encoding, source) = match requested {
        Some(encoding) => (encoding, EncodingSource::Requested),
        None => match detector.detect(bytes) {
            Some(encoding) => (encoding, EncodingSource::Detected),
            None => (fallback, EncodingSource::Fallback),
        },
    };

    ResolvedEncoding {
        encoding,
        source,
        bom_len: 0,
    }
}

/// Decode `bytes` with a resolved encoding, failing on malformed input.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not valid in the encoding.
pub fn decode<'a>(bytes: &'a [u8], resolved: &ResolvedEncoding) -> Result<Cow<'a, str>> {
    let body = &bytes[resolved.bom_len.min(bytes.len())..];
    resolved
        .encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| Error::Decode {
            encoding: resolved.name().to_string(),
        })
}

//! Pluggable encoding detection.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

/// Guesses the encoding of a byte buffer.
///
/// Returning `None` means the detector has no useful opinion; callers then
/// use their fallback encoding.
pub trait EncodingDetector {
    /// Guess the encoding of `bytes`.
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// Bytes inspected when looking for BOM-less UTF-16.
const UTF16_SAMPLE_LEN: usize = 8192;

/// Detector backed by `chardetng`.
///
/// chardetng never guesses UTF-16, so BOM-less UTF-16 (as written by
/// `cmd /u`) is recognised first from the position of NUL bytes. Pure-ASCII
/// input yields `None`: any ASCII-compatible fallback decodes it identically,
/// so a guess adds nothing.
///
/// # Examples
///
/// ```
/// use pathcat::decode::{ChardetDetector, EncodingDetector};
///
/// let detector = ChardetDetector::default();
/// assert_eq!(detector.detect(b"C:\\plain\\ascii.txt"), None);
/// assert_eq!(
///     detector.detect("C:\\Users\\zoë\\café.txt".as_bytes()),
///     Some(encoding_rs::UTF_8)
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChardetDetector {
    allow_utf8: bool,
}

impl Default for ChardetDetector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ChardetDetector {
    /// Create a detector; `allow_utf8` controls whether UTF-8 may be guessed.
    #[must_use]
    pub const fn new(allow_utf8: bool) -> Self {
        Self { allow_utf8 }
    }
}

impl EncodingDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if let Some(encoding) = detect_utf16(bytes) {
            log::debug!("NUL byte layout suggests {}", encoding.name());
            return Some(encoding);
        }

        let mut detector = chardetng::EncodingDetector::new();
        if !detector.feed(bytes, true) {
            return None;
        }
        let guess = detector.guess(None, self.allow_utf8);
        log::debug!("chardetng guessed {} for {} bytes", guess.name(), bytes.len());
        Some(guess)
    }
}

/// Guess BOM-less UTF-16 from where NUL bytes fall.
///
/// Path listings are mostly Latin script, so one byte of nearly every code
/// unit is zero: the high byte (odd offsets) for little-endian, the low byte
/// (even offsets) for big-endian. At least a quarter of the code units must
/// carry a NUL, nearly all on the same side.
fn detect_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let sample = &bytes[..bytes.len().min(UTF16_SAMPLE_LEN)];
    let units = sample.len() / 2;
    if units == 0 {
        return None;
    }

    let (mut even, mut odd) = (0usize, 0usize);
    for (i, byte) in sample.iter().enumerate() {
        if *byte == 0 {
            if i % 2 == 0 {
                even += 1;
            } else {
                odd += 1;
            }
        }
    }

    let threshold = units.div_ceil(4);
    if odd >= threshold && even * 8 <= odd {
        Some(UTF_16LE)
    } else if even >= threshold && odd * 8 <= even {
        Some(UTF_16BE)
    } else {
        None
    }
}

/// Detector returning a fixed answer, for tests and forced decoding.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(Option<&'static Encoding>);

impl FixedDetector {
    /// Always answer `encoding`.
    #[must_use]
    pub const fn new(encoding: &'static Encoding) -> Self {
        Self(Some(encoding))
    }

    /// Never answer.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl EncodingDetector for FixedDetector {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        self.0
    }
}

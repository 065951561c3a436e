// ============================================================================
// Encoding Module - Public API
//
// Everything between raw file bytes and the UTF-8 text that gets written
// back: the two-tier decode (strict UTF-8, then total Latin-1), the
// advisory content heuristics, newline normalization and run statistics.
//
// The per-file contract: exactly one of {utf-8-decoded, latin-1-decoded,
// failed-to-read} holds before any write is attempted, and the Latin-1 tier
// is total over all byte values so decoding as such never fails.
// ============================================================================

use std::fmt;

pub mod decoder;
pub mod inspect;
pub mod stats;

// Re-export key types for convenience
pub use decoder::{decode_with_fallback, normalize_newlines};
pub use inspect::ContentFlags;
pub use stats::FixStats;

/// Which decode tier produced the in-memory text for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Bytes were valid UTF-8 and decoded strictly
    Utf8,
    /// Bytes were invalid UTF-8 and went through the Latin-1 fallback
    Latin1,
}

impl SourceEncoding {
    /// Lowercase encoding label used in messages and reports
    pub fn name(&self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded, inspected and newline-normalized content for one file
#[derive(Debug, Clone)]
pub struct SanitizedText {
    /// Text ready to be written back as UTF-8
    pub text: String,
    /// Decode tier that produced the text
    pub source: SourceEncoding,
    /// Advisory heuristic results over the decoded text
    pub flags: ContentFlags,
}

/// Run the full in-memory pipeline over one file's bytes.
///
/// Decode with the two-tier fallback, scan the decoded text for mojibake
/// markers and a charset declaration, then normalize line endings. The
/// heuristics run on the decoded text before normalization touches it, so
/// the flags describe the file as it was on disk.
pub fn sanitize(bytes: &[u8]) -> SanitizedText {
    let (decoded, source) = decode_with_fallback(bytes);
    let flags = inspect::scan(&decoded);
    let text = normalize_newlines(&decoded).into_owned();

    SanitizedText {
        text,
        source,
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clean_utf8() {
        let sanitized = sanitize("<meta charset=\"UTF-8\">\n<p>fireflies</p>\n".as_bytes());

        assert_eq!(sanitized.source, SourceEncoding::Utf8);
        assert!(!sanitized.flags.has_mojibake_markers);
        assert!(sanitized.flags.declares_utf8_charset);
        assert_eq!(sanitized.text, "<meta charset=\"UTF-8\">\n<p>fireflies</p>\n");
    }

    #[test]
    fn test_sanitize_latin1_with_crlf() {
        let sanitized = sanitize(b"caf\xE9\r\nglow\r\n");

        assert_eq!(sanitized.source, SourceEncoding::Latin1);
        assert_eq!(sanitized.text, "café\nglow\n");
    }

    #[test]
    fn test_sanitize_flags_mojibake() {
        let sanitized = sanitize("fireflies ðŸª² at dusk".as_bytes());

        assert_eq!(sanitized.source, SourceEncoding::Utf8);
        assert!(sanitized.flags.has_mojibake_markers);
        assert!(!sanitized.flags.declares_utf8_charset);
    }

    #[test]
    fn test_sanitize_output_is_valid_utf8_for_any_bytes() {
        let every_byte: Vec<u8> = (0u8..=255).collect();
        let sanitized = sanitize(&every_byte);

        // String guarantees valid UTF-8; re-decoding the output never fails
        assert!(std::str::from_utf8(sanitized.text.as_bytes()).is_ok());
        assert!(!sanitized.text.contains('\r'));
    }
}

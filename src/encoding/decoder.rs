// ============================================================================
// Encoding Decoder Module
//
// Implements the two-tier decode used for every part file: strict UTF-8
// first, total Latin-1 second. Latin-1 maps every byte value 0-255 to the
// code point of the same value, so the second tier can never fail and a
// read is only ever an I/O fault, never a decode fault.
//
// The fallback is a heuristic, not a detector: a file that is not valid
// UTF-8 is assumed to have been saved as Latin-1, which is only a guess.
// ============================================================================

use std::borrow::Cow;

use encoding_rs::mem::decode_latin1;
use encoding_rs::UTF_8;

use super::SourceEncoding;

/// Decode raw file bytes to text, recording which tier produced the result.
///
/// Valid UTF-8 input never takes the Latin-1 path; anything else always
/// decodes through it. No replacement characters are ever introduced.
pub fn decode_with_fallback(bytes: &[u8]) -> (String, SourceEncoding) {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => (text.into_owned(), SourceEncoding::Utf8),
        None => (decode_latin1(bytes).into_owned(), SourceEncoding::Latin1),
    }
}

/// Normalize all line terminators to a single linefeed.
///
/// `\r\n` pairs collapse to `\n` and stray `\r` bytes become `\n`. Text that
/// already uses Unix line endings is returned borrowed, unchanged.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_skips_fallback() {
        let (text, encoding) = decode_with_fallback("café 🎉\n".as_bytes());
        assert_eq!(text, "café 🎉\n");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_invalid_utf8_takes_latin1_path() {
        // 0xE9 is é in Latin-1 but an invalid UTF-8 sequence on its own
        let (text, encoding) = decode_with_fallback(b"caf\xE9");
        assert_eq!(text, "café");
        assert_eq!(encoding, SourceEncoding::Latin1);
    }

    #[test]
    fn test_latin1_is_total_over_all_bytes() {
        let every_byte: Vec<u8> = (0u8..=255).collect();
        let (text, encoding) = decode_with_fallback(&every_byte);
        assert_eq!(encoding, SourceEncoding::Latin1);
        assert_eq!(text.chars().count(), 256);
        for (i, c) in text.chars().enumerate() {
            assert_eq!(c as u32, i as u32);
        }
    }

    #[test]
    fn test_empty_input_is_utf8() {
        let (text, encoding) = decode_with_fallback(b"");
        assert!(text.is_empty());
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_normalize_crlf_and_bare_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\n\r\n"), "\n\n");
        assert_eq!(normalize_newlines("\r"), "\n");
    }

    #[test]
    fn test_normalize_leaves_clean_text_borrowed() {
        let clean = "line one\nline two\n";
        match normalize_newlines(clean) {
            Cow::Borrowed(s) => assert_eq!(s, clean),
            Cow::Owned(_) => panic!("clean text should not be reallocated"),
        }
    }
}

// ============================================================================
// Content Inspection Module
//
// Substring heuristics over the decoded text: mojibake marker detection and
// the charset declaration check. Both are advisory. Marker presence sets the
// per-file "had issues" flag and a missing charset declaration is reported
// as a warning; neither blocks the rewrite.
// ============================================================================

/// Substrings left behind when UTF-8 bytes are mis-decoded through a
/// single-byte encoding and re-saved. `â` covers the punctuation family
/// (curly quotes, dashes), `ðŸ` the emoji plane, `Ã¢â‚¬` the double-encoded
/// variants of the same, `ï»¿` a mangled byte order mark.
pub const MOJIBAKE_MARKERS: &[&str] = &["â", "ðŸ", "Ã¢â‚¬", "ï»¿"];

/// Advisory flags produced by scanning a file's decoded text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFlags {
    /// Text contains at least one mojibake marker substring
    pub has_mojibake_markers: bool,
    /// Text declares charset=UTF-8 somewhere (any case, quoted or not)
    pub declares_utf8_charset: bool,
}

/// Run both heuristics over the decoded text
pub fn scan(text: &str) -> ContentFlags {
    ContentFlags {
        has_mojibake_markers: has_mojibake_markers(text),
        declares_utf8_charset: declares_utf8_charset(text),
    }
}

/// Check whether the text contains any known mojibake marker.
///
/// The markers can both miss genuine damage and flag benign text, so the
/// result feeds messaging and statistics only, never success or failure.
pub fn has_mojibake_markers(text: &str) -> bool {
    MOJIBAKE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Case-insensitive check for a charset=UTF-8 declaration
pub fn declares_utf8_charset(text: &str) -> bool {
    let lowered = text.to_ascii_lowercase();
    lowered.contains("charset=utf-8") || lowered.contains("charset=\"utf-8\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_html_has_no_markers() {
        let html = "<html><body><p>Fireflies glow at dusk. 🪲</p></body></html>";
        assert!(!has_mojibake_markers(html));
    }

    #[test]
    fn test_double_encoded_emoji_is_flagged() {
        // The UTF-8 bytes of 🎉 mis-decoded as Latin-1
        let mangled = "Celebration ðŸŽ‰ time";
        assert!(has_mojibake_markers(mangled));
    }

    #[test]
    fn test_double_encoded_punctuation_is_flagged() {
        assert!(has_mojibake_markers("itâ€™s broken"));
        assert!(has_mojibake_markers("doubly Ã¢â‚¬Å“quotedÃ¢â‚¬Â broken"));
    }

    #[test]
    fn test_mangled_bom_is_flagged() {
        assert!(has_mojibake_markers("ï»¿<html>"));
    }

    #[test]
    fn test_charset_declaration_variants() {
        assert!(declares_utf8_charset(r#"<meta charset="UTF-8">"#));
        assert!(declares_utf8_charset(r#"<meta charset="utf-8">"#));
        assert!(declares_utf8_charset(
            "<meta http-equiv=Content-Type content=text/html;charset=UTF-8>"
        ));
        assert!(!declares_utf8_charset("<meta charset=\"ISO-8859-1\">"));
        assert!(!declares_utf8_charset("<html><body>no meta</body></html>"));
    }

    #[test]
    fn test_scan_combines_both_checks() {
        let flags = scan(r#"<meta charset="UTF-8"> itâ€™s fine"#);
        assert!(flags.has_mojibake_markers);
        assert!(flags.declares_utf8_charset);
    }
}

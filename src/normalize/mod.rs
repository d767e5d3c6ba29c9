//! Caption normalization: raw timed-subtitle text to clean prose.
//!
//! Converts a WebVTT-style caption document into a single clean string by
//! applying a fixed sequence of named stripping rules. Each rule targets one
//! artifact shape (header line, note blocks, cue timings, inline tags, cue
//! indices); markup outside those shapes passes through unstripped.

mod rules;

pub use rules::StripRule;

/// Strips timed-subtitle artifacts from raw caption text.
///
/// Pure text transform: no I/O, total over any input string. An empty
/// result is valid and means the document carried no spoken content.
pub struct Normalizer {
    rules: Vec<StripRule>,
}

impl Normalizer {
    /// Create a normalizer with the default rule sequence.
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(),
        }
    }

    /// Normalize a raw caption document into clean text.
    ///
    /// Applies every stripping rule in order, then trims. The output
    /// contains no timestamp patterns and no multi-space runs; running the
    /// result through `normalize` again strips nothing further.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for rule in &self.rules {
            text = rule.apply(&text);
        }
        text.trim().to_string()
    }

    /// The stripping rules, in application order.
    pub fn rules(&self) -> &[StripRule] {
        &self.rules
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_VTT: &str = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello world.\n\n00:00:02.000 --> 00:00:04.000\nThis is a test.\n";

    #[test]
    fn test_strips_header_and_cue_timings() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize(SAMPLE_VTT),
            "Hello world. This is a test."
        );
    }

    #[test]
    fn test_strips_note_blocks() {
        let normalizer = Normalizer::new();
        let raw = "WEBVTT\n\nNOTE This is a comment\nspanning two lines\n\n00:00:00.000 --> 00:00:02.000\nActual content.\n";
        assert_eq!(normalizer.normalize(raw), "Actual content.");
    }

    #[test]
    fn test_strips_inline_tags() {
        let normalizer = Normalizer::new();
        let raw = "00:00:00.000 --> 00:00:02.000\n<c.colorCCCCCC>Hello</c> <00:00:01.000>there\n";
        assert_eq!(normalizer.normalize(raw), "Hello there");
    }

    #[test]
    fn test_strips_numeric_cue_indices() {
        let normalizer = Normalizer::new();
        let raw = "WEBVTT\n\n1\n00:00:00.000 --> 00:00:02.000\nFirst cue.\n\n2\n00:00:02.000 --> 00:00:04.000\nSecond cue.\n";
        assert_eq!(normalizer.normalize(raw), "First cue. Second cue.");
    }

    #[test]
    fn test_collapses_whitespace() {
        let normalizer = Normalizer::new();
        let clean = normalizer.normalize("  spaced\n\n\nout   text \n");
        assert_eq!(clean, "spaced out text");
        assert!(!clean.contains("  "));
    }

    #[test]
    fn test_empty_input_is_valid() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("WEBVTT\n"), "");
    }

    #[test]
    fn test_unknown_markup_passes_through() {
        // Only the five known artifact shapes are stripped.
        let normalizer = Normalizer::new();
        let clean = normalizer.normalize("Some <b>bold</b> text.\n");
        assert_eq!(clean, "Some <b>bold</b> text.");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = Normalizer::new();
        let once = normalizer.normalize(SAMPLE_VTT);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }
}

//! The ordered stripping rules applied during normalization.

use regex::Regex;

/// A single named stripping rule: a pattern and its replacement.
///
/// Rules are independent of each other but order-sensitive as a sequence;
/// `default_rules` returns them in the order they must run.
pub struct StripRule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl StripRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern).expect("Invalid strip rule pattern");
        Self {
            name,
            pattern,
            replacement,
        }
    }

    /// Rule name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to the text, replacing every match.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// The default rule sequence for WebVTT-style caption documents.
///
/// Targets exactly five artifact shapes (format header, note blocks, cue
/// timing lines, inline timestamp tags, voice/styling tags, numeric cue
/// indices) and then flattens line structure into single-spaced prose.
pub fn default_rules() -> Vec<StripRule> {
    vec![
        // Format header at the very start of the document.
        StripRule::new("header", r"^WEBVTT[^\n]*\n?", ""),
        // NOTE marker line plus everything up to the next blank line.
        StripRule::new("note-block", r"(?m)^NOTE[^\n]*\n(?:[^\n]*\n)*?\n", ""),
        // Collapse runs of blank lines before line-level stripping.
        StripRule::new("blank-lines", r"\n{2,}", "\n"),
        // Cue timing lines: HH:MM:SS.mmm --> ...
        StripRule::new(
            "cue-timing",
            r"(?m)^\d{2}:\d{2}:\d{2}\.\d{3} --> .*$",
            "",
        ),
        // Inline word-level timestamp tags: <HH:MM:SS.mmm>
        StripRule::new("inline-timestamp", r"<\d{2}:\d{2}:\d{2}\.\d{3}>", ""),
        // Caption voice/styling tags: <c.classname> and </c>
        StripRule::new("voice-tag", r"</?c[^>]*>", ""),
        // Bare numeric cue index lines.
        StripRule::new("cue-index", r"(?m)^\d+\n", ""),
        // Flatten remaining line breaks into spaces.
        StripRule::new("newlines", r"\n+", " "),
        // Collapse any whitespace run into a single space.
        StripRule::new("whitespace", r"\s+", " "),
    ]
}

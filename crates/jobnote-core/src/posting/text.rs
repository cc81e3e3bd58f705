//! Text normalisation shared by the field rules.

/// Split raw page text into its non-blank, trimmed lines, top of page first.
pub fn line_sequence(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Trim and collapse every whitespace run (newlines included) into one space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

//! Job title extraction.
//!
//! Titles usually sit in the first few lines of a posting, so those lines are
//! scanned for a title keyword before falling back to an explicit
//! "Position:" / "Role:" / "Title:" label anywhere in the text.

use tracing::debug;

use super::patterns::{POSITION_LABEL, POSITION_LABEL_PREFIX, TITLE_KEYWORD, TITLE_LINE_EXCLUSIONS};
use super::{FieldExtractor, Rule, RuleMatch, collapsed_group};
use crate::posting::text::{char_len, line_sequence};

/// Number of leading lines scanned for a title by default.
pub const DEFAULT_SCAN_LINES: usize = 5;

/// Shortest line considered a title.
const MIN_TITLE_LINE: usize = 10;

/// Longest line considered a title.
const MAX_TITLE_LINE: usize = 100;

const LINE_RULE: &str = "position.line";

/// Position field extractor.
pub struct PositionExtractor {
    scan_lines: usize,
    label_rule: Rule,
}

impl PositionExtractor {
    /// Create a new position extractor.
    pub fn new() -> Self {
        Self {
            scan_lines: DEFAULT_SCAN_LINES,
            label_rule: Rule::new("position.label", &POSITION_LABEL, collapsed_group, |_| true),
        }
    }

    /// Set how many leading lines are scanned for a title.
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }

    fn from_label(&self, text: &str) -> Option<RuleMatch> {
        // Priority 1: the label is only consulted after the line scan.
        self.label_rule.apply(1, text)
    }
}

impl Default for PositionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PositionExtractor {
    type Output = RuleMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        line_candidates(text, self.scan_lines)
            .next()
            .or_else(|| self.from_label(text))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        line_candidates(text, self.scan_lines)
            .chain(self.from_label(text))
            .collect()
    }
}

/// Extract the job title from posting text.
pub fn extract_position(text: &str) -> Option<String> {
    PositionExtractor::new().extract(text).map(|m| m.value)
}

/// Title candidates from the leading lines, in line order.
fn line_candidates(text: &str, scan_lines: usize) -> impl Iterator<Item = RuleMatch> + '_ {
    line_sequence(text)
        .into_iter()
        .take(scan_lines)
        .filter_map(title_from_line)
}

fn title_from_line(line: &str) -> Option<RuleMatch> {
    let len = char_len(line);
    if !(MIN_TITLE_LINE..=MAX_TITLE_LINE).contains(&len) {
        return None;
    }

    if !TITLE_KEYWORD.is_match(line) {
        return None;
    }

    let lowered = line.to_lowercase();
    if let Some(word) = TITLE_LINE_EXCLUSIONS.iter().find(|w| lowered.contains(*w)) {
        debug!("Skipping title line mentioning {:?}: {:?}", word, line);
        return None;
    }

    let title = POSITION_LABEL_PREFIX.replace(line, "");
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    Some(RuleMatch::new(title, LINE_RULE, 0, line))
}

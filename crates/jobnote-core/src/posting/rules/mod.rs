//! Rule-based field extractors for job postings.
//!
//! Every field is described by an ordered list of [`Rule`]s. A rule takes the
//! first match of its pattern, turns it into a candidate value and either
//! accepts or rejects it. The first accepted candidate in list order wins.

pub mod company;
pub mod location;
pub mod patterns;
pub mod position;
pub mod salary;

pub use company::{extract_company, CompanyExtractor};
pub use location::{extract_location, LocationExtractor};
pub use patterns::*;
pub use position::{extract_position, PositionExtractor};
pub use salary::{extract_salary, SalaryExtractor};

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Every accepted candidate, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An accepted candidate together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    /// Post-processed value.
    pub value: String,
    /// Name of the rule that produced it.
    pub rule: &'static str,
    /// Index of the rule in its list (0 = tried first).
    pub priority: usize,
    /// Source text that was matched.
    pub source: String,
    /// Byte span of the match in the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(usize, usize)>,
}

impl RuleMatch {
    pub fn new(
        value: impl Into<String>,
        rule: &'static str,
        priority: usize,
        source: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            rule,
            priority,
            source: source.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Turns a pattern match into a candidate value.
pub type Transform = fn(&Captures<'_>) -> Option<String>;

/// Decides whether a candidate value is kept.
pub type Acceptance = fn(&str) -> bool;

/// One extraction rule: pattern, post-match transform and acceptance filter.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub transform: Transform,
    pub accept: Acceptance,
}

impl Rule {
    pub fn new(
        name: &'static str,
        pattern: &'static Regex,
        transform: Transform,
        accept: Acceptance,
    ) -> Self {
        Self {
            name,
            pattern,
            transform,
            accept,
        }
    }

    /// Apply the rule to the first match of its pattern.
    ///
    /// Empty values are never accepted, whatever the acceptance filter says.
    pub fn apply(&self, priority: usize, text: &str) -> Option<RuleMatch> {
        let caps = self.pattern.captures(text)?;
        let full_match = caps.get(0)?;

        let value = (self.transform)(&caps).unwrap_or_default();
        if value.is_empty() || !(self.accept)(&value) {
            debug!("Rule {} rejected candidate {:?}", self.name, value);
            return None;
        }

        debug!("Rule {} accepted {:?}", self.name, value);
        Some(
            RuleMatch::new(value, self.name, priority, full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// The first accepted candidate of an ordered rule list.
pub fn first_accepted(rules: &[Rule], text: &str) -> Option<RuleMatch> {
    rules
        .iter()
        .enumerate()
        .find_map(|(priority, rule)| rule.apply(priority, text))
}

/// All accepted candidates of an ordered rule list, one per rule at most.
pub fn all_accepted(rules: &[Rule], text: &str) -> Vec<RuleMatch> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(priority, rule)| rule.apply(priority, text))
        .collect()
}

/// Capture group 1 with surrounding whitespace collapsed.
pub(crate) fn collapsed_group(caps: &Captures<'_>) -> Option<String> {
    caps.get(1)
        .map(|m| super::text::collapse_whitespace(m.as_str()))
}

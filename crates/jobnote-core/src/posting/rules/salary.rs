//! Salary extraction.
//!
//! Salary has no acceptance filter beyond being non-empty: the first rule
//! whose pattern matches wins.

use regex::Captures;

use super::patterns::{SALARY_K_RANGE, SALARY_LABEL, SALARY_RANGE, SALARY_SINGLE};
use super::{all_accepted, collapsed_group, first_accepted, FieldExtractor, Rule, RuleMatch};
use crate::posting::text::collapse_whitespace;

/// Salary field extractor.
pub struct SalaryExtractor {
    rules: Vec<Rule>,
}

impl SalaryExtractor {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule::new("salary.range", &SALARY_RANGE, dollar_range, any_salary),
                Rule::new("salary.k_range", &SALARY_K_RANGE, whole_match, any_salary),
                Rule::new("salary.label", &SALARY_LABEL, collapsed_group, any_salary),
                Rule::new("salary.single", &SALARY_SINGLE, whole_match, any_salary),
            ],
        }
    }
}

impl Default for SalaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SalaryExtractor {
    type Output = RuleMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_accepted(&self.rules, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        all_accepted(&self.rules, text)
    }
}

/// Extract the salary from posting text.
pub fn extract_salary(text: &str) -> Option<String> {
    SalaryExtractor::new().extract(text).map(|m| m.value)
}

/// `$<low> - $<high>` with the captured numbers kept verbatim.
fn dollar_range(caps: &Captures<'_>) -> Option<String> {
    let (low, high) = (caps.get(1)?, caps.get(2)?);
    Some(collapse_whitespace(&format!("${} - ${}", low.as_str(), high.as_str())))
}

/// The matched text as written.
fn whole_match(caps: &Captures<'_>) -> Option<String> {
    caps.get(0).map(|m| collapse_whitespace(m.as_str()))
}

fn any_salary(_: &str) -> bool {
    true
}

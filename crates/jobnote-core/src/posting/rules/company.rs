//! Company name extraction.

use regex::Captures;

use super::patterns::{COMPANY_AFTER_TITLE, COMPANY_AT, COMPANY_JOIN, COMPANY_LABEL, COMPANY_SUFFIX};
use super::{all_accepted, first_accepted, FieldExtractor, Rule, RuleMatch};
use crate::posting::text::{char_len, collapse_whitespace};

/// Company field extractor.
pub struct CompanyExtractor {
    rules: Vec<Rule>,
}

impl CompanyExtractor {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule::new("company.at", &COMPANY_AT, clean_company, plausible_company),
                Rule::new("company.label", &COMPANY_LABEL, clean_company, plausible_company),
                Rule::new("company.join", &COMPANY_JOIN, clean_company, plausible_company),
                Rule::new(
                    "company.after_title",
                    &COMPANY_AFTER_TITLE,
                    clean_company,
                    plausible_company,
                ),
            ],
        }
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = RuleMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_accepted(&self.rules, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        all_accepted(&self.rules, text)
    }
}

/// Extract the company name from posting text.
pub fn extract_company(text: &str) -> Option<String> {
    CompanyExtractor::new().extract(text).map(|m| m.value)
}

/// Collapse whitespace and drop a trailing "careers"/"jobs"/"hiring"/"team".
fn clean_company(caps: &Captures<'_>) -> Option<String> {
    let collapsed = collapse_whitespace(caps.get(1)?.as_str());
    Some(COMPANY_SUFFIX.replace(&collapsed, "").into_owned())
}

/// Strictly between 3 and 50 characters.
fn plausible_company(value: &str) -> bool {
    let len = char_len(value);
    len > 3 && len < 50
}

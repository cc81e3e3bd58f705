//! Job posting parser running the four field extractors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::application::Advisory;
use crate::models::config::ExtractionConfig;

use super::rules::{
    CompanyExtractor, FieldExtractor, LocationExtractor, PositionExtractor, RuleMatch,
    SalaryExtractor,
};

/// Fields extracted from one piece of posting text.
///
/// A field is either absent or a non-empty, trimmed string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl ExtractionResult {
    /// Number of fields that were found (0 to 4).
    pub fn found_count(&self) -> usize {
        [&self.company, &self.position, &self.location, &self.salary]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    /// True if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }

    /// Operator feedback for this result.
    pub fn advisory(&self) -> Advisory {
        Advisory::parsed(self.found_count())
    }
}

/// Every accepted candidate per field, for inspecting why a value won.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostingCandidates {
    pub company: Vec<RuleMatch>,
    pub position: Vec<RuleMatch>,
    pub location: Vec<RuleMatch>,
    pub salary: Vec<RuleMatch>,
}

/// Rule-based job posting parser.
pub struct PostingParser {
    company: CompanyExtractor,
    position: PositionExtractor,
    location: LocationExtractor,
    salary: SalaryExtractor,
}

impl PostingParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            company: CompanyExtractor::new(),
            position: PositionExtractor::new(),
            location: LocationExtractor::new(),
            salary: SalaryExtractor::new(),
        }
    }

    /// Create a parser from the extraction section of the configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_position_scan_lines(config.position_scan_lines)
    }

    /// Set how many leading lines are scanned for a job title.
    pub fn with_position_scan_lines(mut self, scan_lines: usize) -> Self {
        self.position = PositionExtractor::new().with_scan_lines(scan_lines);
        self
    }

    /// Extract all four fields. The extractions are independent of each other.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing job posting from {} characters of text", text.len());

        let result = ExtractionResult {
            company: self.company.extract(text).map(|m| m.value),
            position: self.position.extract(text).map(|m| m.value),
            location: self.location.extract(text).map(|m| m.value),
            salary: self.salary.extract(text).map(|m| m.value),
        };

        debug!("Extracted {} field(s): {:?}", result.found_count(), result);
        result
    }

    /// Every accepted candidate for every field, in priority order.
    pub fn candidates(&self, text: &str) -> PostingCandidates {
        PostingCandidates {
            company: self.company.extract_all(text),
            position: self.position.extract_all(text),
            location: self.location.extract_all(text),
            salary: self.salary.extract_all(text),
        }
    }
}

impl Default for PostingParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract posting fields with the default parser.
pub fn extract(text: &str) -> ExtractionResult {
    PostingParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::AdvisoryLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_title_line_posting() {
        let text = "Senior Software Engineer at Acme Corp\nNew York, NY\n$120,000 - $150,000";
        let result = extract(text);

        assert_eq!(
            result,
            ExtractionResult {
                company: Some("Acme Corp".to_string()),
                position: Some("Senior Software Engineer at Acme Corp".to_string()),
                location: Some("New York, NY".to_string()),
                salary: Some("$120,000 - $150,000".to_string()),
            }
        );
        assert_eq!(result.found_count(), 4);
    }

    #[test]
    fn test_parse_labelled_posting() {
        let text = "Company: Globex\nPosition: Data Analyst\nLocation: Remote";
        let result = extract(text);

        assert_eq!(
            result,
            ExtractionResult {
                company: Some("Globex".to_string()),
                position: Some("Data Analyst".to_string()),
                location: Some("Remote".to_string()),
                salary: None,
            }
        );
        assert_eq!(result.found_count(), 3);
    }

    #[test]
    fn test_parse_unrecognisable_text() {
        let result = extract("we make things\nthat people enjoy using every day");
        assert!(result.is_empty());
        assert_eq!(result.found_count(), 0);

        let advisory = result.advisory();
        assert_eq!(advisory.level, AdvisoryLevel::Error);
        assert_eq!(advisory.text, "Could not auto-parse. Please fill in manually.");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Lead Designer @ Hooli\nPalo Alto, CA\nCompensation: $140k - $180k";
        let parser = PostingParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn test_range_beats_compensation_label() {
        let text = "Compensation: negotiable\nBase $95,000 - $120,000 per year";
        assert_eq!(extract(text).salary, Some("$95,000 - $120,000".to_string()));
    }

    #[test]
    fn test_realistic_posting() {
        let text = r#"
            Staff Machine Learning Engineer
            Initech careers
            Austin, Texas, United States
            About the role
            You will work on forecasting.
            Salary range: $180,000 – $230,000 annually
        "#;
        let result = extract(text.trim());

        assert_eq!(result.position.as_deref(), Some("Staff Machine Learning Engineer"));
        assert_eq!(result.location.as_deref(), Some("Austin, Texas, United States"));
        assert_eq!(result.salary.as_deref(), Some("$180,000 - $230,000"));
        assert_eq!(result.advisory().text, "Parsed 3 field(s). Review and edit as needed.");
    }

    #[test]
    fn test_candidates_lists_losing_rules() {
        let text = "Engineer at Acme Corp\nCompany: Acme Corporation\nSalary: $100,000";
        let candidates = PostingParser::new().candidates(text);

        assert_eq!(candidates.company[0].value, "Acme Corp");
        assert!(candidates.company.iter().any(|m| m.rule == "company.label"));
        let salary_rules: Vec<_> = candidates.salary.iter().map(|m| m.rule).collect();
        assert_eq!(salary_rules, vec!["salary.label", "salary.single"]);
    }

    #[test]
    fn test_from_config_scan_depth() {
        let config = ExtractionConfig { position_scan_lines: 1 };
        let parser = PostingParser::from_config(&config);
        let text = "Welcome aboard friends\nPlatform Engineer";
        assert_eq!(parser.parse(text).position, None);
        assert_eq!(extract(text).position.as_deref(), Some("Platform Engineer"));
    }

    #[test]
    fn test_serialized_result_omits_absent_fields() {
        let result = extract("Company: Globex");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "company": "Globex" }));
    }
}

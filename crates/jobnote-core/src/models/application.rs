//! Job application form, the record submitted for it, and operator advisories.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::posting::{ExtractionResult, PostingParser};
use crate::submit::PageContentProvider;

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Success,
    Error,
}

/// Transient, human-readable outcome shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub text: String,
}

impl Advisory {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Error,
            text: text.into(),
        }
    }

    /// Feedback after an extraction that found `found` fields.
    pub fn parsed(found: usize) -> Self {
        if found > 0 {
            Self::success(format!("Parsed {found} field(s). Review and edit as needed."))
        } else {
            Self::error("Could not auto-parse. Please fill in manually.")
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == AdvisoryLevel::Success
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The form the operator reviews before submitting.
///
/// Extraction only ever fills fields in; it never blanks a value the operator
/// already typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub application_date: NaiveDate,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub salary: String,

    #[serde(default)]
    pub salary_expectation: String,

    #[serde(default)]
    pub stage: String,

    /// Posting text the fields were extracted from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_text: String,
}

impl ApplicationForm {
    /// Create an empty form dated `today`.
    pub fn new(today: NaiveDate, stage: impl Into<String>) -> Self {
        Self {
            application_date: today,
            company: String::new(),
            position: String::new(),
            link: String::new(),
            location: String::new(),
            salary: String::new(),
            salary_expectation: String::new(),
            stage: stage.into(),
            raw_text: String::new(),
        }
    }

    /// Create an empty form dated with the local date.
    pub fn today(stage: impl Into<String>) -> Self {
        Self::new(Local::now().date_naive(), stage)
    }

    /// Copy every found field into the form. Returns how many were copied.
    pub fn merge(&mut self, result: &ExtractionResult) -> usize {
        let fields = [
            (&mut self.company, &result.company),
            (&mut self.position, &result.position),
            (&mut self.location, &result.location),
            (&mut self.salary, &result.salary),
        ];

        let mut merged = 0;
        for (slot, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                *slot = value.to_string();
                merged += 1;
            }
        }
        merged
    }

    /// Extract fields from pasted text and merge them into the form.
    pub fn apply_text(&mut self, parser: &PostingParser, raw_text: &str) -> Advisory {
        let text = raw_text.trim();
        if text.is_empty() {
            return Advisory::error("Please paste job posting text first");
        }

        self.raw_text = text.to_string();
        let result = parser.parse(text);
        let merged = self.merge(&result);
        debug!("Merged {} field(s) into the form", merged);

        result.advisory()
    }

    /// Pull the current page from `provider`, then extract from its text.
    ///
    /// A non-empty page URL replaces the link field.
    pub fn load_page<P>(&mut self, parser: &PostingParser, provider: &P) -> Advisory
    where
        P: PageContentProvider + ?Sized,
    {
        let Some(page) = provider.page_content() else {
            warn!("Page content provider returned nothing");
            return Advisory::error("Could not extract page content. Please paste manually.");
        };

        if !page.url.trim().is_empty() {
            self.link = page.url;
        }
        self.apply_text(parser, &page.text)
    }

    /// Build the record sent to the remote sink.
    pub fn to_record(&self) -> ApplicationRecord {
        ApplicationRecord {
            application_date: self.application_date,
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            stage: self.stage.trim().to_string(),
            link: non_empty(&self.link),
            location: non_empty(&self.location),
            salary: non_empty(&self.salary),
            salary_expectation: non_empty(&self.salary_expectation),
        }
    }

    /// Clear the form after a successful save.
    pub fn reset(&mut self, today: NaiveDate, stage: impl Into<String>) {
        *self = Self::new(today, stage);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A job application as handed to the remote sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// ISO date (YYYY-MM-DD).
    pub application_date: NaiveDate,

    pub company: String,

    pub position: String,

    pub stage: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::PageContent;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    struct FixedPage(Option<PageContent>);

    impl PageContentProvider for FixedPage {
        fn page_content(&self) -> Option<PageContent> {
            self.0.clone()
        }
    }

    #[test]
    fn test_merge_only_overwrites_found_fields() {
        let mut form = ApplicationForm::new(date(), "Applied");
        form.company = "Typed By Hand".to_string();
        form.salary = "$1".to_string();

        let merged = form.merge(&ExtractionResult {
            company: None,
            position: Some("Data Analyst".to_string()),
            location: Some("Remote".to_string()),
            salary: None,
        });

        assert_eq!(merged, 2);
        assert_eq!(form.company, "Typed By Hand");
        assert_eq!(form.position, "Data Analyst");
        assert_eq!(form.location, "Remote");
        assert_eq!(form.salary, "$1");
    }

    #[test]
    fn test_merge_ignores_blank_values() {
        let mut form = ApplicationForm::new(date(), "Applied");
        form.location = "Berlin".to_string();

        let merged = form.merge(&ExtractionResult {
            location: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(merged, 0);
        assert_eq!(form.location, "Berlin");
    }

    #[test]
    fn test_apply_text_rejects_empty_input() {
        let mut form = ApplicationForm::new(date(), "Applied");
        let advisory = form.apply_text(&PostingParser::new(), "  \n\t ");

        assert_eq!(advisory, Advisory::error("Please paste job posting text first"));
        assert!(form.raw_text.is_empty());
    }

    #[test]
    fn test_apply_text_reports_found_count() {
        let mut form = ApplicationForm::new(date(), "Applied");
        let advisory = form.apply_text(
            &PostingParser::new(),
            "  Company: Globex\nPosition: Data Analyst\nLocation: Remote  ",
        );

        assert_eq!(
            advisory,
            Advisory::success("Parsed 3 field(s). Review and edit as needed.")
        );
        assert_eq!(form.company, "Globex");
        assert_eq!(form.raw_text, "Company: Globex\nPosition: Data Analyst\nLocation: Remote");
    }

    #[test]
    fn test_apply_text_nothing_found_keeps_form() {
        let mut form = ApplicationForm::new(date(), "Applied");
        form.company = "Kept".to_string();

        let advisory = form.apply_text(&PostingParser::new(), "nothing to find here");

        assert!(!advisory.is_success());
        assert_eq!(advisory.to_string(), "Could not auto-parse. Please fill in manually.");
        assert_eq!(form.company, "Kept");
    }

    #[test]
    fn test_load_page_sets_link_and_parses() {
        let mut form = ApplicationForm::new(date(), "Applied");
        let page = FixedPage(Some(PageContent {
            text: "Senior Software Engineer at Acme Corp\nNew York, NY".to_string(),
            url: "https://jobs.example.com/123".to_string(),
        }));

        let advisory = form.load_page(&PostingParser::new(), &page);

        assert!(advisory.is_success());
        assert_eq!(form.link, "https://jobs.example.com/123");
        assert_eq!(form.company, "Acme Corp");
        assert_eq!(form.location, "New York, NY");
    }

    #[test]
    fn test_load_page_without_url_keeps_link() {
        let mut form = ApplicationForm::new(date(), "Applied");
        form.link = "https://jobs.example.com/typed".to_string();
        let page = FixedPage(Some(PageContent {
            text: "Company: Globex".to_string(),
            url: String::new(),
        }));

        form.load_page(&PostingParser::new(), &page);

        assert_eq!(form.link, "https://jobs.example.com/typed");
        assert_eq!(form.company, "Globex");
    }

    #[test]
    fn test_load_page_without_content() {
        let mut form = ApplicationForm::new(date(), "Applied");
        let advisory = form.load_page(&PostingParser::new(), &FixedPage(None));

        assert_eq!(
            advisory,
            Advisory::error("Could not extract page content. Please paste manually.")
        );
        assert!(form.link.is_empty());
    }

    #[test]
    fn test_record_omits_empty_optional_fields() {
        let mut form = ApplicationForm::new(date(), "Applied");
        form.company = "Globex".to_string();
        form.location = "  ".to_string();
        form.salary = "$90,000".to_string();

        let json = serde_json::to_value(form.to_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "applicationDate": "2024-03-18",
                "company": "Globex",
                "position": "",
                "stage": "Applied",
                "salary": "$90,000",
            })
        );
    }

    #[test]
    fn test_form_round_trips_through_json() {
        let mut form = ApplicationForm::new(date(), "Interview");
        form.salary_expectation = "$150k".to_string();

        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"salaryExpectation\":\"$150k\""));
        assert!(!json.contains("rawText"));
        assert_eq!(serde_json::from_str::<ApplicationForm>(&json).unwrap(), form);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ApplicationForm::new(date(), "Interview");
        form.company = "Globex".to_string();
        form.raw_text = "text".to_string();

        let next_day = date().succ_opt().unwrap();
        form.reset(next_day, "Applied");

        assert_eq!(form, ApplicationForm::new(next_day, "Applied"));
    }
}

//! Location extraction.

use regex::Captures;

use super::patterns::{LOCATION_CITY_STATE, LOCATION_LABEL, LOCATION_THREE_PART, LOCATION_WORK_MODE};
use super::{all_accepted, first_accepted, FieldExtractor, Rule, RuleMatch};
use crate::posting::text::{char_len, collapse_whitespace};

/// Location field extractor.
pub struct LocationExtractor {
    rules: Vec<Rule>,
}

impl LocationExtractor {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule::new("location.three_part", &LOCATION_THREE_PART, clean_location, plausible_location),
                Rule::new("location.city_state", &LOCATION_CITY_STATE, clean_location, plausible_location),
                Rule::new("location.label", &LOCATION_LABEL, clean_location, plausible_location),
                Rule::new("location.work_mode", &LOCATION_WORK_MODE, clean_location, plausible_location),
            ],
        }
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = RuleMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_accepted(&self.rules, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        all_accepted(&self.rules, text)
    }
}

/// Extract the job location from posting text.
pub fn extract_location(text: &str) -> Option<String> {
    LocationExtractor::new().extract(text).map(|m| m.value)
}

fn clean_location(caps: &Captures<'_>) -> Option<String> {
    let collapsed = collapse_whitespace(caps.get(1)?.as_str());
    let trimmed = collapsed.strip_suffix(',').unwrap_or(&collapsed).trim_end();
    Some(trimmed.to_string())
}

fn plausible_location(value: &str) -> bool {
    char_len(value) > 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_part_location() {
        let text = "Staff Engineer\nSan Francisco, California, United States\nFull time";
        let found = LocationExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "San Francisco, California, United States");
        assert_eq!(found.rule, "location.three_part");
    }

    #[test]
    fn test_city_state() {
        let text = "Senior Software Engineer at Acme Corp\nNew York, NY\n$120,000 - $150,000";
        let found = LocationExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "New York, NY");
        assert_eq!(found.rule, "location.city_state");
    }

    #[test]
    fn test_city_state_at_end_of_text() {
        assert_eq!(extract_location("Based in Austin, TX"), Some("Austin, TX".to_string()));
    }

    #[test]
    fn test_label() {
        let text = "Company: Globex\nPosition: Data Analyst\nLocation: Remote";
        let found = LocationExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Remote");
        assert_eq!(found.rule, "location.label");
    }

    #[test]
    fn test_label_trailing_comma_stripped() {
        assert_eq!(
            extract_location("location:   Lisbon   Portugal,"),
            Some("Lisbon Portugal".to_string())
        );
    }

    #[test]
    fn test_work_mode_with_city() {
        let text = "This role is hybrid - Denver, CO based";
        // The city-state rule sees "Denver, CO" first.
        assert_eq!(extract_location(text), Some("Denver, CO".to_string()));

        let found = LocationExtractor::new().extract("Remote – Anywhere").unwrap();
        assert_eq!(found.value, "Remote – Anywhere");
        assert_eq!(found.rule, "location.work_mode");
    }

    #[test]
    fn test_work_mode_alone() {
        assert_eq!(extract_location("This position is on-site only"), Some("on-site".to_string()));
    }

    #[test]
    fn test_short_label_rejected_falls_through() {
        // "NYC" is too short; the work mode rule still finds "Hybrid".
        let text = "Location: NYC\nHybrid schedule";
        let found = LocationExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Hybrid");
        assert_eq!(found.rule, "location.work_mode");
    }

    #[test]
    fn test_short_label_rejected_leaves_absent() {
        assert_eq!(extract_location("Location: LA"), None);
    }

    #[test]
    fn test_no_location() {
        assert_eq!(extract_location("we build tools for teams"), None);
    }
}

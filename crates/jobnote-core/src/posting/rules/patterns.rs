//! Common regex patterns for job posting extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Words that mark a line (or a "<title> at <company>" phrase) as a job title.
pub const TITLE_KEYWORDS: &[&str] = &[
    "Engineer",
    "Developer",
    "Manager",
    "Analyst",
    "Specialist",
    "Director",
    "Lead",
    "Architect",
    "Designer",
    "Administrator",
    "Coordinator",
    "Associate",
    "Consultant",
    "Executive",
    "Officer",
    "Head",
    "Principal",
    "Staff",
    "Senior",
    "Junior",
    "Intern",
    "Scientist",
    "Researcher",
    "Technician",
    "Representative",
];

/// Substrings that disqualify a title line (it is a field row, not a title).
pub const TITLE_LINE_EXCLUSIONS: &[&str] = &["location", "salary", "department"];

lazy_static! {
    // Company patterns
    pub static ref COMPANY_AT: Regex = Regex::new(
        r"(?i)(?:\bat|@)\s+((?-i:[A-Z])[A-Za-z0-9\s&.,'-]+?)(?:\s*\n|$|\||•|careers)"
    ).unwrap();

    pub static ref COMPANY_LABEL: Regex = Regex::new(
        r"(?im)^company:\s*(.+?)$"
    ).unwrap();

    pub static ref COMPANY_JOIN: Regex = Regex::new(
        r"(?i)\b(?:join|work at|about)\s+((?-i:[A-Z])[A-Za-z0-9 \t&.,'-]{2,30})(?:\r?\n|$)"
    ).unwrap();

    pub static ref COMPANY_AFTER_TITLE: Regex = Regex::new(&format!(
        r"(?i)\b(?:{})\s+(?:at|@)\s+((?-i:[A-Z])[A-Za-z0-9 \t&.,'-]+)",
        TITLE_KEYWORDS.join("|")
    )).unwrap();

    pub static ref COMPANY_SUFFIX: Regex = Regex::new(
        r"(?i)\s+(?:careers|jobs|hiring|team)$"
    ).unwrap();

    // Position patterns
    pub static ref TITLE_KEYWORD: Regex = Regex::new(&format!(
        r"(?i)\b(?:{})\b",
        TITLE_KEYWORDS.join("|")
    )).unwrap();

    pub static ref POSITION_LABEL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:job\s+title|position|role):\s*"
    ).unwrap();

    pub static ref POSITION_LABEL: Regex = Regex::new(
        r"(?i)\b(?:position|role|job\s+title|title):\s*([^\n]+)"
    ).unwrap();

    // Location patterns ("City, Region, Country", "City, ST", labels, work mode)
    pub static ref LOCATION_THREE_PART: Regex = Regex::new(
        r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)"
    ).unwrap();

    pub static ref LOCATION_CITY_STATE: Regex = Regex::new(
        r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2})(?:\s|$)"
    ).unwrap();

    pub static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?i)\blocation:\s*([^\n]+)"
    ).unwrap();

    pub static ref LOCATION_WORK_MODE: Regex = Regex::new(
        r"(?i)\b((?:remote|hybrid|on-?site)\b(?:[ \t]*[-–][ \t]*(?-i:[A-Z][a-z]+)(?:,[ \t]*(?-i:[A-Z]{2}))?)?)"
    ).unwrap();

    // Salary patterns
    pub static ref SALARY_RANGE: Regex = Regex::new(
        r"(?i)\$\s*([0-9,]+)\s*[-–]\s*\$?\s*([0-9,]+)\s*(?:USD|per year|/year|annually)?"
    ).unwrap();

    pub static ref SALARY_K_RANGE: Regex = Regex::new(
        r"(?i)\$\s*([0-9]+)k\s*[-–]\s*\$?\s*([0-9]+)k"
    ).unwrap();

    pub static ref SALARY_LABEL: Regex = Regex::new(
        r"(?i)\b(?:salary|compensation|pay)(?:\s+range)?:\s*([^\n]+)"
    ).unwrap();

    pub static ref SALARY_SINGLE: Regex = Regex::new(
        r"(?i)\$\s*[0-9,]+\s*(?:USD|per year|/year)?"
    ).unwrap();
}

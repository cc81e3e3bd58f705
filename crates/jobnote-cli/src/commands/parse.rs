//! Parse command - extract fields from job posting text.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use jobnote_core::posting::{PostingCandidates, RuleMatch};
use jobnote_core::{Advisory, ApplicationRecord, PageContentProvider, PostingParser};

use super::{load_config, load_form, save_form};
use crate::page::PostingSource;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Posting text file, or "-" to read stdin
    #[arg(required = true)]
    input: String,

    /// URL of the posting, stored as the application link
    #[arg(long)]
    url: Option<String>,

    /// Form file to merge the extracted fields into (created if missing)
    #[arg(long)]
    form: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List every accepted candidate per field instead of the winners
    #[arg(long)]
    candidates: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = PostingParser::from_config(&config.extraction);
    let source = PostingSource::new(args.input.as_str(), args.url.clone());

    let output = if args.candidates {
        let Some(page) = source.page_content() else {
            anyhow::bail!("{}", Advisory::error("Could not extract page content. Please paste manually."));
        };
        let text = page.text.trim();
        if text.is_empty() {
            anyhow::bail!("{}", Advisory::error("Please paste job posting text first"));
        }
        format_candidates(&parser.candidates(text), args.format)?
    } else {
        let mut form = load_form(args.form.as_deref(), &config.notion.default_stage)?;
        form.raw_text.clear();

        let advisory = form.load_page(&parser, &source);
        if form.raw_text.is_empty() {
            anyhow::bail!("{}", advisory);
        }

        let marker = if advisory.is_success() {
            style("✓").green()
        } else {
            style("!").yellow()
        };
        eprintln!("{} {}", marker, advisory);

        if let Some(form_path) = &args.form {
            save_form(form_path, &form)?;
            info!("Merged into form {}", form_path.display());
        }

        format_record(&form.to_record(), args.format)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(record: &ApplicationRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => record_csv(record),
        OutputFormat::Text => Ok(record_text(record)),
    }
}

fn record_csv(record: &ApplicationRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "application_date",
        "company",
        "position",
        "location",
        "salary",
        "link",
        "stage",
    ])?;

    wtr.write_record([
        record.application_date.to_string().as_str(),
        record.company.as_str(),
        record.position.as_str(),
        record.location.as_deref().unwrap_or_default(),
        record.salary.as_deref().unwrap_or_default(),
        record.link.as_deref().unwrap_or_default(),
        record.stage.as_str(),
    ])?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn record_text(record: &ApplicationRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Company:  {}\n", or_dash(&record.company)));
    output.push_str(&format!("Position: {}\n", or_dash(&record.position)));
    output.push_str(&format!("Location: {}\n", record.location.as_deref().unwrap_or("-")));
    output.push_str(&format!("Salary:   {}\n", record.salary.as_deref().unwrap_or("-")));
    if let Some(link) = &record.link {
        output.push_str(&format!("Link:     {}\n", link));
    }
    output.push_str(&format!("Date:     {}\n", record.application_date));
    output.push_str(&format!("Stage:    {}", record.stage));

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn format_candidates(candidates: &PostingCandidates, format: OutputFormat) -> anyhow::Result<String> {
    let fields: [(&str, &[RuleMatch]); 4] = [
        ("company", &candidates.company),
        ("position", &candidates.position),
        ("location", &candidates.location),
        ("salary", &candidates.salary),
    ];

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(candidates)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["field", "rule", "priority", "value"])?;
            for (field, matches) in fields {
                for m in matches {
                    let priority = m.priority.to_string();
                    wtr.write_record([field, m.rule, priority.as_str(), m.value.as_str()])?;
                }
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for (field, matches) in fields {
                output.push_str(&format!("{}:\n", field));
                if matches.is_empty() {
                    output.push_str("  (none)\n");
                }
                for m in matches {
                    output.push_str(&format!("  [{}] {}\n", m.rule, m.value));
                }
            }
            Ok(output.trim_end().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> ApplicationRecord {
        ApplicationRecord {
            application_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            company: "Acme, Inc".to_string(),
            position: "Staff Engineer".to_string(),
            stage: "Applied".to_string(),
            link: None,
            location: Some("Austin, TX".to_string()),
            salary: None,
            salary_expectation: None,
        }
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = format_record(&record(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("application_date,company,position,location,salary,link,stage")
        );
        assert_eq!(
            lines.next(),
            Some("2024-06-01,\"Acme, Inc\",Staff Engineer,\"Austin, TX\",,,Applied")
        );
    }

    #[test]
    fn test_text_marks_missing_fields() {
        let text = format_record(&record(), OutputFormat::Text).unwrap();

        assert!(text.contains("Company:  Acme, Inc"));
        assert!(text.contains("Salary:   -"));
        assert!(!text.contains("Link:"));
    }

    #[test]
    fn test_candidates_text() {
        let parser = PostingParser::new();
        let candidates = parser.candidates("Company: Globex\nSalary: $90K-$110K");
        let text = format_candidates(&candidates, OutputFormat::Text).unwrap();

        assert!(text.contains("[company.label] Globex"));
        assert!(text.contains("[salary.k_range] $90K-$110K"));
        assert!(text.contains("location:\n  (none)"));
    }
}

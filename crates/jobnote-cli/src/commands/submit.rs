//! Submit command - send an application to Notion.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use jobnote_core::{submit_application, ApplicationForm, PostingParser};

use super::{load_config, load_form, save_form, settings_store};
use crate::notion::NotionClient;
use crate::page::PostingSource;

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Form file built by `jobnote parse --form`; cleared after a successful save
    #[arg(long)]
    form: Option<PathBuf>,

    /// Posting text file (or "-" for stdin) to extract fields from first
    #[arg(short, long)]
    input: Option<String>,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    position: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    salary: Option<String>,

    /// Salary you asked for
    #[arg(long)]
    salary_expectation: Option<String>,

    /// Link to the posting
    #[arg(long)]
    link: Option<String>,

    /// Application stage (default from config)
    #[arg(long)]
    stage: Option<String>,

    /// Application date, YYYY-MM-DD (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl SubmitArgs {
    /// Copy every field given on the command line into the form.
    fn apply_overrides(&self, form: &mut ApplicationForm) {
        let overrides = [
            (&mut form.company, &self.company),
            (&mut form.position, &self.position),
            (&mut form.location, &self.location),
            (&mut form.salary, &self.salary),
            (&mut form.salary_expectation, &self.salary_expectation),
            (&mut form.link, &self.link),
            (&mut form.stage, &self.stage),
        ];

        for (slot, value) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        if let Some(date) = self.date {
            form.application_date = date;
        }
    }
}

pub async fn run(
    args: SubmitArgs,
    config_path: Option<&str>,
    settings_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let stage = &config.notion.default_stage;
    let mut form = load_form(args.form.as_deref(), stage)?;

    if let Some(input) = &args.input {
        let parser = PostingParser::from_config(&config.extraction);
        let advisory = form.load_page(&parser, &PostingSource::new(input.as_str(), None));
        eprintln!("{} {}", style("ℹ").blue(), advisory);
    }

    args.apply_overrides(&mut form);
    debug!("Submitting form: {:?}", form);

    let store = settings_store(settings_path);
    let client = NotionClient::new(&config.notion)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Saving to Notion...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let advisory = submit_application(&store, &client, &form).await;
    pb.finish_and_clear();

    if !advisory.is_success() {
        eprintln!("{} {}", style("✗").red(), advisory);
        std::process::exit(1);
    }

    println!("{} {}", style("✓").green(), advisory);

    if let Some(form_path) = &args.form {
        form.reset(Local::now().date_naive(), stage.as_str());
        save_form(form_path, &form)?;
    }

    Ok(())
}

//! CLI application for capturing job postings into Notion.

mod commands;
mod notion;
mod page;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, parse, settings, submit};

/// jobnote - Capture job postings into a Notion database
#[derive(Parser)]
#[command(name = "jobnote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the Notion settings file
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from job posting text
    Parse(parse::ParseArgs),

    /// Submit an application to Notion
    Submit(submit::SubmitArgs),

    /// Manage Notion credentials
    Settings(settings::SettingsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    let settings_path = cli.settings.as_deref();

    match cli.command {
        Commands::Parse(args) => parse::run(args, config_path),
        Commands::Submit(args) => submit::run(args, config_path, settings_path).await,
        Commands::Settings(args) => settings::run(args, settings_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}

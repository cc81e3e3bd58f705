//! Settings command - manage Notion credentials.

use clap::{Args, Subcommand};
use console::style;

use jobnote_core::{save_settings, JsonFileSettingsStore, SettingsStore};

use super::settings_store;

/// Arguments for the settings command.
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Store the Notion integration token and database ID
    Set {
        /// Notion integration token
        #[arg(long)]
        token: String,

        /// ID of the database applications are added to
        #[arg(long)]
        database_id: String,
    },

    /// Show stored settings (token masked)
    Show,

    /// Show settings file path
    Path,

    /// Remove stored settings
    Clear,
}

pub fn run(args: SettingsArgs, settings_path: Option<&str>) -> anyhow::Result<()> {
    let store = settings_store(settings_path);

    match args.command {
        SettingsCommand::Set { token, database_id } => set_settings(&store, &token, &database_id),
        SettingsCommand::Show => show_settings(&store),
        SettingsCommand::Path => show_path(&store),
        SettingsCommand::Clear => clear_settings(&store),
    }
}

fn set_settings(store: &JsonFileSettingsStore, token: &str, database_id: &str) -> anyhow::Result<()> {
    let advisory = save_settings(store, token, database_id);
    if !advisory.is_success() {
        anyhow::bail!("{}", advisory);
    }

    println!("{} {}", style("✓").green(), advisory);
    Ok(())
}

fn show_settings(store: &JsonFileSettingsStore) -> anyhow::Result<()> {
    let stored = store.load()?;

    match stored.credentials() {
        Some(credentials) => {
            println!("Token:       {}", credentials.masked_token());
            println!("Database ID: {}", credentials.database_id());
        }
        None => {
            println!(
                "{} Notion settings are not configured.",
                style("ℹ").blue()
            );
            println!();
            println!("Run 'jobnote settings set --token <TOKEN> --database-id <ID>' to configure them.");
        }
    }

    Ok(())
}

fn show_path(store: &JsonFileSettingsStore) -> anyhow::Result<()> {
    println!("Settings file: {}", store.path().display());

    if store.path().exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
    }

    Ok(())
}

fn clear_settings(store: &JsonFileSettingsStore) -> anyhow::Result<()> {
    store.clear()?;
    println!("{} Settings cleared", style("✓").green());
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use codeshot::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "codeshot")]
#[command(about = "Codeshot - beautiful images of your source code")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.codeshot/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GUI
    Gui,

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Run the configured formatter on a file and print the result
    Format {
        /// File to format
        file: PathBuf,
    },

    /// Inspect or reset the persisted screenshot settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print every setting, with fallbacks for unset values
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore the default settings (keeps the saved code)
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        Some(Commands::Format { file }) => {
            cli::format::format_command(&config_path, &file).await?;
        }
        Some(Commands::Settings { action }) => match action {
            SettingsAction::Show { json } => cli::settings::show_command(&config_path, json)?,
            SettingsAction::Reset => cli::settings::reset_command(&config_path)?,
        },
        Some(Commands::Gui) | None => {
            codeshot::gui::run_gui(&config_path)?;
        }
    }

    Ok(())
}

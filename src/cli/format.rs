//! Format command implementation

use anyhow::{Context, Result};
use std::path::Path;

use codeshot::config::Config;
use codeshot::format::{CodeFormatter, CommandFormatter};

/// Run the configured formatter on `file` and print the result to stdout.
///
/// Unlike the settings panel, a formatter failure is reported here.
pub async fn format_command(config_path: &Path, file: &Path) -> Result<()> {
    let config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        Config::with_defaults()
    };

    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let formatter = CommandFormatter::from_settings(&config.formatter);
    let formatted = formatter
        .format(&code)
        .await
        .with_context(|| format!("Failed to format {}", file.display()))?;

    print!("{}", formatted);
    Ok(())
}

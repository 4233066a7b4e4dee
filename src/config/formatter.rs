//! Formatter settings

use serde::{Deserialize, Serialize};

/// External formatter invoked by the "Prettify code" action.
///
/// The code is written to the command's stdin; stdout is taken as the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterSettings {
    /// Executable to run
    /// Default: "prettier"
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed to the command
    /// Default: babel parser, no semicolons, single quotes
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Give up on the formatter after this many seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_command() -> String {
    "prettier".to_string()
}

fn default_args() -> Vec<String> {
    ["--parser", "babel", "--no-semi", "--single-quote"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timeout_secs() -> u64 {
    10
}

//! Code formatting
//!
//! The "Prettify code" action hands the current snippet to a [`CodeFormatter`].
//! The default implementation pipes it through an external formatter command.

mod command;

pub use command::CommandFormatter;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::settings::{SettingChange, SettingKey};

/// Errors a formatter can report
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Failed to start formatter '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Formatter I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Formatter timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Formatter produced invalid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Rejected(String),
}

/// Something that can reformat a code snippet
#[async_trait]
pub trait CodeFormatter: Send + Sync {
    async fn format(&self, code: &str) -> Result<String, FormatError>;
}

/// Format `code` and turn the result into a `code` change.
///
/// Failures are swallowed here: they are logged at debug level and yield
/// `None`, so no caller ever sees a formatting error.
pub async fn format_change(formatter: &dyn CodeFormatter, code: &str) -> Option<SettingChange> {
    match formatter.format(code).await {
        Ok(formatted) => Some(SettingChange::new(SettingKey::Code, formatted)),
        Err(e) => {
            debug!("[codeshot] Format failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingValue;

    struct Upper;

    #[async_trait]
    impl CodeFormatter for Upper {
        async fn format(&self, code: &str) -> Result<String, FormatError> {
            Ok(code.to_uppercase())
        }
    }

    struct Broken;

    #[async_trait]
    impl CodeFormatter for Broken {
        async fn format(&self, _code: &str) -> Result<String, FormatError> {
            Err(FormatError::Rejected("SyntaxError: Unexpected token".to_string()))
        }
    }

    #[tokio::test]
    async fn test_format_change_wraps_result_as_code_change() {
        let change = format_change(&Upper, "let a = 1").await.unwrap();
        assert_eq!(change.key, SettingKey::Code);
        assert_eq!(change.value, SettingValue::Text("LET A = 1".to_string()));
    }

    #[tokio::test]
    async fn test_format_change_swallows_errors() {
        assert!(format_change(&Broken, "let a = ").await.is_none());
    }
}

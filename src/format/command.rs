//! Formatter backed by an external command (prettier by default)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{CodeFormatter, FormatError};
use crate::config::FormatterSettings;

/// Runs `command args...`, writes the code to stdin and reads the result from stdout
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandFormatter {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }

    pub fn from_settings(settings: &FormatterSettings) -> Self {
        Self::new(
            settings.command.clone(),
            settings.args.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    async fn run(&self, code: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| FormatError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // Feed stdin concurrently so a chatty formatter cannot fill stdout and stall us.
        // A write error (e.g. the formatter exited early) surfaces through the exit status.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = code.to_string();
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(input.as_bytes()).await {
                    debug!("[codeshot] Formatter stdin closed early: {}", e);
                }
                // stdin dropped here, formatter sees EOF
            })
        });

        let output = child.wait_with_output().await?;
        if let Some(writer) = writer {
            if let Err(e) = writer.await {
                debug!("[codeshot] Formatter stdin writer failed: {}", e);
            }
        }
        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[async_trait]
impl CodeFormatter for CommandFormatter {
    async fn format(&self, code: &str) -> Result<String, FormatError> {
        match tokio::time::timeout(self.timeout, self.run(code)).await {
            Ok(result) => result,
            Err(_) => Err(FormatError::Timeout(self.timeout)),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn formatter(command: &str, args: &[&str]) -> CommandFormatter {
        CommandFormatter::new(
            command,
            args.iter().map(|a| a.to_string()).collect(),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_pipes_code_through_command() {
        let out = formatter("tr", &["a-z", "A-Z"]).format("const x = 1\n").await.unwrap();
        assert_eq!(out, "CONST X = 1\n");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let err = formatter("sh", &["-c", "echo 'bad input' >&2; exit 2"])
            .format("x")
            .await
            .unwrap_err();
        match err {
            FormatError::Failed { stderr, .. } => assert_eq!(stderr, "bad input"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_formatter_closing_stdin_early_still_reports_exit() {
        // Exits without reading stdin; the writer task sees a broken pipe
        let code = "x".repeat(1 << 20);
        let err = formatter("sh", &["-c", "exit 3"]).format(&code).await.unwrap_err();
        assert!(matches!(err, FormatError::Failed { .. }));
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let err = formatter("codeshot-no-such-formatter", &[])
            .format("x")
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_slow_formatter_times_out() {
        let slow = CommandFormatter::new(
            "sh",
            vec!["-c".to_string(), "sleep 5".to_string()],
            Duration::from_millis(100),
        );
        let err = slow.format("x").await.unwrap_err();
        assert!(matches!(err, FormatError::Timeout(d) if d == Duration::from_millis(100)));
        assert_eq!(err.to_string(), "Formatter timed out after 100ms");
    }
}

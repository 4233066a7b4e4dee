//! Shared test utilities for settings panel tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use codeshot::format::{CodeFormatter, FormatError};
use codeshot::gui::{SettingsHost, SettingsPanel};
use codeshot::settings::{SettingKey, SettingValue};

/// A host that records every call the panel makes
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub changes: Vec<(SettingKey, SettingValue)>,
    pub resets: usize,
}

impl SettingsHost for RecordingHost {
    fn on_change(&mut self, key: SettingKey, value: SettingValue) {
        self.changes.push((key, value));
    }

    fn reset_default_settings(&mut self) {
        self.resets += 1;
    }
}

/// Formatter that always resolves to a fixed string
pub struct FixedFormatter {
    pub output: String,
    pub calls: AtomicUsize,
}

impl FixedFormatter {
    pub fn new(output: &str) -> Arc<Self> {
        Arc::new(Self {
            output: output.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeFormatter for FixedFormatter {
    async fn format(&self, _code: &str) -> Result<String, FormatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Formatter that always rejects
pub struct FailingFormatter;

#[async_trait]
impl CodeFormatter for FailingFormatter {
    async fn format(&self, _code: &str) -> Result<String, FormatError> {
        Err(FormatError::Rejected("SyntaxError: Unexpected token (1:5)".to_string()))
    }
}

/// Formatter that waits before resolving
pub struct SlowFormatter {
    pub delay: Duration,
    pub output: String,
}

#[async_trait]
impl CodeFormatter for SlowFormatter {
    async fn format(&self, _code: &str) -> Result<String, FormatError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.output.clone())
    }
}

/// Poll the panel until its format request has finished (or give up after 5s)
pub fn wait_for_format(panel: &mut SettingsPanel, host: &mut RecordingHost) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while panel.is_formatting() {
        panel.poll_format(host);
        if Instant::now() > deadline {
            panic!("format request did not finish in time");
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

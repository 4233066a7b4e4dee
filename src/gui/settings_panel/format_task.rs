//! Background format request
//!
//! Runs the formatter on its own thread with a current-thread tokio runtime and
//! hands the outcome back over a channel the UI polls once per frame.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::debug;

use crate::format::{format_change, CodeFormatter};
use crate::settings::SettingChange;

pub(super) enum FormatPoll {
    Pending,
    /// Finished; `None` when formatting failed
    Done(Option<SettingChange>),
}

pub(super) struct FormatTask {
    rx: Receiver<Option<SettingChange>>,
}

impl FormatTask {
    pub(super) fn spawn(
        formatter: Arc<dyn CodeFormatter>,
        code: String,
        repaint_ctx: Option<egui::Context>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(format_change(formatter.as_ref(), &code)),
                Err(e) => {
                    debug!("[codeshot] Failed to start format runtime: {}", e);
                    None
                }
            };

            // The receiver is gone if the panel was dropped or the request was replaced
            if tx.send(result).is_err() {
                debug!("[codeshot] Format result discarded, no one is waiting for it");
                return;
            }

            if let Some(ctx) = repaint_ctx {
                ctx.request_repaint();
            }
        });

        Self { rx }
    }

    pub(super) fn poll(&self) -> FormatPoll {
        match self.rx.try_recv() {
            Ok(result) => FormatPoll::Done(result),
            Err(TryRecvError::Empty) => FormatPoll::Pending,
            // Worker died without reporting; treat like a failed format
            Err(TryRecvError::Disconnected) => FormatPoll::Done(None),
        }
    }
}

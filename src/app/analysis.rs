// LogSage - app/analysis.rs
//
// Analysis lifecycle management. Runs the remote call on a background
// thread, sending progress messages to the UI thread via an mpsc channel.
//
// Architecture:
//   - Extraction runs on the UI thread (it is a cheap single pass, memoised
//     by the state-owned `SnippetCache`); only the blocking HTTP request is
//     pushed to a background thread so it never stalls the render loop.
//   - `AnalysisManager` lives on the UI thread; `run_analysis` runs on the
//     background thread. All cross-thread communication is via
//     `AnalysisProgress` messages.
//   - No cancellation: once issued, the request runs to completion or
//     failure. Starting a new analysis (or loading a new document, via
//     `reset`) replaces or drops the receiver; the old thread's sends fail
//     harmlessly and it exits.

use crate::core::model::{AnalysisProgress, ErrorSnippet};
use crate::llm::analyzer;
use crate::llm::client::AzureClient;
use crate::llm::config::ServiceConfig;
use crate::util::error::LogSageError;
use std::sync::mpsc;

/// Manages one analysis action on a background thread.
pub struct AnalysisManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<AnalysisProgress>>,
}

impl AnalysisManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start analysing the extracted snippets against the configured service.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. A previous in-flight analysis keeps running detached — its
    /// receiver is dropped here, so its sends fail and it exits quietly.
    pub fn start_analysis(&mut self, snippets: Vec<ErrorSnippet>, config: ServiceConfig) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_analysis(snippets, config, tx);
        });

        tracing::info!("Analysis started");
    }

    /// Detach from any in-flight analysis by dropping the receiver.
    ///
    /// The background thread keeps running; its sends fail once the receiver
    /// is gone and it exits quietly. Called when a new document replaces the
    /// current one, so a stale result is never attributed to the new file.
    pub fn reset(&mut self) {
        self.progress_rx = None;
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<AnalysisProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for AnalysisManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background analysis: client construction → single remote call.
///
/// The no-errors case never reaches the network: `analyzer::analyze` returns
/// the sentinel before the client is asked for anything.
fn run_analysis(
    snippets: Vec<ErrorSnippet>,
    config: ServiceConfig,
    tx: mpsc::Sender<AnalysisProgress>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed or superseded); exit quietly.
            }
        };
    }

    send!(AnalysisProgress::Started);

    let client = match AzureClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Cannot construct service client");
            send!(AnalysisProgress::Failed {
                error: LogSageError::from(e).to_string(),
            });
            return;
        }
    };

    match analyzer::analyze(&snippets, &client) {
        Ok(text) => {
            send!(AnalysisProgress::Completed { text });
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis request failed");
            send!(AnalysisProgress::Failed {
                error: LogSageError::from(e).to_string(),
            });
        }
    }
}

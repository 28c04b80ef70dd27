// LogSage - app/state.rs
//
// Application state management. Holds the loaded document, extracted
// snippets, analysis result, and service configuration.
// Owned by the eframe::App implementation.

use crate::core::extract::SnippetCache;
use crate::core::model::{ErrorSnippet, LogDocument};
use crate::llm::config::ServiceConfig;
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Resolved service configuration, if the environment provided one.
    /// `None` disables the Analyze action with an explanatory status.
    pub config: Option<ServiceConfig>,

    /// Currently loaded log document (None until a file is opened).
    pub document: Option<LogDocument>,

    /// Snippets extracted from the current document. Populated when an
    /// analysis is started; cleared when a new document is loaded.
    pub snippets: Vec<ErrorSnippet>,

    /// Result text of the most recent completed analysis: either the
    /// no-errors sentinel or the verbatim service response.
    pub analysis_result: Option<String>,

    /// Whether an analysis request is currently in flight.
    pub analysis_in_progress: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// File path queued for loading by a panel or CLI argument; the GUI
    /// update loop consumes this each frame.
    pub pending_open: Option<PathBuf>,

    /// Set by a panel to request that an analysis be started.
    pub request_analysis: bool,

    /// Memoised extraction results, keyed by exact document text.
    pub snippet_cache: SnippetCache,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with the resolved (or absent) configuration.
    pub fn new(config: Option<ServiceConfig>, debug_mode: bool) -> Self {
        let status_message = if config.is_some() {
            "Ready. Open a log file to begin.".to_string()
        } else {
            "Service not configured — set the AZURE_OPENAI_* environment variables. \
             Files can still be opened and previewed."
                .to_string()
        };

        Self {
            config,
            document: None,
            snippets: Vec::new(),
            analysis_result: None,
            analysis_in_progress: false,
            status_message,
            pending_open: None,
            request_analysis: false,
            snippet_cache: SnippetCache::new(),
            debug_mode,
        }
    }

    /// Install a freshly loaded document, discarding results from the
    /// previous one. Callers that may have an analysis in flight must also
    /// detach the `AnalysisManager` (`reset`); the worker keeps running but
    /// its messages are no longer received.
    pub fn set_document(&mut self, document: LogDocument) {
        self.status_message = format!("Loaded '{}'.", document.display_name());
        self.document = Some(document);
        self.snippets.clear();
        self.analysis_result = None;
    }

    /// Extract snippets for the current document through the memo cache.
    /// Returns an empty vec when no document is loaded.
    pub fn extract_snippets(&mut self) -> Vec<ErrorSnippet> {
        match self.document {
            Some(ref doc) => self.snippet_cache.extract(&doc.text),
            None => Vec::new(),
        }
    }

    /// True when the Analyze action should be clickable.
    pub fn can_analyze(&self) -> bool {
        self.config.is_some() && self.document.is_some() && !self.analysis_in_progress
    }
}

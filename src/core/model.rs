// LogSage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. Nothing here is
// mutated after creation and nothing outlives a single analysis action.

use std::path::PathBuf;

// =============================================================================
// Log document (decoded upload)
// =============================================================================

/// One uploaded log file, fully decoded to UTF-8.
///
/// Created once per user-initiated upload and replaced wholesale by the next
/// upload; never persisted.
#[derive(Debug, Clone)]
pub struct LogDocument {
    /// Path the file was loaded from.
    pub path: PathBuf,

    /// Full decoded content.
    pub text: String,
}

impl LogDocument {
    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// =============================================================================
// Error snippet (extraction output)
// =============================================================================

/// A three-line text window centred on a line that matched the error token.
///
/// `text` is exactly: previous line, `\n`, matched line, `\n`, next line.
/// At the file boundaries the missing neighbour is an empty string.
/// Overlapping windows from adjacent matches are independent and may repeat
/// shared lines verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSnippet {
    /// 1-based line number of the matched line, for display and reference.
    pub line_number: usize,

    /// The three-line window joined by line breaks.
    pub text: String,
}

// =============================================================================
// Analysis progress (worker thread -> UI channel messages)
// =============================================================================

/// Messages sent from the background analysis thread to the UI thread.
#[derive(Debug)]
pub enum AnalysisProgress {
    /// The worker has started on the extracted snippets.
    Started,

    /// The analysis finished. `text` is either the no-errors sentinel or the
    /// verbatim completion from the remote service.
    Completed { text: String },

    /// The remote call failed. The message is already formatted for display.
    Failed { error: String },
}

// LogSage - core/extract.rs
//
// Error-context extraction: one three-line snippet per line containing the
// error token, in source order. Pure function of its input.
//
// The match is a case-insensitive substring test, deliberately unanchored:
// "ErrorCode" and "terrorist" both match. The original behaviour is kept
// rather than second-guessing a word-boundary intent.

use crate::core::model::ErrorSnippet;
use crate::util::constants::{ERROR_TOKEN, SNIPPET_CACHE_CAPACITY};
use std::collections::HashMap;
use std::collections::VecDeque;

/// Extract a three-line context snippet for every line containing the error
/// token (case-insensitive).
///
/// Lines are produced by `str::lines`: a final unterminated line is included,
/// a trailing newline does not produce an empty final line. For a match at
/// index *i*, the snippet is line *i-1* (empty string if the match is the
/// first line), the matched line, and line *i+1* (empty string if last),
/// joined by `\n`. Snippets are ordered by ascending match index and never
/// merged, even when their windows overlap.
///
/// No error conditions: empty input or no matches yields an empty vec.
pub fn extract_error_context(log_text: &str) -> Vec<ErrorSnippet> {
    let lines: Vec<&str> = log_text.lines().collect();
    let mut snippets = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        // Case-insensitive substring test.
        if !line.to_lowercase().contains(ERROR_TOKEN) {
            continue;
        }
        let prev = if i > 0 { lines[i - 1] } else { "" };
        let next = if i + 1 < lines.len() { lines[i + 1] } else { "" };
        snippets.push(ErrorSnippet {
            line_number: i + 1,
            text: format!("{prev}\n{line}\n{next}"),
        });
    }

    snippets
}

// =============================================================================
// Memoisation cache
// =============================================================================

/// Bounded side-table cache for extraction results, keyed by exact input text.
///
/// A pure optimisation for re-analysing the same upload: extraction is cheap,
/// but re-running it on every Analyze click for an unchanged document is
/// wasted work. Owned explicitly by the caller (the app state), accessed only
/// from the UI thread. FIFO eviction at `SNIPPET_CACHE_CAPACITY`.
#[derive(Debug, Default)]
pub struct SnippetCache {
    entries: HashMap<String, Vec<ErrorSnippet>>,
    insertion_order: VecDeque<String>,
}

impl SnippetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run extraction through the cache. Identical input text returns the
    /// memoised result without re-scanning.
    pub fn extract(&mut self, log_text: &str) -> Vec<ErrorSnippet> {
        if let Some(cached) = self.entries.get(log_text) {
            tracing::debug!(snippets = cached.len(), "Extraction cache hit");
            return cached.clone();
        }

        let snippets = extract_error_context(log_text);

        if self.insertion_order.len() >= SNIPPET_CACHE_CAPACITY {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.insertion_order.push_back(log_text.to_string());
        self.entries.insert(log_text.to_string(), snippets.clone());

        snippets
    }

    /// Number of memoised inputs currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

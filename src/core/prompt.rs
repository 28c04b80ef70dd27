// LogSage - core/prompt.rs
//
// Assembly of the fixed analysis prompt from extracted snippets.
// Core layer: pure string logic, no I/O.

use crate::core::model::ErrorSnippet;

/// Separator between snippets in the context block: exactly one blank line.
const SNIPPET_SEPARATOR: &str = "\n\n";

/// Build the chat-completion prompt embedding all snippets verbatim.
///
/// Snippets are joined in order with a blank-line separator into a single
/// context block. The surrounding template instructs the model to identify
/// the exact error(s), the root cause, and a step-by-step bullet-pointed
/// resolution referencing log lines where possible.
///
/// Callers must not invoke this with an empty collection; the requester
/// short-circuits that case to the no-errors sentinel before prompt assembly.
pub fn build_analysis_prompt(snippets: &[ErrorSnippet]) -> String {
    let context = snippets
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(SNIPPET_SEPARATOR);

    format!(
        "You are a log analysis expert. Analyze these application log excerpts \
         for errors, issues, or anomalies:\n\n\
         {context}\n\n\
         Identify the exact error(s), root cause, and step-by-step resolution. \
         Be precise, use bullet points for steps, and reference log lines if possible.\n"
    )
}

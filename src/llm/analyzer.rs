// LogSage - llm/analyzer.rs
//
// The analysis requester: sentinel short-circuit, prompt assembly, and the
// single remote call. No retry, no fallback text; failures propagate.

use crate::core::model::ErrorSnippet;
use crate::core::prompt::build_analysis_prompt;
use crate::llm::client::TextCompletion;
use crate::util::constants::NO_ERRORS_MESSAGE;
use crate::util::error::LlmError;

/// Analyse extracted snippets through the remote completion capability.
///
/// An empty collection returns the fixed no-errors sentinel immediately,
/// without contacting the service. Otherwise exactly one request is issued,
/// regardless of how many snippets there are, and the completion text is
/// returned unmodified.
pub fn analyze<C: TextCompletion>(
    snippets: &[ErrorSnippet],
    backend: &C,
) -> Result<String, LlmError> {
    if snippets.is_empty() {
        tracing::info!("No error lines found; skipping remote call");
        return Ok(NO_ERRORS_MESSAGE.to_string());
    }

    let prompt = build_analysis_prompt(snippets);
    tracing::info!(
        snippets = snippets.len(),
        prompt_chars = prompt.len(),
        "Requesting analysis"
    );

    backend.complete(&prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test backend recording every prompt it receives.
    struct RecordingBackend {
        prompts: RefCell<Vec<String>>,
        reply: String,
    }

    impl RecordingBackend {
        fn replying(reply: &str) -> Self {
            Self {
                prompts: RefCell::new(Vec::new()),
                reply: reply.to_string(),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.borrow().len()
        }
    }

    impl TextCompletion for RecordingBackend {
        fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    /// Backend that always fails, for propagation tests.
    struct FailingBackend;

    impl TextCompletion for FailingBackend {
        fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    fn snippet(line_number: usize, text: &str) -> ErrorSnippet {
        ErrorSnippet {
            line_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_snippets_returns_sentinel_without_remote_call() {
        let backend = RecordingBackend::replying("unused");
        let result = analyze(&[], &backend).unwrap();
        assert_eq!(result, NO_ERRORS_MESSAGE);
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_one_request_regardless_of_snippet_count() {
        let backend = RecordingBackend::replying("diagnosis");
        let snippets: Vec<_> = (0..5)
            .map(|i| snippet(i + 1, &format!("x\nerror {i}\ny")))
            .collect();
        let result = analyze(&snippets, &backend).unwrap();
        assert_eq!(result, "diagnosis");
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_prompt_contains_joined_snippets() {
        let backend = RecordingBackend::replying("ok");
        analyze(
            &[snippet(2, "a\nerror 1\nb"), snippet(7, "c\nerror 2\nd")],
            &backend,
        )
        .unwrap();
        let prompts = backend.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("a\nerror 1\nb\n\nc\nerror 2\nd"));
    }

    #[test]
    fn test_completion_text_returned_unmodified() {
        // No markdown sanitisation, no trimming.
        let reply = "## Findings\n\n- step one\n- step two\n";
        let backend = RecordingBackend::replying(reply);
        let result = analyze(&[snippet(1, "\nerror\n")], &backend).unwrap();
        assert_eq!(result, reply);
    }

    #[test]
    fn test_backend_failure_propagates() {
        let result = analyze(&[snippet(1, "\nerror\n")], &FailingBackend);
        assert!(matches!(result, Err(LlmError::EmptyResponse)));
    }
}

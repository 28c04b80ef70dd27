// LogSage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSage";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Upload limits
// =============================================================================

/// File extensions accepted by the open-log dialog and the upload boundary.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "log", "json"];

/// Maximum accepted log file size in bytes. Larger files are rejected at the
/// upload boundary rather than read into memory.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024; // 50 MB

// =============================================================================
// Extraction
// =============================================================================

/// Case-insensitive token a line must contain to be treated as an error line.
/// Deliberately unanchored: substring occurrences inside longer words match.
pub const ERROR_TOKEN: &str = "error";

/// Maximum number of memoised extraction results held by `SnippetCache`.
/// The cache is a pure optimisation for re-analysing the same upload; a
/// handful of entries is plenty for the single-user workflow.
pub const SNIPPET_CACHE_CAPACITY: usize = 8;

// =============================================================================
// Analysis request
// =============================================================================

/// Message returned when extraction finds no error lines. The remote service
/// is not contacted in that case.
pub const NO_ERRORS_MESSAGE: &str = "No errors detected in log.";

/// Sampling temperature for the chat completion. Near-deterministic output.
pub const COMPLETION_TEMPERATURE: f32 = 0.1;

/// Maximum completion length in tokens. Generous enough for a multi-paragraph
/// structured answer.
pub const COMPLETION_MAX_TOKENS: u32 = 1500;

/// HTTP client timeout in seconds. A transport-layer default, not an
/// analysis-level deadline.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Default chat deployment name (overridable via environment).
pub const DEFAULT_GPT_DEPLOYMENT: &str = "gpt-4o-mini";

/// Default embedding deployment name (overridable via environment).
pub const DEFAULT_EMBED_DEPLOYMENT: &str = "text-embedding-ada-002";

// =============================================================================
// Environment variables
// =============================================================================

/// Azure OpenAI resource endpoint, e.g. `https://myresource.openai.azure.com`.
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";

/// Azure OpenAI API key.
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";

/// Azure OpenAI API version, e.g. `2024-02-01`.
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

/// Optional override for the chat deployment name.
pub const ENV_GPT_DEPLOYMENT: &str = "AZURE_OPENAI_GPT_DEPLOYMENT";

/// Optional override for the embedding deployment name.
pub const ENV_EMBED_DEPLOYMENT: &str = "AZURE_OPENAI_EMBED_DEPLOYMENT";

// =============================================================================
// UI
// =============================================================================

/// Maximum number of characters of raw log shown in the preview pane.
pub const PREVIEW_MAX_CHARS: usize = 2000;

/// Maximum number of snippets listed individually in the sidebar before the
/// remainder is collapsed behind a count.
pub const MAX_SIDEBAR_SNIPPETS: usize = 200;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// LogSage - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogSage operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogSageError {
    /// Service configuration is missing or invalid.
    Config(ConfigError),

    /// Loading or decoding an uploaded log file failed.
    Upload(UploadError),

    /// The remote completion/embedding call failed.
    Llm(LlmError),
}

impl fmt::Display for LogSageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Upload(e) => write!(f, "Upload error: {e}"),
            Self::Llm(e) => write!(f, "AI service error: {e}"),
        }
    }
}

impl std::error::Error for LogSageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Upload(e) => Some(e),
            Self::Llm(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to Azure OpenAI service configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingVar { name: &'static str },

    /// A required environment variable is set but empty.
    EmptyVar { name: &'static str },

    /// The endpoint URL is not usable.
    InvalidEndpoint { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar { name } => {
                write!(f, "Environment variable '{name}' is not set")
            }
            Self::EmptyVar { name } => {
                write!(f, "Environment variable '{name}' is empty")
            }
            Self::InvalidEndpoint { value, reason } => {
                write!(f, "Invalid endpoint '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for LogSageError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Errors related to loading an uploaded log file.
#[derive(Debug)]
pub enum UploadError {
    /// The file extension is not one of the accepted log types.
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The file exceeds the maximum accepted size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// I/O error while reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension { path, extension } => write!(
                f,
                "'{}': unsupported extension '.{extension}' (accepted: .txt, .log, .json)",
                path.display()
            ),
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<UploadError> for LogSageError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

// ---------------------------------------------------------------------------
// Remote service errors
// ---------------------------------------------------------------------------

/// Errors from the Azure OpenAI chat-completion and embedding calls.
///
/// Propagated unchanged to the caller: no retry, no fallback text. The UI
/// surfaces these as a visible failure so the user can retry manually.
#[derive(Debug)]
pub enum LlmError {
    /// The HTTP client could not be constructed.
    ClientBuild { source: reqwest::Error },

    /// Transport-level failure (connection, TLS, timeout, body read).
    Http { source: reqwest::Error },

    /// The service returned a non-success status. The body is included
    /// verbatim because Azure error payloads carry the diagnostic detail.
    Api { status: u16, body: String },

    /// The response decoded but contained no completion choice or embedding.
    EmptyResponse,

    /// The response body was not the expected JSON shape.
    MalformedResponse { source: reqwest::Error },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { source } => {
                write!(f, "Failed to construct HTTP client: {source}")
            }
            Self::Http { source } => write!(f, "Request failed: {source}"),
            Self::Api { status, body } => {
                write!(f, "Service returned HTTP {status}: {body}")
            }
            Self::EmptyResponse => write!(f, "Service response contained no choices"),
            Self::MalformedResponse { source } => {
                write!(f, "Cannot decode service response: {source}")
            }
        }
    }
}

impl std::error::Error for LlmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Http { source } => Some(source),
            Self::MalformedResponse { source } => Some(source),
            _ => None,
        }
    }
}

impl From<LlmError> for LogSageError {
    fn from(e: LlmError) -> Self {
        Self::Llm(e)
    }
}

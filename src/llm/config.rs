// LogSage - llm/config.rs
//
// Azure OpenAI service configuration, resolved once from the environment at
// process start and passed by reference to whatever issues a remote call.
// No global mutable state; `.env` files are honoured by `dotenv` in main.

use crate::util::constants;
use crate::util::error::ConfigError;

/// Resolved connection settings for the Azure OpenAI service.
///
/// `Debug` is implemented by hand so the API key never reaches a log line.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Resource endpoint, e.g. `https://myresource.openai.azure.com`.
    /// Stored without a trailing slash.
    pub endpoint: String,

    /// API key sent in the `api-key` header.
    pub api_key: String,

    /// API version query parameter, e.g. `2024-02-01`.
    pub api_version: String,

    /// Chat-completion deployment name.
    pub gpt_deployment: String,

    /// Embedding deployment name.
    pub embed_deployment: String,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("gpt_deployment", &self.gpt_deployment)
            .field("embed_deployment", &self.embed_deployment)
            .finish()
    }
}

impl ServiceConfig {
    /// Resolve configuration from the environment.
    ///
    /// Required: endpoint, API key, API version. Optional: deployment name
    /// overrides, which default to the named constants.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = required_var(constants::ENV_ENDPOINT)?;
        let api_key = required_var(constants::ENV_API_KEY)?;
        let api_version = required_var(constants::ENV_API_VERSION)?;

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint {
                value: endpoint,
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let gpt_deployment = optional_var(constants::ENV_GPT_DEPLOYMENT)
            .unwrap_or_else(|| constants::DEFAULT_GPT_DEPLOYMENT.to_string());
        let embed_deployment = optional_var(constants::ENV_EMBED_DEPLOYMENT)
            .unwrap_or_else(|| constants::DEFAULT_EMBED_DEPLOYMENT.to_string());

        tracing::debug!(
            endpoint = %endpoint,
            api_version = %api_version,
            gpt_deployment = %gpt_deployment,
            embed_deployment = %embed_deployment,
            "Service configuration resolved"
        );

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            api_version,
            gpt_deployment,
            embed_deployment,
        })
    }

    /// URL of the chat-completion endpoint for the configured deployment.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.gpt_deployment, self.api_version
        )
    }

    /// URL of the embedding endpoint for the configured deployment.
    pub fn embeddings_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.endpoint, self.embed_deployment, self.api_version
        )
    }
}

/// Read a required environment variable, rejecting unset and empty values.
fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if v.trim().is_empty() => Err(ConfigError::EmptyVar { name }),
        Ok(v) => Ok(v),
        Err(_) => Err(ConfigError::MissingVar { name }),
    }
}

/// Read an optional environment variable; empty counts as unset.
fn optional_var(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

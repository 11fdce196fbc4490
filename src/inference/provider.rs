use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to a generation provider.
///
/// The tutor never surfaces these to the learner; they are logged and
/// replaced with a fixed message.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// The response body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Everything a provider needs for a single, non-streaming generation.
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    /// Full prompt text, already combined with the system instruction.
    pub prompt: &'a str,
    pub temperature: f32,
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Sends one request and awaits one response.
    ///
    /// `Ok(None)` means the call succeeded but the model produced no text.
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, ProviderError>;
}

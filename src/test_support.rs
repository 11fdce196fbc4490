//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::App;
use crate::inference::{GenerationProvider, GenerationRequest, ProviderError, Tutor};

/// A provider that always returns the same answer and records every prompt.
pub struct FixedProvider {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FixedProvider {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds with no text, like a response without candidates.
    pub fn silent() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, ProviderError> {
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        Ok(self.answer.clone())
    }
}

/// A provider whose every call fails at the transport level.
pub struct FailingProvider;

#[async_trait]
impl GenerationProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _request: GenerationRequest<'_>,
    ) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Creates a test App whose tutor always answers "คำตอบ".
pub fn test_app() -> App {
    let tutor = Tutor::new(
        Some(Arc::new(FixedProvider::answering("คำตอบ"))),
        "test-model".to_string(),
        0.7,
    );
    App::new(Arc::new(tutor), None)
}

use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for generative-language providers (Gemini, test doubles)
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a single-prompt generation request
    async fn generate(&self, model: &str, request: LlmRequest)
        -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

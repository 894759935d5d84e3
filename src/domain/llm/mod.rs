//! LLM provider domain models and traits

mod provider;
mod request;
mod response;

pub use provider::LlmProvider;
pub use request::{GenerationConfig, LlmRequest, LlmRequestBuilder};
pub use response::{FinishReason, LlmResponse, Usage};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;

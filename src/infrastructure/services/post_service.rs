//! Post generation service: the boundary around the model provider

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{
    build_post_prompt, strip_code_fence, GeneratedPost, GenerationConfig, LlmProvider, LlmRequest,
    Topic, HASHTAG_COUNT,
};

/// Generates marketing posts through a configured model provider.
///
/// Provider errors never leave this type: every failure is logged and
/// reported as `None`.
#[derive(Debug, Clone)]
pub struct PostGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    generation_config: GenerationConfig,
}

impl PostGenerator {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        generation_config: GenerationConfig,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            generation_config,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the reply with any surrounding code fence removed
    pub async fn generate(&self, prompt: &str) -> Option<String> {
        let request = LlmRequest::builder()
            .prompt(prompt)
            .generation_config(&self.generation_config)
            .build();

        let response = match self.provider.generate(&self.model, request).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    provider = self.provider.provider_name(),
                    model = %self.model,
                    error = %e,
                    "Failed to generate content"
                );
                return None;
            }
        };

        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Model responded"
        );

        let content = strip_code_fence(response.content());

        if content.is_empty() {
            error!(
                provider = self.provider.provider_name(),
                model = %self.model,
                "Failed to generate content: empty response"
            );
            return None;
        }

        Some(content.to_string())
    }

    /// Build the prompt for a topic and generate a post for it
    pub async fn generate_post(&self, topic: &Topic) -> Option<String> {
        let prompt = build_post_prompt(topic.as_str());
        let content = self.generate(&prompt).await?;

        match GeneratedPost::parse(&content) {
            Ok(post) if !post.has_requested_hashtags() => {
                warn!(
                    topic = %topic,
                    hashtags = post.hashtag_count(),
                    expected = HASHTAG_COUNT,
                    "Generated post has an unexpected number of hashtags"
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    topic = %topic,
                    error = %e,
                    "Generated content does not match the expected post shape; forwarding as-is"
                );
            }
        }

        Some(content)
    }
}

use serde::{Deserialize, Serialize};

/// Sampling parameters applied to every generation call.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
        }
    }
}

/// Parameters for LLM generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            top_p: None,
            top_k: None,
            max_output_tokens: None,
        }
    }

    pub fn builder() -> LlmRequestBuilder {
        LlmRequestBuilder::new()
    }
}

/// Builder for LlmRequest
#[derive(Debug, Default)]
pub struct LlmRequestBuilder {
    prompt: String,
    temperature: Option<f32>,
    top_p: Option<f32>,
    top_k: Option<u32>,
    max_output_tokens: Option<u32>,
}

impl LlmRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Apply every parameter of a generation config
    pub fn generation_config(self, config: &GenerationConfig) -> Self {
        self.temperature(config.temperature)
            .top_p(config.top_p)
            .top_k(config.top_k)
            .max_output_tokens(config.max_output_tokens)
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    pub fn build(self) -> LlmRequest {
        LlmRequest {
            prompt: self.prompt,
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = LlmRequest::builder()
            .prompt("Write a post")
            .temperature(0.3)
            .max_output_tokens(100)
            .build();

        assert_eq!(request.prompt, "Write a post");
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_output_tokens, Some(100));
        assert_eq!(request.top_k, None);
    }

    #[test]
    fn test_request_with_generation_config() {
        let config = GenerationConfig::default();
        let request = LlmRequest::builder()
            .prompt("Hello")
            .generation_config(&config)
            .build();

        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.top_p, Some(1.0));
        assert_eq!(request.top_k, Some(1));
        assert_eq!(request.max_output_tokens, Some(2048));
    }

    #[test]
    fn test_request_serialization_skips_unset_params() {
        let request = LlmRequest::new("Hi");
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"prompt":"Hi"}"#);
    }
}

//! Domain layer - Core business logic and entities

pub mod error;
pub mod llm;
pub mod post;
pub mod schedule;

pub use error::DomainError;
pub use llm::{
    FinishReason, GenerationConfig, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse,
    Usage,
};
pub use post::{
    build_post_prompt, pick_topic, strip_code_fence, GeneratedPost, Topic, HASHTAG_COUNT,
};
pub use schedule::{Clock, DailySchedule, SystemClock};

//! Request and response types for the HTTP API

pub mod error;
pub mod request;

pub use error::{ApiError, ApiErrorResponse, GENERATION_FAILED_MESSAGE, MISSING_TOPIC_MESSAGE};
pub use request::{TopicRequest, TOPIC_FIELD};

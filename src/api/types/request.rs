//! Request body for post generation

use axum::{
    extract::{FromRequest, Request},
    Json as AxumJson,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::ApiError;
use crate::domain::Topic;

/// Name of the body field carrying the topic
pub const TOPIC_FIELD: &str = "tema";

/// Extractor yielding the requested topic.
///
/// Only presence of `tema` is checked: any value, `null` included, becomes a
/// topic. No body, invalid JSON, a non-object body, a wrong content type or
/// an absent `tema` are all rejected with the same 400 response.
#[derive(Debug, Clone)]
pub struct TopicRequest(pub Topic);

impl<S> FromRequest<S> for TopicRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AxumJson(body) = AxumJson::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Rejected post generation body");
                ApiError::missing_topic()
            })?;

        body.get(TOPIC_FIELD)
            .map(|tema| TopicRequest(Topic::from_json(tema)))
            .ok_or_else(ApiError::missing_topic)
    }
}

//! Post generation endpoints

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, TopicRequest};

pub const INDEX_HTML: &str = "<h1>API de Marketing com Gemini está no ar!</h1>\
<p>Use o endpoint /gerar-post para criar conteúdo.</p>";

/// Content type of generated posts
pub const POST_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /gerar-post
///
/// The cleaned model reply is returned as-is with a JSON content type; it is
/// not re-validated as JSON. The topic rides along as a response extension
/// for the request log.
pub async fn generate_post(
    State(state): State<AppState>,
    TopicRequest(topic): TopicRequest,
) -> Response {
    info!(topic = %topic, "Processing post generation request");

    let mut response = match state.post_generator.generate_post(&topic).await {
        Some(content) => ([(header::CONTENT_TYPE, POST_CONTENT_TYPE)], content).into_response(),
        None => ApiError::generation_failed().into_response(),
    };

    response.extensions_mut().insert(topic);
    response
}

//! Social Post Generator
//!
//! Generates Instagram marketing posts with Google Gemini:
//! - `POST /gerar-post` returns a post for a caller-supplied topic
//! - a daily scheduled job logs a post for a random built-in topic

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use config::GeminiConfig;
use domain::DomainError;
use infrastructure::llm::{GeminiProvider, HttpClient};
use infrastructure::services::PostGenerator;

/// Build the post generator from the Gemini settings.
///
/// Fails when the API key is missing; nothing should start in that case.
pub fn create_post_generator(config: &GeminiConfig) -> Result<Arc<PostGenerator>, DomainError> {
    let api_key = config.require_api_key()?;

    let http_client = match config.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };
    let provider = GeminiProvider::with_base_url(http_client, api_key, &config.base_url);

    info!(
        model = %config.model,
        base_url = %config.base_url,
        "Gemini provider configured"
    );

    Ok(Arc::new(PostGenerator::new(
        Arc::new(provider),
        config.model.clone(),
        config.generation.clone(),
    )))
}

/// Create the HTTP application state around a shared generator
pub fn create_app_state(post_generator: Arc<PostGenerator>) -> AppState {
    AppState::new(post_generator)
}

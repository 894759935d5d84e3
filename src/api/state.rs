//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::PostGenerator;

/// Application state shared by every handler.
///
/// Holds only immutable services; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub post_generator: Arc<PostGenerator>,
}

impl AppState {
    pub fn new(post_generator: Arc<PostGenerator>) -> Self {
        Self { post_generator }
    }
}

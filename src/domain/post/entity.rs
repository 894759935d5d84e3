use serde::{Deserialize, Serialize};

use super::prompt::HASHTAG_COUNT;

/// Shape of the post the model is asked to return.
///
/// Replies are forwarded verbatim; this type is only used to detect
/// replies that do not match so they can be reported in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub legenda: String,
    pub hashtags: String,
    pub sugestao_imagem: String,
}

impl GeneratedPost {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Number of space-separated hashtags
    pub fn hashtag_count(&self) -> usize {
        self.hashtags.split_whitespace().count()
    }

    /// Whether the post carries as many hashtags as the prompt asks for
    pub fn has_requested_hashtags(&self) -> bool {
        self.hashtag_count() == HASHTAG_COUNT
    }
}

//! Marketing post domain: topics, prompt construction and model output cleanup

mod entity;
mod fence;
mod prompt;
mod topic;

pub use entity::GeneratedPost;
pub use fence::strip_code_fence;
pub use prompt::{build_post_prompt, HASHTAG_COUNT, POST_FIELDS};
pub use topic::{pick_topic, Topic, MARKETING_TOPICS};

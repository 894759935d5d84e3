use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::ScheduledJob;
use crate::domain::pick_topic;
use crate::infrastructure::services::PostGenerator;

/// Generates the post of the day for a random built-in topic and logs it
#[derive(Debug, Clone)]
pub struct DailyPostJob {
    generator: Arc<PostGenerator>,
}

impl DailyPostJob {
    pub fn new(generator: Arc<PostGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl ScheduledJob for DailyPostJob {
    fn name(&self) -> &str {
        "daily_post"
    }

    async fn run(&self) {
        let topic = pick_topic(&mut rand::thread_rng());
        info!(topic = %topic, "Running scheduled job: generating post of the day");

        match self.generator.generate_post(&topic).await {
            Some(content) => {
                info!(topic = %topic, content = %content, "Scheduled post generated");
            }
            None => {
                error!(topic = %topic, "Scheduled post generation failed");
            }
        }
    }
}

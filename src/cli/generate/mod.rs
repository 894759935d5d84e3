//! Generate command - produces a single post and prints it to stdout

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::api::types::GENERATION_FAILED_MESSAGE;
use crate::config::AppConfig;
use crate::domain::{pick_topic, Topic};
use crate::infrastructure::logging;

/// Arguments for the generate command
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Topic of the post; a random built-in topic is used when omitted
    #[arg(long)]
    pub tema: Option<String>,
}

impl GenerateArgs {
    fn topic(&self) -> Topic {
        match &self.tema {
            Some(tema) => Topic::new(tema.clone()),
            None => pick_topic(&mut rand::thread_rng()),
        }
    }
}

/// Generate one post and write it to stdout
pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    let post_generator = crate::create_post_generator(&config.gemini)?;
    let topic = args.topic();
    info!(topic = %topic, "Generating post");

    let content = post_generator
        .generate_post(&topic)
        .await
        .context(GENERATION_FAILED_MESSAGE)?;

    println!("{}", content);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::MARKETING_TOPICS;

    #[test]
    fn test_explicit_topic_is_used() {
        let args = GenerateArgs {
            tema: Some("Tráfego pago".to_string()),
        };
        assert_eq!(args.topic().as_str(), "Tráfego pago");
    }

    #[test]
    fn test_missing_topic_picks_builtin() {
        let args = GenerateArgs { tema: None };
        assert!(MARKETING_TOPICS.contains(&args.topic().as_str()));
    }
}

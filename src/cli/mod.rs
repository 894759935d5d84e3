//! CLI module for the social post generator
//!
//! - `serve`: HTTP API plus the daily post job (default)
//! - `generate`: one post printed to stdout

pub mod generate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Social Post Generator - Instagram marketing posts with Gemini
#[derive(Parser)]
#[command(name = "social-post-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API and the daily post job (default)
    Serve,

    /// Generate a single post and print it
    Generate(generate::GenerateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["social-post-generator"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_with_topic() {
        let cli =
            Cli::try_parse_from(["social-post-generator", "generate", "--tema", "SEO"]).unwrap();

        match cli.command {
            Some(Command::Generate(args)) => assert_eq!(args.tema.as_deref(), Some("SEO")),
            _ => panic!("expected generate command"),
        }
    }
}

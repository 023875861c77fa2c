use anyhow::Result;
use clap::{Parser, Subcommand};

use venture_client::EvaluatorClient;
use venture_common::EvaluatorConfig;
use venture_protocol::{EvaluateRequest, Evaluation};

#[derive(Parser)]
#[command(name = "venture")]
#[command(about = "Evaluate a business idea for a location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Override the evaluation endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive evaluation form
    Interactive,
    /// Evaluate once and print the assessment
    Evaluate {
        /// The business idea to evaluate
        idea: String,
        /// Where the business would operate
        location: String,
        /// Print the raw assessment as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    let mut config = EvaluatorConfig::load().await?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    match cli.command {
        Some(Commands::Evaluate {
            idea,
            location,
            json,
        }) => {
            evaluate_once(config, idea, location, json).await?;
        }
        Some(Commands::Interactive) | None => {
            venture_tui::run_interactive(config).await?;
        }
    }

    Ok(())
}

async fn evaluate_once(
    config: EvaluatorConfig,
    idea: String,
    location: String,
    json: bool,
) -> Result<()> {
    let client = EvaluatorClient::new(config.endpoint);
    let request = EvaluateRequest {
        business_idea: idea,
        location,
    };
    let evaluation = client.evaluate(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print_assessment(&evaluation, &request);
    }
    Ok(())
}

fn print_assessment(evaluation: &Evaluation, submitted: &EvaluateRequest) {
    println!("Assessment: {}", evaluation.rating);
    println!();
    println!("{}", evaluation.explanation);

    if let Some(corrected) = evaluation.location_correction(submitted) {
        println!();
        println!("Location corrected to: {corrected}");
    }
    if let Some(corrected) = evaluation.business_idea_correction(submitted) {
        println!("Business idea corrected to: {corrected}");
    }

    if !evaluation.competitors.is_empty() {
        println!();
        println!("Nearby competitors:");
        for competitor in &evaluation.competitors {
            println!(
                "  - {} - rating {} ({} reviews) - {}",
                competitor.name,
                competitor.rating,
                competitor.user_ratings_total,
                competitor.vicinity
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_subcommand_parses() {
        let cli = Cli::parse_from([
            "venture",
            "--endpoint",
            "http://10.0.0.5:9000/evaluate",
            "evaluate",
            "bakery",
            "Porto",
            "--json",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.5:9000/evaluate"));
        match cli.command {
            Some(Commands::Evaluate {
                idea,
                location,
                json,
            }) => {
                assert_eq!(idea, "bakery");
                assert_eq!(location, "Porto");
                assert!(json);
            }
            _ => panic!("expected the evaluate subcommand"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_interactive() {
        let cli = Cli::parse_from(["venture"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }
}

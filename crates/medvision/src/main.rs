//! MedVision CLI - medical image analysis backed by a hosted vision model.
//!
//! Upload a medical image, send it to Gemini together with a fixed analysis
//! prompt, and read the model's report. Nothing is stored.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (upload, preview, generate)
//! medvision
//!
//! # One-shot analysis
//! medvision analyze xray.jpg
//!
//! # View configuration
//! medvision config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// MedVision - medical image analysis backed by a hosted vision model.
#[derive(Parser, Debug)]
#[command(name = "medvision")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Start the interactive session when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single image and print the report
    Analyze(cli::analyze::AnalyzeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment take precedence over .env entries.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match medvision_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `medvision config path`."
            );
            medvision_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("MedVision v{}", medvision_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        Some(Commands::Analyze(args)) => {
            let Ok(assistant) = cli::startup(&config) else {
                std::process::exit(1);
            };
            cli::analyze::execute(args, &config, &assistant).await
        }
        None => {
            let Ok(assistant) = cli::startup(&config) else {
                std::process::exit(1);
            };
            cli::interactive::run(&config, &assistant).await
        }
    }
}

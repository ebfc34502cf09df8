//! Chronicle CLI binary.
//!
//! This binary provides command-line access to the posting workflow:
//! - Run the daily schedule (`start`)
//! - Generate a preview or run a full approval pass (`generate`, `post`)
//! - Inspect progress, history, and the curriculum

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        handle_curriculum, handle_generate, handle_history, handle_post, handle_status,
        run_interactive, run_scheduled, Cli, Commands,
    };

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Some(Commands::Start) => run_scheduled(&cli.config).await?,
        Some(Commands::Generate) => handle_generate(&cli.config).await?,
        Some(Commands::Post) => handle_post(&cli.config).await?,
        Some(Commands::Status) => handle_status(&cli.config).await?,
        Some(Commands::History { count }) => handle_history(&cli.config, count).await?,
        Some(Commands::Curriculum) => handle_curriculum(&cli.config).await?,
        None => run_interactive(&cli.config).await?,
    }

    Ok(())
}

use std::sync::OnceLock;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "idealot-cli", version, about = "Idealot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Card operations
    Card {
        #[command(subcommand)]
        action: commands::card::CardAction,
    },
    /// Board snapshot and search
    Board {
        #[command(subcommand)]
        action: commands::board::BoardAction,
    },
    /// Drift simulation control
    Drift {
        #[command(subcommand)]
        action: commands::drift::DriftAction,
    },
    /// Review cards older than two weeks
    Review {
        #[command(subcommand)]
        action: commands::review::ReviewAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

static LOGGER: OnceLock<flexi_logger::LoggerHandle> = OnceLock::new();

/// File-based logging under the data directory. Diagnostics only; a
/// failure to set up logging never blocks the CLI.
fn init_logging() {
    let Ok(dir) = idealot_core::data_dir() else {
        return;
    };
    let spec = std::env::var("IDEALOT_LOG").unwrap_or_else(|_| "info".to_string());
    let started = flexi_logger::Logger::try_with_str(&spec).and_then(|logger| {
        logger
            .log_to_file(
                flexi_logger::FileSpec::default()
                    .directory(dir.join("logs"))
                    .basename("idealot"),
            )
            .append()
            .start()
    });
    if let Ok(handle) = started {
        let _ = LOGGER.set(handle);
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Card { action } => commands::card::run(action),
        Commands::Board { action } => commands::board::run(action),
        Commands::Drift { action } => commands::drift::run(action),
        Commands::Review { action } => commands::review::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

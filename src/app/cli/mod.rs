//! CLI Adapter.

mod generate;
mod keys;

use clap::{Parser, Subcommand};

use crate::app::api::{self, Action, ClientMode, OutputFormat};
use crate::app::logging;
use crate::app::output::render_status;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "marketinsight")]
#[command(version)]
#[command(
    about = "Affiliate product research and ad copy generation with LLM providers",
    long_about = None
)]
struct Cli {
    /// Use canned provider responses instead of network calls
    #[arg(long, global = true)]
    mock: bool,
    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show key readiness and available modules
    #[clap(visible_alias = "st")]
    Status,
    /// Manage provider API keys
    #[clap(visible_alias = "k")]
    Keys {
        #[command(subcommand)]
        command: keys::KeysCommands,
    },
    /// Detect winning affiliate products
    #[clap(visible_alias = "p")]
    Products(generate::ProductArgs),
    /// Generate ad and email copy
    #[clap(visible_alias = "c")]
    Copy(generate::CopyArgs),
}

impl Commands {
    fn action(&self) -> Option<Action> {
        match self {
            Commands::Status => None,
            Commands::Keys { command } => command.action(),
            Commands::Products(_) => Some(Action::DetectProducts),
            Commands::Copy(_) => Some(Action::GenerateCopy),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mode = if cli.mock { ClientMode::Mock } else { ClientMode::Live };
    let action = cli.command.action();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Status => run_status(cli.format).map(|_| 0),
        Commands::Keys { command } => keys::run_keys(command, mode, cli.format),
        Commands::Products(args) => generate::run_products(args, mode, cli.format).map(|_| 0),
        Commands::Copy(args) => generate::run_copy(args, mode, cli.format).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            match action {
                Some(action) if e.is_provider_failure() => {
                    eprintln!("Error: {}", action.failure_message())
                }
                _ => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
    }
}

fn run_status(format: OutputFormat) -> Result<(), AppError> {
    let report = api::status()?;
    print!("{}", render_status(&report, format)?);
    Ok(())
}

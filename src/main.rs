use session_ledger::{config::Config, ledger::bank::Bank, run::run_with, shell::Shell};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// A teller's ledger: clients, checking accounts, deposits and withdrawals
#[derive(Parser)]
#[command(name = "session_ledger", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Shell,

    /// Replay a CSV of operations and print the resulting accounts
    Replay {
        /// Path to the operations CSV (type,client,amount,name,birthdate,address)
        file: PathBuf,
        /// Print this client's statement instead of the account summary
        #[arg(long)]
        statement: Option<String>,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr, so they never mix with the menu or the CSV output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "session_ledger=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let limits = cli.config.limits().context("invalid configuration")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let mut shell = Shell::new(stdin.lock(), std::io::stdout(), Bank::new(limits));
            shell.run()?;

            let bank = shell.into_bank();
            tracing::info!(
                clients = bank.clients().count(),
                accounts = bank.accounts().count(),
                "session closed"
            );
        }
        Commands::Replay { file, statement } => {
            let input = File::open(&file)
                .with_context(|| format!("could not open {}", file.display()))?;
            run_with(input, std::io::stdout(), limits, statement.as_deref())?;
        }
    }

    Ok(())
}

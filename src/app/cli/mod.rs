//! CLI Adapter.

mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::AppContext;
use crate::app::commands::{PruneOptions, create, prune};
use crate::domain::{AppError, DEFAULT_DEADLINE_DAYS, DEFAULT_TARGET, RunMode, WorkspaceConfig};
use crate::services::{LocalFilesystem, SystemClock};

#[derive(Parser)]
#[command(name = "dayspace")]
#[command(version)]
#[command(about = "Create today's dated workspace directory or prune expired ones", long_about = None)]
struct Cli {
    /// Directory holding the dated workspaces
    #[arg(long, default_value = DEFAULT_TARGET)]
    path: PathBuf,
    /// Remove expired workspaces instead of creating today's
    #[arg(long)]
    remove: bool,
    /// Retention in days: -1 never prunes, 0 prunes all, N prunes workspaces at least N days old
    #[arg(long, default_value_t = DEFAULT_DEADLINE_DAYS, allow_negative_numbers = true)]
    deadline: i64,
    /// List expired workspaces without removing them
    #[arg(long, requires = "remove")]
    dry_run: bool,
    /// Print the outcome as single-line JSON
    #[arg(long)]
    json: bool,
    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = execute(&cli).and_then(|message| emit(&mut io::stdout().lock(), &message));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<String, AppError> {
    let config = if cli.remove {
        WorkspaceConfig::prune(&cli.path, cli.deadline, cli.dry_run)?
    } else {
        WorkspaceConfig::create(&cli.path)?
    };
    tracing::debug!(
        target_dir = %config.target.display(),
        mode = ?config.mode,
        "resolved configuration"
    );

    let ctx = AppContext::new(LocalFilesystem::new(), SystemClock);

    match config.mode {
        RunMode::Prune { retention, dry_run } => {
            let options = PruneOptions { retention, dry_run };
            let outcome = prune::execute(&ctx, &config.target, options)?;
            if cli.json { output::to_json_line(&outcome) } else { Ok(output::render_prune(&outcome)) }
        }
        RunMode::Create => {
            let outcome = create::execute(&ctx, &config.target)?;
            if cli.json { output::to_json_line(&outcome) } else { Ok(output::render_create(&outcome)) }
        }
    }
}

/// Write the final message, surfacing a closed stdout as an error.
fn emit<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    writeln!(out, "{}", message)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::Output(format!("Failed to write to stdout: {}", e)))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! VSIX build pipeline CLI
//!
//! Turns extension descriptor files into build artifacts: generated
//! constant tables and derived manifests with injected content entries.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::InjectArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        match e.code() {
            Some(code) => eprintln!("{} {}: {}", "error".red().bold(), code, e),
            None => eprintln!("{}: {}", "error".red().bold(), e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| error::CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} VSIX build pipeline", "vsixgen".green().bold());
            println!();
            println!("Run {} for available commands.", "vsixgen --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Codegen {
            manifest,
            vsct,
            out,
        } => commands::cmd_codegen(&manifest, &vsct, &out),
        Commands::Inject {
            source,
            dest,
            project_templates,
            item_templates,
            project_templates_path,
            item_templates_path,
            json,
        } => commands::cmd_inject(InjectArgs {
            source,
            dest,
            project_templates,
            item_templates,
            project_templates_path,
            item_templates_path,
            json,
        }),
    }
}

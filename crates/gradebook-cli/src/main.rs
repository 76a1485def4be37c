//! gradebook CLI — an in-memory student grade tracker for the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod controller;
mod render;
mod shell;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Record students and grades, and report average, highest and lowest"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Replay a file of session commands
    Run {
        /// Script with one command per line
        #[arg(long)]
        script: PathBuf,

        /// Exit code 1 if any command was rejected
        #[arg(long)]
        fail_on_error: bool,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::execute(cli.config),
        Commands::Run {
            script,
            fail_on_error,
        } => commands::run::execute(script, fail_on_error, cli.config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

mod completions;
mod new;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use new::NewCommand;

use crate::error::Error;

/// Extension trait for exiting on user errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, Error> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "blocsmith")]
#[command(version)]
#[command(about = "Scaffold Flutter Bloc and Cubit classes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Bloc or Cubit with its state (and event) files
    New(NewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

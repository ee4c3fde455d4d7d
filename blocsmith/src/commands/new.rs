use std::path::PathBuf;

use blocsmith_codegen::GenerationMode;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, scaffold::ScaffoldOptions},
    prompt::TerminalPrompter,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Base folder, as a path or file:// URI (asked for when omitted)
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Template to generate: bloc or cubit (asked for when omitted)
    #[arg(short, long)]
    pub mode: Option<GenerationMode>,

    /// Class name, e.g. OrderSummary (asked for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Put the files in a folder named after the class
    #[arg(long, conflicts_with = "no_subfolder")]
    pub subfolder: bool,

    /// Write the files directly into the base folder
    #[arg(long)]
    pub no_subfolder: bool,

    /// Workspace folder for the folder picker (defaults to the current directory)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = match &self.workspace {
            Some(dir) => Some(dir.clone()),
            None => std::env::current_dir().ok(),
        };

        let opts = ScaffoldOptions {
            dir: self.dir.as_deref(),
            workspace: workspace.as_deref(),
            mode: self.mode,
            name: self.name.as_deref(),
            subfolder: self.subfolder_choice(),
            dry_run: self.dry_run,
        };

        let mut prompter = TerminalPrompter::new();
        if let Some(report) = ops::scaffold(opts, &mut prompter).unwrap_or_exit() {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }

    /// `Some` when one of the subfolder flags was given.
    pub fn subfolder_choice(&self) -> Option<bool> {
        match (self.subfolder, self.no_subfolder) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

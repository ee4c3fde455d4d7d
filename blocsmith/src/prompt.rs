//! Interactive prompts.
//!
//! Every question returns `Ok(None)` when the user backs out (Esc or `q`),
//! which the caller treats as cancellation of the whole command.

use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use blocsmith_codegen::GenerationMode;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::error::Error;

/// Source of answers for the `new` command.
pub trait Prompter {
    /// Whether questions can be asked at all.
    fn is_interactive(&self) -> bool;

    /// Pick a folder, starting from `root`.
    fn pick_folder(&mut self, root: &Path) -> Result<Option<PathBuf>, Error>;

    /// Choose between Cubit and Bloc.
    fn select_mode(&mut self) -> Result<Option<GenerationMode>, Error>;

    /// Enter the class name. Empty answers are rejected by the prompt.
    fn class_name(&mut self) -> Result<Option<String>, Error>;

    /// Whether to put the files in a folder named after the class.
    fn create_subfolder(&mut self) -> Result<Option<bool>, Error>;
}

/// Prompts on the controlling terminal via dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }

    fn pick_folder(&mut self, root: &Path) -> Result<Option<PathBuf>, Error> {
        let mut folders = vec![root.to_path_buf()];
        folders.extend(subfolders(root).map_err(Error::Prompt)?);

        let labels: Vec<String> = folders
            .iter()
            .map(|dir| match dir.strip_prefix(root) {
                Ok(rel) if rel.as_os_str().is_empty() => format!(". ({})", root.display()),
                Ok(rel) => rel.display().to_string(),
                Err(_) => dir.display().to_string(),
            })
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select folder")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|i| folders.swap_remove(i)))
    }

    fn select_mode(&mut self) -> Result<Option<GenerationMode>, Error> {
        let modes = [GenerationMode::Cubit, GenerationMode::Bloc];
        let labels: Vec<&str> = modes.iter().map(|m| m.keyword()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select template")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|i| modes[i]))
    }

    fn class_name(&mut self) -> Result<Option<String>, Error> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Enter the class name")
            .validate_with(|value: &String| -> Result<(), &str> {
                if value.is_empty() {
                    Err("Class name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(Some(name))
    }

    fn create_subfolder(&mut self) -> Result<Option<bool>, Error> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Do you want to create a new folder for the files?")
            .items(&["Yes", "No"])
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|i| i == 0))
    }
}

/// Visible subdirectories of `root`, sorted by name.
fn subfolders(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

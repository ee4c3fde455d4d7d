//! Scaffold operation - ask for whatever is missing, then write the files.

use std::path::Path;

use blocsmith_codegen::{GenerationMode, Generator};

use crate::{
    error::Error,
    prompt::Prompter,
    reports::{ScaffoldReport, ScaffoldResult},
    resolve::{folder_sources, resolve_folder},
};

/// Options for the scaffold operation.
///
/// `None` fields are asked for interactively.
#[derive(Debug, Default)]
pub struct ScaffoldOptions<'a> {
    /// Base folder, as a path or `file://` URI.
    pub dir: Option<&'a str>,
    /// Workspace root used by the folder picker and as the last fallback.
    pub workspace: Option<&'a Path>,
    /// Bloc or Cubit.
    pub mode: Option<GenerationMode>,
    /// Raw class name.
    pub name: Option<&'a str>,
    /// Whether to nest the files in a folder named after the class.
    pub subfolder: Option<bool>,
    /// Preview without writing.
    pub dry_run: bool,
}

/// Execute the scaffold operation.
///
/// Questions are asked in order: folder, mode, class name, subfolder.
/// Returns `Ok(None)` when the user cancels a question; nothing is written
/// in that case.
pub fn scaffold(
    opts: ScaffoldOptions<'_>,
    prompter: &mut dyn Prompter,
) -> Result<Option<ScaffoldReport>, Error> {
    match run(opts, prompter) {
        Ok(report) => Ok(Some(report)),
        Err(Error::Cancelled) => {
            tracing::debug!("scaffold cancelled");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn run(opts: ScaffoldOptions<'_>, prompter: &mut dyn Prompter) -> Result<ScaffoldReport, Error> {
    let sources = folder_sources(opts.dir, opts.workspace);
    let base_dir = resolve_folder(&sources, prompter)?;

    let mode = answer(opts.mode, || prompter.select_mode())?;
    let name = answer(opts.name.map(str::to_string), || prompter.class_name())?;
    if name.is_empty() {
        return Err(Error::EmptyClassName);
    }
    let subfolder = answer(opts.subfolder, || prompter.create_subfolder())?;

    let generator = Generator::new(mode, &name, &base_dir, subfolder);
    let result = if opts.dry_run {
        ScaffoldResult::Preview(generator.preview())
    } else {
        ScaffoldResult::Written(generator.generate()?.files)
    };

    Ok(ScaffoldReport {
        class_name: generator.name().pascal().to_string(),
        mode,
        target_dir: generator.target_dir().to_path_buf(),
        result,
    })
}

/// Use the given value, or ask; a cancelled question aborts the operation.
fn answer<T>(
    given: Option<T>,
    ask: impl FnOnce() -> Result<Option<T>, Error>,
) -> Result<T, Error> {
    match given {
        Some(value) => Ok(value),
        None => ask()?.ok_or(Error::Cancelled),
    }
}

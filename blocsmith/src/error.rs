use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced to the user by the `new` command.
///
/// All of them come from folder resolution or prompts; planning and
/// rendering cannot fail.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no folder selected")]
    #[diagnostic(
        code(blocsmith::no_folder),
        help("pass --dir <DIR> or run the command from inside a project folder")
    )]
    NoFolderSelected,

    #[error("'{uri}' is not a local folder")]
    #[diagnostic(
        code(blocsmith::invalid_scheme),
        help("'{scheme}' resources are not supported, use a plain path or a file:// URI")
    )]
    InvalidFolderScheme { uri: String, scheme: String },

    #[error("'{}' is not a folder", path.display())]
    #[diagnostic(
        code(blocsmith::not_a_directory),
        help("select an existing folder and try again")
    )]
    NotADirectory { path: PathBuf },

    #[error("class name cannot be empty")]
    #[diagnostic(code(blocsmith::empty_name))]
    EmptyClassName,

    #[error("operation cancelled")]
    Cancelled,

    #[error("failed to read prompt answer")]
    #[diagnostic(
        code(blocsmith::prompt),
        help("pass --dir, --mode, --name and --subfolder/--no-subfolder to run without a terminal")
    )]
    Prompt(#[source] std::io::Error),

    #[error("failed to write files")]
    #[diagnostic(code(blocsmith::write))]
    Write(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(std::io::Error::other(err))
    }
}

impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Write(err.into())
    }
}

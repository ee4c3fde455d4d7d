//! Target folder resolution.
//!
//! Sources are tried in order until one produces a folder. The result must
//! be an existing directory.

use std::path::{Path, PathBuf};

use url::Url;

use crate::{error::Error, prompt::Prompter};

/// One way of finding the base folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSource {
    /// Folder given on the command line, as a path or a `file://` URI
    Argument(String),
    /// Interactive folder picker rooted at the workspace
    Picker(PathBuf),
    /// The workspace folder itself
    Workspace(PathBuf),
}

impl FolderSource {
    fn resolve(&self, prompter: &mut dyn Prompter) -> Result<Option<PathBuf>, Error> {
        match self {
            FolderSource::Argument(arg) => parse_folder_arg(arg).map(Some),
            FolderSource::Picker(root) => {
                if !prompter.is_interactive() {
                    return Ok(None);
                }
                prompter
                    .pick_folder(root)?
                    .map(Some)
                    .ok_or(Error::NoFolderSelected)
            }
            FolderSource::Workspace(dir) => Ok(Some(dir.clone())),
        }
    }
}

/// Build the ordered source list from an optional `--dir` and the workspace.
pub fn folder_sources(dir: Option<&str>, workspace: Option<&Path>) -> Vec<FolderSource> {
    let mut sources = Vec::new();
    if let Some(dir) = dir {
        sources.push(FolderSource::Argument(dir.to_string()));
    }
    if let Some(workspace) = workspace {
        sources.push(FolderSource::Picker(workspace.to_path_buf()));
        sources.push(FolderSource::Workspace(workspace.to_path_buf()));
    }
    sources
}

/// Try each source in order and validate the first folder found.
pub fn resolve_folder(
    sources: &[FolderSource],
    prompter: &mut dyn Prompter,
) -> Result<PathBuf, Error> {
    for source in sources {
        if let Some(path) = source.resolve(prompter)? {
            tracing::debug!(?source, path = %path.display(), "resolved folder");
            return ensure_directory(path);
        }
    }
    Err(Error::NoFolderSelected)
}

/// Accept a plain path or a `file://` URI; reject other schemes.
fn parse_folder_arg(arg: &str) -> Result<PathBuf, Error> {
    match Url::parse(arg) {
        // Single-letter schemes are Windows drive letters, not URIs.
        Ok(url) if url.scheme().len() > 1 => {
            if url.scheme() != "file" {
                return Err(Error::InvalidFolderScheme {
                    uri: arg.to_string(),
                    scheme: url.scheme().to_string(),
                });
            }
            url.to_file_path().map_err(|()| Error::NotADirectory {
                path: PathBuf::from(arg),
            })
        }
        _ => Ok(PathBuf::from(arg)),
    }
}

fn ensure_directory(path: PathBuf) -> Result<PathBuf, Error> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::NotADirectory { path })
    }
}

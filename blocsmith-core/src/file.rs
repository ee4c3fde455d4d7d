use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path inside the target directory
    fn path(&self, dir: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content
    fn write(&self, dir: &Path) -> Result<WriteResult> {
        write_file(&self.path(dir), &self.render())
    }
}

/// Create `dir` and its parents unless it already exists.
///
/// Returns `true` when the directory had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(true)
}

fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    let existed = path.exists();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(if existed {
        WriteResult::Overwritten
    } else {
        WriteResult::Created
    })
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// File existed and its content was replaced
    Overwritten,
}

/// A file with its final path and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, overwriting whatever is there
    pub fn write(&self) -> Result<WriteResult> {
        write_file(&self.path, &self.content)
    }
}

//! Plan, preview and write one scaffold.

use std::path::{Path, PathBuf};

use blocsmith_core::{ClassName, File, GeneratedFile, WriteResult, ensure_dir};
use eyre::Result;

use crate::{GenerationMode, Layout};

/// Generator for a single Bloc or Cubit scaffold.
pub struct Generator {
    mode: GenerationMode,
    name: ClassName,
    layout: Layout,
}

impl Generator {
    /// Normalize `raw_name` and plan the layout under `base_dir`.
    pub fn new(
        mode: GenerationMode,
        raw_name: &str,
        base_dir: impl AsRef<Path>,
        create_subfolder: bool,
    ) -> Self {
        let name = ClassName::new(raw_name);
        let layout = Layout::resolve(base_dir.as_ref(), name.snake(), create_subfolder);

        tracing::debug!(
            raw = name.raw(),
            snake = name.snake(),
            pascal = name.pascal(),
            target_dir = %layout.target_dir.display(),
            "planned scaffold"
        );

        Self { mode, name, layout }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Directory the files are written into.
    pub fn target_dir(&self) -> &Path {
        &self.layout.target_dir
    }

    fn templates(&self) -> Vec<Box<dyn GeneratedFile>> {
        self.mode
            .templates()
            .iter()
            .map(|template| template.for_name(&self.name))
            .collect()
    }

    /// Render every file with its absolute path, in write order.
    pub fn plan(&self) -> Vec<File> {
        self.templates()
            .iter()
            .map(|file| File::new(file.path(self.target_dir()), file.render()))
            .collect()
    }

    /// Render every file with a path relative to the target directory.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.templates()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Create the target directory if missing and write all files.
    pub fn generate(&self) -> Result<GenerateResult> {
        let created_dir = ensure_dir(self.target_dir())?;

        let mut written = Vec::new();
        for file in self.plan() {
            let result = file.write()?;
            tracing::debug!(path = %file.path().display(), ?result, "wrote file");
            written.push(WrittenFile {
                path: file.path().to_path_buf(),
                result,
            });
        }

        Ok(GenerateResult {
            target_dir: self.target_dir().to_path_buf(),
            created_dir,
            files: written,
        })
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the target directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of writing a scaffold
#[derive(Debug)]
pub struct GenerateResult {
    /// Directory the files were written into
    pub target_dir: PathBuf,
    /// Whether the target directory had to be created
    pub created_dir: bool,
    /// Written files in write order
    pub files: Vec<WrittenFile>,
}

/// A file written to disk
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

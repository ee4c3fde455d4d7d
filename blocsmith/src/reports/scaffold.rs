//! New-scaffold report data structures.

use std::path::PathBuf;

use blocsmith_codegen::{GenerationMode, PreviewFile, WrittenFile};
use blocsmith_core::WriteResult;

use super::output::{Output, Report};

/// Report data from scaffolding one class.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Type-name prefix of the generated classes.
    pub class_name: String,
    /// Which template set was used.
    pub mode: GenerationMode,
    /// Directory the files went into.
    pub target_dir: PathBuf,
    /// Files written, or files that would be written.
    pub result: ScaffoldResult,
}

/// Written files or a dry-run preview.
#[derive(Debug)]
pub enum ScaffoldResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            ScaffoldResult::Written(files) => self.render_written(out, files),
            ScaffoldResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ScaffoldReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        out.success(&format!(
            "Class {} created successfully in {}.",
            self.class_name,
            self.target_dir.display()
        ));

        for file in files {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.path.display().to_string());
            match file.result {
                WriteResult::Created => out.added_item(&name),
                WriteResult::Overwritten => out.changed_item(&name),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} {} files would be generated in {}",
            files.len(),
            self.mode,
            self.target_dir.display()
        ));
    }
}

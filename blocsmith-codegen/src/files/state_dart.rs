use std::path::{Path, PathBuf};

use blocsmith_core::{ClassName, GeneratedFile};

use super::{DartFile, Template, file_name};

/// `<snake>_state.dart`, shared by both modes.
///
/// `clone()` returns a fresh default instance until fields are added.
pub struct StateDart {
    snake: String,
    pascal: String,
}

impl StateDart {
    pub fn new(name: &ClassName) -> Self {
        Self {
            snake: name.snake().to_string(),
            pascal: name.pascal().to_string(),
        }
    }
}

impl GeneratedFile for StateDart {
    fn path(&self, dir: &Path) -> PathBuf {
        dir.join(file_name(&self.snake, Template::State))
    }

    fn render(&self) -> String {
        let p = &self.pascal;
        DartFile::new()
            .declaration(format!(
                "class {p}State {{
  {p}State clone() {{
    return {p}State();
  }}
}}"
            ))
            .render()
    }
}

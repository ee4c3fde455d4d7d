use std::path::{Path, PathBuf};

use blocsmith_core::{ClassName, GeneratedFile};

use super::{DartFile, Template, file_name};

/// `<snake>_event.dart`: abstract event base plus `InitEvent`.
pub struct EventDart {
    snake: String,
    pascal: String,
}

impl EventDart {
    pub fn new(name: &ClassName) -> Self {
        Self {
            snake: name.snake().to_string(),
            pascal: name.pascal().to_string(),
        }
    }
}

impl GeneratedFile for EventDart {
    fn path(&self, dir: &Path) -> PathBuf {
        dir.join(file_name(&self.snake, Template::Event))
    }

    fn render(&self) -> String {
        DartFile::new()
            .declaration(format!("abstract class {}Event {{}}", self.pascal))
            .declaration(format!("class InitEvent extends {}Event {{}}", self.pascal))
            .render()
    }
}

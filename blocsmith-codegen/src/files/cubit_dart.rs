use std::path::{Path, PathBuf};

use blocsmith_core::{ClassName, GeneratedFile};

use super::{DartFile, Template, file_name};
use crate::paths::BLOC_PACKAGE;

/// `<snake>_cubit.dart`: the direct-mutation state holder.
pub struct CubitDart {
    snake: String,
    pascal: String,
}

impl CubitDart {
    pub fn new(name: &ClassName) -> Self {
        Self {
            snake: name.snake().to_string(),
            pascal: name.pascal().to_string(),
        }
    }
}

impl GeneratedFile for CubitDart {
    fn path(&self, dir: &Path) -> PathBuf {
        dir.join(file_name(&self.snake, Template::Cubit))
    }

    fn render(&self) -> String {
        let p = &self.pascal;
        DartFile::new()
            .package_import(BLOC_PACKAGE)
            .relative_import(file_name(&self.snake.to_lowercase(), Template::State))
            .declaration(format!(
                "class {p}Cubit extends Cubit<{p}State> {{
  {p}Cubit() : super({p}State());
}}"
            ))
            .render()
    }
}

use std::path::{Path, PathBuf};

use blocsmith_core::{ClassName, GeneratedFile};

use super::{DartFile, Template, file_name};
use crate::paths::BLOC_PACKAGE;

/// `<snake>_bloc.dart`: the event-driven state holder.
pub struct BlocDart {
    snake: String,
    pascal: String,
}

impl BlocDart {
    pub fn new(name: &ClassName) -> Self {
        Self {
            snake: name.snake().to_string(),
            pascal: name.pascal().to_string(),
        }
    }

    fn class_decl(&self) -> String {
        let p = &self.pascal;
        format!(
            "class {p}Bloc extends Bloc<{p}Event, {p}State> {{
  {p}Bloc() : super({p}State()) {{
    on<InitEvent>(_init);
  }}

  void _init(InitEvent event, Emitter<{p}State> emit) async {{
    emit(state.clone());
  }}
}}"
        )
    }
}

impl GeneratedFile for BlocDart {
    fn path(&self, dir: &Path) -> PathBuf {
        dir.join(file_name(&self.snake, Template::Bloc))
    }

    fn render(&self) -> String {
        let stem = self.snake.to_lowercase();
        DartFile::new()
            .package_import(BLOC_PACKAGE)
            .relative_import(file_name(&stem, Template::Event))
            .relative_import(file_name(&stem, Template::State))
            .declaration(self.class_decl())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let bloc = BlocDart::new(&ClassName::new("OrderSummary"));
        assert_eq!(
            bloc.path(Path::new("/proj/order_summary")),
            PathBuf::from("/proj/order_summary/order_summary_bloc.dart")
        );
    }

    #[test]
    fn test_render_registers_single_init_handler() {
        let content = BlocDart::new(&ClassName::new("OrderSummary")).render();
        assert!(content.contains("import 'order_summary_event.dart';"));
        assert!(content.contains("import 'order_summary_state.dart';"));
        assert!(content.contains(
            "class OrderSummaryBloc extends Bloc<OrderSummaryEvent, OrderSummaryState>"
        ));
        assert!(content.contains("super(OrderSummaryState())"));
        assert_eq!(content.matches("on<").count(), 1);
        assert!(content.contains("emit(state.clone());"));
    }
}

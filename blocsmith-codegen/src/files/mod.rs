//! Dart file templates.
//!
//! Each template is a [`GeneratedFile`] named `<snake>_<suffix>.dart`.

mod bloc_dart;
mod cubit_dart;
mod dart_file;
mod event_dart;
mod state_dart;

use blocsmith_core::{ClassName, GeneratedFile};

pub use bloc_dart::BlocDart;
pub use cubit_dart::CubitDart;
pub use dart_file::DartFile;
pub use event_dart::EventDart;
pub use state_dart::StateDart;

use crate::paths::FILE_EXTENSION;

/// One of the fixed file templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Bloc,
    Cubit,
    Event,
    State,
}

impl Template {
    /// File name suffix after the snake-case stem.
    pub fn suffix(&self) -> &'static str {
        match self {
            Template::Bloc => "bloc",
            Template::Cubit => "cubit",
            Template::Event => "event",
            Template::State => "state",
        }
    }

    /// Bind the template to a class name.
    pub fn for_name(&self, name: &ClassName) -> Box<dyn GeneratedFile> {
        match self {
            Template::Bloc => Box::new(BlocDart::new(name)),
            Template::Cubit => Box::new(CubitDart::new(name)),
            Template::Event => Box::new(EventDart::new(name)),
            Template::State => Box::new(StateDart::new(name)),
        }
    }
}

/// File name for a template, e.g. `cart_state.dart`.
pub fn file_name(snake: &str, template: Template) -> String {
    format!("{}_{}.{}", snake, template.suffix(), FILE_EXTENSION)
}

//! Dart code generation for blocsmith.
//!
//! Turns a class name, a [`GenerationMode`] and a base directory into the
//! fixed set of Bloc or Cubit source files.
//!
//! # Module Organization
//!
//! - [`files`] - One [`GeneratedFile`](blocsmith_core::GeneratedFile) per template
//! - [`paths`] - Extension and import constants
//! - `layout` - Target directory decision
//! - `generator` - Plan, preview and write

mod generator;
mod layout;
mod mode;

pub mod files;
pub mod paths;

pub use generator::{GenerateResult, Generator, PreviewFile, WrittenFile};
pub use layout::Layout;
pub use mode::GenerationMode;

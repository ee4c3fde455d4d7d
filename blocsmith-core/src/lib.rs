//! Core utilities and types for the blocsmith scaffolder.
//!
//! This crate provides the identifier normalizer and the file
//! primitives shared by the code generator and the CLI.

mod file;
mod naming;

// File operations
pub use file::{File, GeneratedFile, WriteResult, ensure_dir};
// Name normalization
pub use naming::{ClassName, to_pascal_case, to_snake_case};

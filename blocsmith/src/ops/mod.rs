//! Core operations.
//!
//! Business logic for blocsmith commands, separated from CLI argument
//! parsing and output rendering.

pub mod scaffold;

pub use scaffold::scaffold;

//! Path and import constants for generated Dart files.

/// File extension for Dart source files.
pub const FILE_EXTENSION: &str = "dart";

/// Package import shared by bloc and cubit files.
pub const BLOC_PACKAGE: &str = "package:bloc/bloc.dart";

//! Minimal structured Dart file: imports followed by a body.

/// A Dart source file with an import section and a body.
///
/// Package imports come first, then relative imports, separated by a blank
/// line, then the body.
#[derive(Debug, Default)]
pub struct DartFile {
    package_imports: Vec<String>,
    relative_imports: Vec<String>,
    body: Vec<String>,
}

impl DartFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `package:` import.
    pub fn package_import(mut self, uri: impl Into<String>) -> Self {
        self.package_imports.push(uri.into());
        self
    }

    /// Add an import relative to the file's directory.
    pub fn relative_import(mut self, uri: impl Into<String>) -> Self {
        self.relative_imports.push(uri.into());
        self
    }

    /// Add a top-level declaration. Declarations are separated by a blank line.
    pub fn declaration(mut self, code: impl Into<String>) -> Self {
        self.body.push(code.into());
        self
    }

    pub fn render(&self) -> String {
        let sections: Vec<String> = [
            render_imports(&self.package_imports),
            render_imports(&self.relative_imports),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .chain(self.body.iter().map(|decl| decl.trim_end().to_string()))
        .collect();

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

fn render_imports(uris: &[String]) -> String {
    uris.iter()
        .map(|uri| format!("import '{}';", uri))
        .collect::<Vec<_>>()
        .join("\n")
}

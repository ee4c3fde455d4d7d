//! Identifier normalization for generated class and file names.
//!
//! The two conversions are deliberately asymmetric. [`to_snake_case`] splits
//! on lowercase-to-uppercase boundaries, while [`to_pascal_case`] only
//! capitalizes word starts in place and keeps every underscore. Generated
//! files already in the wild depend on both behaviours.

/// Convert a class name to snake_case (e.g., "UserProfile" -> "user_profile").
///
/// An underscore is inserted between an ASCII lowercase letter and a directly
/// following ASCII uppercase letter, then the whole string is lower-cased.
/// Runs of capitals are not split: "myHTTPServer" -> "my_httpserver".
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        result.push(c);
        if c.is_ascii_lowercase() && chars.peek().is_some_and(|next| next.is_ascii_uppercase()) {
            result.push('_');
        }
    }
    result.to_lowercase()
}

/// Capitalize word starts in place (e.g., "create_name" -> "Create_Name").
///
/// Only an ASCII lowercase letter at the start of the string or right after
/// an underscore is touched. Underscores are kept and no other character
/// changes case.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c == '_';
    }
    result
}

/// A class name together with the casing forms the templates need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassName {
    raw: String,
    snake: String,
    pascal: String,
}

impl ClassName {
    /// Normalize a raw, user-supplied class name.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            snake: to_snake_case(&raw),
            pascal: to_pascal_case(&raw),
            raw,
        }
    }

    /// The name as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// File and folder stem, e.g. `order_summary`.
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// Type-name prefix, e.g. `OrderSummary`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }
}

use std::fmt;

use crate::text::template::TemplateError;

#[derive(Debug)]
pub enum ScreenError {
    /// Reading or writing a file failed
    Io { context: String, source: std::io::Error },

    /// YAML parsing failed (form state, preferences, config)
    Yaml { context: String, source: serde_yaml::Error },

    /// JSON serialization failed (report or trace output)
    Json { context: String, source: serde_json::Error },

    /// A loaded document had the wrong shape
    Malformed(String),

    /// Dotted field path was empty or had an empty segment
    InvalidPath(String),

    /// No field on the screen is bound to this path
    UnknownField(String),

    /// Field is shown but the current user may not edit it
    ReadOnly { path: String },

    /// Field is disabled until another field is switched on
    Disabled { path: String, dependency: String },

    /// Input does not match the field's widget kind
    TypeMismatch { path: String, expected: &'static str },

    /// Choice value is not among the field's options
    UnknownOption { path: String, value: String },

    /// Template composition failed in strict mode
    Template { text_id: String, source: TemplateError },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
            ScreenError::Yaml { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            ScreenError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            ScreenError::Malformed(msg) => {
                write!(f, "Malformed document: {}", msg)
            }
            ScreenError::InvalidPath(path) => {
                write!(f, "Invalid field path '{}'", path)
            }
            ScreenError::UnknownField(path) => {
                write!(f, "No field bound to '{}'", path)
            }
            ScreenError::ReadOnly { path } => {
                write!(f, "Field '{}' is read-only", path)
            }
            ScreenError::Disabled { path, dependency } => {
                write!(f, "Field '{}' is disabled while '{}' is off", path, dependency)
            }
            ScreenError::TypeMismatch { path, expected } => {
                write!(f, "Field '{}' expects {}", path, expected)
            }
            ScreenError::UnknownOption { path, value } => {
                write!(f, "'{}' is not an option of '{}'", value, path)
            }
            ScreenError::Template { text_id, source } => {
                write!(f, "Template '{}' failed: {}", text_id, source)
            }
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Io { source, .. } => Some(source),
            ScreenError::Yaml { source, .. } => Some(source),
            ScreenError::Json { source, .. } => Some(source),
            ScreenError::Template { source, .. } => Some(source),
            _ => None,
        }
    }
}

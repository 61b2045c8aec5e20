//! Error types for localization operations

use thiserror::Error;

/// Errors that can occur while loading resources or persisting preferences
///
/// Lookup itself never surfaces these: a failed resolution degrades to the
/// key-echo fallback, and the underlying cause is logged at the boundary
/// where it occurred.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to read a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoad { path: String },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource: {errors:?}")]
    FluentParse { errors: Vec<String> },

    /// Failed to write the persisted language preference
    #[error("Failed to save language preference to {path}")]
    PreferenceSave {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the language preference
    #[error("Failed to serialize language preference: {0}")]
    PreferenceEncode(#[from] toml::ser::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

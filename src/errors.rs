//! Error types for the author index stage.
//!
//! Only two conditions are fatal to a run: the renderer failing and the
//! output file not being written. Both surface through [`PluginError`].
//! Bad author data is reported as an [`IngestionDataError`] and skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed or missing author data met while ingesting an issue.
///
/// Never aborts ingestion; the offending entry is logged and skipped.
#[derive(Debug, Error, PartialEq)]
pub enum IngestionDataError {
    /// The article has no author list at all.
    #[error("article '{article_id}' in issue {issue} has no author list")]
    MissingAuthors {
        /// Issue the article belongs to.
        issue: u32,
        /// Identifier of the skipped article.
        article_id: String,
    },
}

/// The rendering collaborator failed to produce markup.
#[derive(Debug, Error)]
#[error("rendering failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Writing the rendered author list to its destination failed.
#[derive(Debug, Error)]
#[error("unable to write author list to {}: {source}", .path.display())]
pub struct OutputWriteError {
    /// Destination the write was aimed at.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Collator data could not be loaded.
#[derive(Debug, Error)]
#[error("no collation data for locale '{locale}': {reason}")]
pub struct CollationError {
    pub locale: String,
    pub reason: String,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading the configuration file.
    #[error("I/O error reading {}: {error}", .path.display())]
    Io {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },

    /// Error parsing YAML syntax.
    #[error("YAML parse error in {}: {error}", .path.display())]
    Yaml {
        path: PathBuf,
        error: serde_yaml::Error,
    },

    /// The collation locale is not a valid BCP-47 tag.
    #[error("invalid locale '{locale}': {reason}")]
    InvalidLocale { locale: String, reason: String },

    #[error(transparent)]
    Collation(#[from] CollationError),
}

/// An issue file could not be loaded.
#[derive(Debug, Error)]
pub enum IssueLoadError {
    #[error("I/O error reading {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("invalid issue JSON in {}: {error}", .path.display())]
    Json {
        path: PathBuf,
        error: serde_json::Error,
    },
}

/// Fatal errors returned from plugin lifecycle hooks.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Renderer failure, passed through untouched.
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputWriteError),

    /// A lifecycle hook was invoked after publication completed.
    #[error("plugin '{0}' was already finalized")]
    AlreadyFinalized(String),
}

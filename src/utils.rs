//! Utility functions for string manipulation and file system checks.
//!
//! This module provides helper functions used throughout the crate:
//! - Slugification and initials for anchors in the rendered page
//! - File system validation for the output directory

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, instrument};

/// Convert a name or title to an anchor-friendly slug.
///
/// Lowercases the text, removes special characters, and replaces spaces
/// with hyphens. Letters outside ASCII are kept.
///
/// # Examples
///
/// ```
/// use author_index::utils::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Bílý, Jan"), "bílý-jan");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Uppercased first character of a name, or `"#"` for an empty name.
pub fn initial(name: &str) -> String {
    match name.chars().next() {
        None => "#".to_string(),
        Some(f) => f.to_uppercase().collect(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a scratch file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)?;
    let scratch = tempfile::tempfile_in(path)?;
    drop(scratch);
    info!("Output directory is writable");
    Ok(())
}

//! Loading already-processed issues from JSON files.
//!
//! Each file holds one [`Issue`]. Directories contribute every `*.json` file
//! they directly contain. Issues are returned in ascending issue number so
//! the pipeline sees them in publication order regardless of file names.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::errors::IssueLoadError;
use crate::models::Issue;

/// Expand `inputs` into issue files and parse them.
///
/// # Errors
///
/// Fails on the first unreadable path or invalid issue document.
#[instrument(level = "info", skip_all, fields(inputs = inputs.len()))]
pub fn load_issues(inputs: &[PathBuf]) -> Result<Vec<Issue>, IssueLoadError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(json_files_in(input)?);
        } else {
            files.push(input.clone());
        }
    }

    let issues = files
        .iter()
        .map(|path| load_issue(path))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sorted_by_key(|issue| issue.number)
        .collect::<Vec<_>>();

    info!(files = files.len(), issues = issues.len(), "Loaded issues");
    Ok(issues)
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, IssueLoadError> {
    let io_err = |error: std::io::Error| IssueLoadError::Io {
        path: dir.to_path_buf(),
        error,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_issue(path: &Path) -> Result<Issue, IssueLoadError> {
    let raw = fs::read_to_string(path).map_err(|error| IssueLoadError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let issue: Issue = serde_json::from_str(&raw).map_err(|error| IssueLoadError::Json {
        path: path.to_path_buf(),
        error,
    })?;
    debug!(
        path = %path.display(),
        issue = issue.number,
        articles = issue.articles.len(),
        "Parsed issue"
    );
    Ok(issue)
}

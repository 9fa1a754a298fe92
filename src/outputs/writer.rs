//! Writing the rendered author list to disk.
//!
//! The page is first written to a temporary file inside the destination
//! directory and then renamed over the target, so readers see either the
//! previous page or the complete new one.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{error, info, instrument};

use crate::errors::OutputWriteError;

/// File name of the author index page.
pub const AUTHORS_FILE_NAME: &str = "authors.html";

/// Destination for rendered markup.
pub trait OutputWriter {
    /// Replace `file_name` with `contents`, returning the written path.
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, OutputWriteError>;
}

/// Writes files into a single output directory.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    output_dir: PathBuf,
}

impl DirectoryWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl OutputWriter for DirectoryWriter {
    #[instrument(
        level = "info",
        skip(self, contents),
        fields(output_dir = %self.output_dir.display())
    )]
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, OutputWriteError> {
        let path = self.output_dir.join(file_name);
        let fail = |source: std::io::Error| {
            error!(path = %path.display(), error = %source, "Failed writing author list");
            OutputWriteError {
                path: path.clone(),
                source,
            }
        };

        let mut tmp = NamedTempFile::new_in(&self.output_dir).map_err(fail)?;
        tmp.write_all(contents.as_bytes()).map_err(fail)?;
        tmp.flush().map_err(fail)?;
        tmp.persist(&path).map_err(|e| fail(e.error))?;

        info!(path = %path.display(), bytes = contents.len(), "Wrote author list");
        Ok(path)
    }
}

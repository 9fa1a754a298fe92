//! Output generation for the author index page.
//!
//! # Submodules
//!
//! - [`html`]: Renders the ordered author groups to an HTML page
//! - [`writer`]: Writes the rendered page into the output directory
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── authors.html
//! ```

pub mod html;
pub mod writer;

pub use html::{HtmlRenderer, Renderer};
pub use writer::{AUTHORS_FILE_NAME, DirectoryWriter, OutputWriter};

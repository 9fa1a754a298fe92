//! # Author Index
//!
//! A post-processing stage of a publication pipeline that builds one
//! consolidated author index page: every author, the articles they
//! contributed to, ordered by natural-language collation rather than bytes.
//!
//! ## Lifecycle
//!
//! The stage is a [`plugin::PublicationPlugin`] driven by the host:
//! 1. **Issue complete**: author names of every article are sanitized and
//!    accumulated into the [`authors::AuthorIndex`]
//! 2. **Publication complete**: groups are rendered once and written once to
//!    `authors.html`
//!
//! ## Example
//!
//! ```no_run
//! use author_index::config::AuthorIndexConfig;
//! use author_index::pipeline::Pipeline;
//! use author_index::plugin::AuthorListPlugin;
//! use author_index::source::load_issues;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let issues = load_issues(&[PathBuf::from("issues")])?;
//! let plugin = AuthorListPlugin::from_config(&AuthorIndexConfig::default(), "site/")?;
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.register(Box::new(plugin));
//! pipeline.run(&issues)?;
//! # Ok(())
//! # }
//! ```

pub mod authors;
pub mod collation;
pub mod config;
pub mod errors;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod plugin;
pub mod sanitize;
pub mod source;
pub mod utils;

//! Data models for issues, articles and author groups.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`Issue`]: A published batch of articles, as handed over by the pipeline
//! - [`Article`]: A single piece of content and its raw author names
//! - [`AuthorKey`]: The sanitized author name used for grouping and ordering
//! - [`AuthorGroup`]: One author and every article they contributed to
//!
//! Issues and articles are owned by the upstream pipeline. The author index
//! only ever borrows them, so an [`AuthorGroup`] carries `&'a Article`
//! references that live as long as the issues themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A published batch of articles processed together by the pipeline.
///
/// # Fields
///
/// * `number` - The issue number, used to order issues within a run
/// * `published` - Optional publication date in `YYYY-MM-DD` format
/// * `articles` - The finalized articles of this issue, in reading order
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Issue {
    /// The issue number.
    pub number: u32,
    /// The date the issue was published, if known.
    #[serde(default)]
    pub published: Option<NaiveDate>,
    /// Articles in the order they appear in the issue.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A single article with its identifier, title and contributing authors.
///
/// The author list keeps the order in which the names were authored. It may
/// be missing altogether when the upstream metadata had no author field;
/// such articles contribute nothing to the index.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Article {
    /// Stable identifier of the article within the publication.
    pub id: String,
    /// The article title/headline.
    pub title: String,
    /// Raw author names exactly as they appear in the article metadata.
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    /// Link target for the article page. Defaults to `<id>.html` when absent.
    #[serde(default)]
    pub href: Option<String>,
}

impl Article {
    /// Link target of the article page, relative to the author index.
    ///
    /// For example: an article with id `"12/editorial"` and no explicit
    /// `href` links to `"12%2Feditorial.html"`.
    pub fn link(&self) -> String {
        match &self.href {
            Some(href) => href.clone(),
            None => format!("{}.html", urlencoding::encode(&self.id)),
        }
    }
}

/// A sanitized author name used as the grouping key of the index.
///
/// Keys are produced by [`crate::sanitize::Sanitizer::sanitize`]; the empty
/// string is a valid key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorKey(String);

impl AuthorKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One author and the articles they contributed to, in ingestion order.
///
/// An article appears once per occurrence of the author in its author list,
/// so a name listed twice on the same article yields two entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorGroup<'a> {
    /// The displayed author name (surface form of the first occurrence).
    pub key: AuthorKey,
    /// Articles attributed to this author.
    pub articles: Vec<&'a Article>,
}

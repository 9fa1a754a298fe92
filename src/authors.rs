//! The author index: accumulation of (author → article) pairs.
//!
//! Groups are kept sorted by the configured [`KeyComparator`] at all times,
//! so ingesting is a binary search plus insert and finalizing is a plain walk
//! over the groups.
//!
//! # Grouping
//!
//! | [`Grouping`] | same group when | order of collation-equal keys |
//! |---|---|---|
//! | `Collation` | names compare equal under the collator | n/a, they merge |
//! | `Exact` | names are identical strings | codepoint tie-break |
//!
//! In `Collation` mode the group is shown under the surface form that was
//! ingested first, e.g. `Adam` followed later by `ADAM` yields one `Adam`
//! group holding both articles.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::collation::KeyComparator;
use crate::errors::IngestionDataError;
use crate::models::{Article, AuthorGroup, AuthorKey, Issue};
use crate::sanitize::Sanitizer;

/// How author keys are matched into groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Keys equal under the collator share one group.
    #[default]
    Collation,
    /// Only identical keys share a group.
    Exact,
}

/// Counters collected while ingesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub issues: usize,
    pub pairs: usize,
    pub skipped_articles: usize,
}

/// Accumulates author groups across all issues of a run.
pub struct AuthorIndex<'a, C> {
    sanitizer: Sanitizer,
    comparator: C,
    grouping: Grouping,
    groups: Vec<AuthorGroup<'a>>,
    stats: IndexStats,
}

impl<'a, C: KeyComparator> AuthorIndex<'a, C> {
    pub fn new(sanitizer: Sanitizer, comparator: C, grouping: Grouping) -> Self {
        Self {
            sanitizer,
            comparator,
            grouping,
            groups: Vec::new(),
            stats: IndexStats::default(),
        }
    }

    /// Add every (author, article) pair of `issue` to the index.
    ///
    /// Articles without an author list are skipped with a warning. Prior
    /// entries are never reordered or removed.
    #[instrument(level = "info", skip_all, fields(issue = issue.number))]
    pub fn ingest(&mut self, issue: &'a Issue) {
        let mut pairs = 0usize;

        for article in &issue.articles {
            let Some(authors) = article.authors.as_ref() else {
                let err = IngestionDataError::MissingAuthors {
                    issue: issue.number,
                    article_id: article.id.clone(),
                };
                warn!(error = %err, "Skipping article");
                self.stats.skipped_articles += 1;
                continue;
            };

            for raw in authors {
                let key = self.sanitizer.sanitize(raw);
                debug!(article = %article.id, raw = %raw, %key, "Indexing author");
                self.insert(key, article);
                pairs += 1;
            }
        }

        self.stats.issues += 1;
        self.stats.pairs += pairs;
        info!(
            articles = issue.articles.len(),
            pairs,
            authors = self.groups.len(),
            "Indexed issue authors"
        );
    }

    fn insert(&mut self, key: AuthorKey, article: &'a Article) {
        let position = self
            .groups
            .binary_search_by(|group| self.order(group.key.as_str(), key.as_str()));

        match position {
            Ok(i) => self.groups[i].articles.push(article),
            Err(i) => self.groups.insert(
                i,
                AuthorGroup {
                    key,
                    articles: vec![article],
                },
            ),
        }
    }

    fn order(&self, left: &str, right: &str) -> Ordering {
        match self.grouping {
            Grouping::Collation => self.comparator.compare(left, right),
            Grouping::Exact => self.comparator.total_order(left, right),
        }
    }

    /// Groups in ascending collated order of their keys.
    pub fn groups(&self) -> &[AuthorGroup<'a>] {
        &self.groups
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

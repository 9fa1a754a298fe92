//! HTML rendering of the author index.
//!
//! # Page Structure
//!
//! ```text
//! <h1>Autoři</h1>
//! <nav>  A · B · Z · Ž  </nav>
//! <section id="letter-0">
//!   <h2>A</h2>
//!   <dl>
//!     <dt id="adam-0">Adam</dt>
//!     <dd><ul><li><a href="a1.html">…</a></li></ul></dd>
//!   </dl>
//! </section>
//! ```
//!
//! Authors are bucketed under the uppercased first character of their name.
//! Buckets are merged when their letters compare equal under the renderer's
//! letter comparator, so with a primary-strength Czech collator `Á` joins
//! `A` while `Č` keeps its own bucket. Czech `Ch` names sort after `H` but
//! are still listed under `C`. Authors with an empty name land in a `#`
//! bucket. Anchors carry the bucket or group index and are unique.

use std::cmp::Ordering;

use maud::{DOCTYPE, Markup, html};
use tracing::{debug, instrument};

use crate::collation::{CodepointComparator, KeyComparator};
use crate::errors::RenderError;
use crate::models::AuthorGroup;
use crate::utils::{initial, slugify};

/// Turns the finalized author groups into page markup.
///
/// Implementations are expected to be pure: same groups, same output.
pub trait Renderer {
    fn render(&self, groups: &[AuthorGroup<'_>]) -> Result<String, RenderError>;
}

/// Default renderer producing a standalone HTML5 page.
///
/// `L` decides which initials share a letter section.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<L = CodepointComparator> {
    title: String,
    letters: L,
}

/// One letter section: its label and the groups under it with their index.
struct Letter<'g, 'a> {
    label: String,
    entries: Vec<(usize, &'g AuthorGroup<'a>)>,
}

impl HtmlRenderer {
    /// Renderer whose letter sections are exact uppercased initials.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_letters(title, CodepointComparator)
    }
}

impl<L: KeyComparator> HtmlRenderer<L> {
    pub fn with_letters(title: impl Into<String>, letters: L) -> Self {
        Self {
            title: title.into(),
            letters,
        }
    }

    fn sections<'g, 'a>(&self, groups: &'g [AuthorGroup<'a>]) -> Vec<Letter<'g, 'a>> {
        let mut letters: Vec<Letter<'g, 'a>> = Vec::new();
        for (i, group) in groups.iter().enumerate() {
            let label = initial(group.key.as_str());
            let existing = letters
                .iter_mut()
                .find(|letter| self.letters.compare(&letter.label, &label) == Ordering::Equal);
            match existing {
                Some(letter) => letter.entries.push((i, group)),
                None => letters.push(Letter {
                    label,
                    entries: vec![(i, group)],
                }),
            }
        }
        letters
    }

    fn page(&self, groups: &[AuthorGroup<'_>]) -> Markup {
        let letters = self.sections(groups);

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                }
                body {
                    h1 { (self.title) }
                    @if letters.is_empty() {
                        p class="empty" { "Žádní autoři." }
                    } @else {
                        nav class="letters" {
                            @for (n, letter) in letters.iter().enumerate() {
                                a href={ "#letter-" (n) } { (letter.label) } " "
                            }
                        }
                        @for (n, letter) in letters.iter().enumerate() {
                            section id={ "letter-" (n) } {
                                h2 { (letter.label) }
                                dl {
                                    @for (i, group) in &letter.entries {
                                        dt id=(entry_id(group.key.as_str(), *i)) {
                                            (group.key.as_str())
                                        }
                                        dd {
                                            ul {
                                                @for article in &group.articles {
                                                    li {
                                                        a href=(article.link()) { (article.title) }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Anchor of the `index`-th group, e.g. `adam-0`, or `author-3` for names
/// without any slug characters.
fn entry_id(name: &str, index: usize) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        format!("author-{index}")
    } else {
        format!("{slug}-{index}")
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("Autoři")
    }
}

impl<L: KeyComparator> Renderer for HtmlRenderer<L> {
    #[instrument(level = "info", skip_all, fields(groups = groups.len()))]
    fn render(&self, groups: &[AuthorGroup<'_>]) -> Result<String, RenderError> {
        let markup = self.page(groups).into_string();
        debug!(bytes = markup.len(), "Rendered author list");
        Ok(markup)
    }
}

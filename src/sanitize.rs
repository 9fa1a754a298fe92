//! Author name sanitization.
//!
//! Authors writing under a nickname are credited with the nickname wrapped in
//! Czech low-high quotation marks, e.g. `„Alhmar“`. The quotes are
//! presentational only; the index groups and sorts by the bare nickname.

use crate::models::AuthorKey;

/// Opening low-9 double quotation mark.
const OPENING_QUOTE: char = '„';

/// Closing marks accepted after an opening [`OPENING_QUOTE`].
const CLOSING_QUOTES: [char; 3] = ['“', '”', '‟'];

/// Turns raw author strings into [`AuthorKey`]s.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    remove_nickname_quotes: bool,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            remove_nickname_quotes: true,
        }
    }
}

impl Sanitizer {
    pub fn new(remove_nickname_quotes: bool) -> Self {
        Self {
            remove_nickname_quotes,
        }
    }

    /// Sanitize a raw author name.
    ///
    /// With nickname-quote removal enabled, a name wrapped in `„` … `“` loses
    /// the wrapping quotes and keeps its interior untouched. Wrappings are
    /// peeled until none is left, which keeps the operation idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use author_index::sanitize::Sanitizer;
    ///
    /// let sanitizer = Sanitizer::default();
    /// assert_eq!(sanitizer.sanitize("„Alhmar“").as_str(), "Alhmar");
    /// assert_eq!(sanitizer.sanitize("Alhmar").as_str(), "Alhmar");
    /// assert_eq!(sanitizer.sanitize("„“").as_str(), "");
    /// ```
    pub fn sanitize(&self, raw: &str) -> AuthorKey {
        if !self.remove_nickname_quotes {
            return AuthorKey::new(raw);
        }

        let mut name = raw;
        while let Some(inner) = strip_nickname_quotes(name) {
            name = inner;
        }
        AuthorKey::new(name)
    }
}

/// Interior of `name` if it is wrapped in one pair of nickname quotes.
fn strip_nickname_quotes(name: &str) -> Option<&str> {
    let inner = name.strip_prefix(OPENING_QUOTE)?;
    inner.strip_suffix(|c: char| CLOSING_QUOTES.contains(&c))
}

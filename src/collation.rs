//! Author name ordering.
//!
//! Ordering is abstracted behind [`KeyComparator`] so the index never depends
//! on a particular collation table. [`LocaleCollator`] is the production
//! implementation backed by ICU4X: locale tailored, secondary strength with
//! canonical decomposition, so case is ignored while accents still order
//! after their base letter.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use tracing::{debug, instrument};

use crate::errors::{CollationError, ConfigError};

/// A deterministic ordering over sanitized author names.
pub trait KeyComparator {
    /// Compare two names. `Equal` means the names belong to the same author.
    fn compare(&self, left: &str, right: &str) -> Ordering;

    /// Total order: [`compare`](KeyComparator::compare), then codepoints.
    ///
    /// Only identical strings are `Equal` under this order.
    fn total_order(&self, left: &str, right: &str) -> Ordering {
        self.compare(left, right).then_with(|| left.cmp(right))
    }
}

/// Locale-aware ICU collator, secondary strength unless built with [`LocaleCollator::primary`].
pub struct LocaleCollator {
    locale: String,
    collator: CollatorBorrowed<'static>,
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl LocaleCollator {
    /// Build a collator for a BCP-47 locale tag such as `"cs"` or `"cs-CZ"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] if the tag does not parse, or
    /// [`ConfigError::Collation`] if no collation data can be loaded for it.
    pub fn new(locale: &str) -> Result<Self, ConfigError> {
        Self::with_strength(locale, Strength::Secondary)
    }

    /// Base letters only: `A` and `Á` are equal, Czech `C` and `Č` are not.
    pub fn primary(locale: &str) -> Result<Self, ConfigError> {
        Self::with_strength(locale, Strength::Primary)
    }

    #[instrument(level = "debug")]
    fn with_strength(locale: &str, strength: Strength) -> Result<Self, ConfigError> {
        let parsed: Locale = locale.parse().map_err(|e| ConfigError::InvalidLocale {
            locale: locale.to_string(),
            reason: format!("{e}"),
        })?;

        let mut options = CollatorOptions::default();
        options.strength = Some(strength);

        let collator = Collator::try_new(parsed.into(), options).map_err(|e| CollationError {
            locale: locale.to_string(),
            reason: format!("{e}"),
        })?;
        debug!(locale, ?strength, "Loaded collator");

        Ok(Self {
            locale: locale.to_string(),
            collator,
        })
    }
}

impl KeyComparator for LocaleCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

/// Plain codepoint order. Every distinct string is its own author.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointComparator;

impl KeyComparator for CodepointComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
}

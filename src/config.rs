//! Configuration of the author index stage.
//!
//! The configuration is read once, before the first issue is ingested, from
//! an optional YAML file. Every key may be omitted:
//!
//! ```yaml
//! remove_nickname_quotes: true
//! locale: cs
//! grouping: collation   # or: exact
//! page_title: Autoři
//! ```
//!
//! The page is always written as `authors.html`; its name is not configurable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::authors::Grouping;
use crate::errors::ConfigError;

/// Settings for [`crate::plugin::AuthorListPlugin`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorIndexConfig {
    /// Strip `„…“` around nicknames, e.g. `„Alhmar“` becomes `Alhmar`.
    pub remove_nickname_quotes: bool,
    /// BCP-47 tag of the collation locale.
    pub locale: String,
    /// How author names are matched into groups.
    pub grouping: Grouping,
    /// Title of the rendered page.
    pub page_title: String,
}

impl Default for AuthorIndexConfig {
    fn default() -> Self {
        Self {
            remove_nickname_quotes: true,
            locale: "cs".to_string(),
            grouping: Grouping::Collation,
            page_title: "Autoři".to_string(),
        }
    }
}

/// Load the configuration from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Yaml`] if it is not valid configuration.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<AuthorIndexConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|error| ConfigError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let config = parse_config(&raw).map_err(|error| ConfigError::Yaml {
        path: path.to_path_buf(),
        error,
    })?;
    info!(?config, "Loaded configuration");
    Ok(config)
}

fn parse_config(raw: &str) -> Result<AuthorIndexConfig, serde_yaml::Error> {
    // An empty file deserializes as unit, not as an empty mapping.
    if raw.trim().is_empty() {
        return Ok(AuthorIndexConfig::default());
    }
    serde_yaml::from_str(raw)
}

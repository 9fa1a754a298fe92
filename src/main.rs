//! # author-index
//!
//! Host binary for the author index stage. Loads already-processed issues
//! from JSON, runs them through the publication pipeline with the author
//! list plugin registered, and writes `authors.html`.
//!
//! ## Usage
//!
//! ```sh
//! author-index -i ./issues -o ./site
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;

use clap::Parser;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use author_index::config::{AuthorIndexConfig, load_config};
use author_index::pipeline::Pipeline;
use author_index::plugin::AuthorListPlugin;
use author_index::source::load_issues;
use author_index::utils::ensure_writable_dir;

mod cli;

use cli::Cli;

#[instrument]
fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("author-index starting up");

    let args = Cli::parse();
    debug!(?args.inputs, ?args.output_dir, "Parsed CLI arguments");

    let config = resolve_config(&args)?;

    // Early check: fail before indexing anything if the page can't be written
    if let Err(e) = ensure_writable_dir(&args.output_dir) {
        error!(
            path = %args.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let issues = load_issues(&args.inputs)?;

    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(AuthorListPlugin::from_config(
        &config,
        &args.output_dir,
    )?));

    if let Err(e) = pipeline.run(&issues) {
        error!(error = %e, "Author index failed");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        issues = issues.len(),
        "Execution complete"
    );
    Ok(())
}

/// Config file (or defaults) with CLI overrides applied.
fn resolve_config(args: &Cli) -> Result<AuthorIndexConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AuthorIndexConfig::default(),
    };

    if args.keep_nickname_quotes {
        config.remove_nickname_quotes = false;
    }
    if let Some(locale) = &args.locale {
        config.locale = locale.clone();
    }

    debug!(?config, "Resolved configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "locale: cs\npage_title: Authors\n").unwrap();

        let args = Cli::parse_from([
            "author-index",
            "-i",
            "issues",
            "-o",
            "site",
            "-c",
            path.to_str().unwrap(),
            "--keep-nickname-quotes",
            "--locale",
            "sk",
        ]);
        let config = resolve_config(&args).unwrap();

        assert!(!config.remove_nickname_quotes);
        assert_eq!(config.locale, "sk");
        assert_eq!(config.page_title, "Authors");
    }

    #[test]
    fn test_defaults_without_config_file() {
        let args = Cli::parse_from(["author-index", "-i", "issues", "-o", "site"]);
        assert_eq!(resolve_config(&args).unwrap(), AuthorIndexConfig::default());
    }
}

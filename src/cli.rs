//! Command-line interface definitions for the author index host.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Flags given here override the corresponding keys of the YAML config.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the author index host.
///
/// # Examples
///
/// ```sh
/// # Index every issue in ./issues and write ./site/authors.html
/// author-index -i ./issues -o ./site
///
/// # With a config file and nickname quotes kept as written
/// author-index -i ./issues -o ./site -c config.yaml --keep-nickname-quotes
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Issue JSON files, or directories containing them
    #[arg(short, long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for authors.html
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep „…“ quotes around nicknames instead of stripping them
    #[arg(long)]
    pub keep_nickname_quotes: bool,

    /// Collation locale, e.g. `cs` or `sk`
    #[arg(long)]
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "author-index",
            "--input",
            "./issues",
            "--output-dir",
            "./site",
        ]);

        assert_eq!(cli.inputs, vec![PathBuf::from("./issues")]);
        assert_eq!(cli.output_dir, PathBuf::from("./site"));
        assert!(!cli.keep_nickname_quotes);
        assert_eq!(cli.locale, None);
    }

    #[test]
    fn test_cli_short_flags_and_many_inputs() {
        let cli = Cli::parse_from([
            "author-index",
            "-i",
            "1.json",
            "2.json",
            "-o",
            "/tmp/site",
            "-c",
            "config.yaml",
            "--keep-nickname-quotes",
            "--locale",
            "sk",
        ]);

        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.config, Some(PathBuf::from("config.yaml")));
        assert!(cli.keep_nickname_quotes);
        assert_eq!(cli.locale.as_deref(), Some("sk"));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["author-index", "-o", "./site"]).is_err());
    }
}

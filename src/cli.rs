//! CLI interface definitions for the `dirhash` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`Style`]: an enum selecting tree-style or flat-style output
//!
//! `Args` is turned into an explicit [`ReviewConfig`](crate::config::ReviewConfig)
//! in `main.rs`; nothing below the CLI layer reads `Args` directly.
//!
//! # Example
//!
//! ```bash
//! dirhash --style flat --filter target --filter '*.log' --depth 3 ./project
//! ```

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments for `dirhash`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use dirhash::Args;
///
/// let args = Args::parse_from(["dirhash", "--style", "FLAT", "some/dir"]);
/// assert_eq!(args.style, dirhash::Style::Flat);
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirhash",
    version,
    about = "Generates a hash summary of the directory contents for text diff comparison",
    after_help = "If no PATH is given, the current directory is used."
)]
pub struct Args {
    /// Directory to review (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output style: tree prefixes or full flat paths
    #[arg(long, value_enum, ignore_case = true, default_value_t = Style::Tree)]
    pub style: Style,

    /// Skip entries whose bare filename matches this glob (repeatable)
    #[arg(long, value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub filter: Vec<String>,

    /// Do not apply the built-in filter patterns
    #[arg(long, default_value_t = false)]
    pub no_default_filters: bool,

    /// Follow symbolic links and hash what they point to
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,

    /// Do not list directory contents deeper than N levels below the root
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Show a progress spinner on stderr while hashing
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors on stderr
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// How each entry's location is rendered.
///
/// # Variants
/// * `Tree` - bare names under box-drawing branch glyphs
/// * `Flat` - full path from the review root on every line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum Style {
    #[default]
    Tree,
    Flat,
}

impl Style {
    /// Upper-case code used in the machine-readable format record.
    pub fn code(&self) -> &'static str {
        match self {
            Style::Tree => "TREE",
            Style::Flat => "FLAT",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Tree => "Tree",
            Style::Flat => "Flat",
        })
    }
}

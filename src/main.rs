//! Main entry point for the `dirhash` CLI application.
//!
//! `dirhash` prints a deterministic hash summary of a directory tree, one
//! line per entry, meant to be saved and compared with a text diff tool.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Sets up stderr diagnostics
//! - Builds the explicit [`ReviewConfig`] and delegates to [`Reviewer`]
//! - Prints the rendered lines, exiting quietly on a closed pipe
//!
//! # Exit codes
//! - `0` on success, including partially reviewed trees
//! - `1` on an invalid filter pattern or an unreadable root path
//! - `2` on usage errors (reported by clap)

use anyhow::{Context, Result};
use clap::Parser;
use dirhash::logging::{init_logging, Verbosity};
use dirhash::scan::Reviewer;
use dirhash::{output, Args, ReviewConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::process;
use std::time::Duration;
use tracing::debug;

/// Spinner on stderr, ticking once per reviewed entry.
fn progress_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Hashing entries... {pos} [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Writes every line to stdout.
fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn run(args: &Args) -> Result<()> {
    let config = ReviewConfig::from_args(args)?;
    debug!(?config, "Review configuration");

    let mut reviewer = Reviewer::new(&config);
    if args.progress {
        reviewer = reviewer.with_progress(progress_spinner()?);
    }
    let entry = reviewer.review(&args.path)?;

    let lines = output::render(&args.path, &entry, &config);
    match print_lines(&lines) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write summary"),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(Verbosity::from_flags(args.verbose, args.quiet)) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Fatal Error: {:#}", e);
        process::exit(1);
    }
}

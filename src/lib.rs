//! Library crate for dirhash
//!
//! Computes a deterministic, content-addressed summary of a directory tree
//! and renders it as stable, line-oriented text for diffing two snapshots.
//!
//! # Modules
//!
//! - [`scan`]: the recursive review engine producing an [`Entry`] tree
//! - [`output`]: header and per-entry line rendering
//! - [`data`]: core data structures (`Entry`, `EntryKind`, `EntryHash`, ...)
//! - [`config`]: the explicit [`ReviewConfig`] value
//! - [`cli`]: command-line interface definitions
//! - [`hash`]: BLAKE3 fingerprint helpers
//! - [`utils`]: permission strings, filter globs, display paths
//! - [`logging`]: stderr diagnostics setup
//!
//! # Example
//!
//! ```no_run
//! use dirhash::{output, review_tree, ReviewConfig};
//! use std::path::Path;
//!
//! let config = ReviewConfig::default();
//! let root = Path::new(".");
//! let entry = review_tree(root, &config)?;
//! for line in output::render(root, &entry, &config) {
//!     println!("{line}");
//! }
//! # Ok::<(), dirhash::ReviewError>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod hash;
pub mod logging;
pub mod output;
pub mod scan;
pub mod utils;

pub use cli::{Args, Style};
pub use config::ReviewConfig;
pub use data::{Entry, EntryKind};
pub use error::ReviewError;
pub use scan::review_tree;

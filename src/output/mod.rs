//! Rendering of a finished review as diffable text lines.
//!
//! # Layout
//!
//! - [`header`]: the `[FORMAT: ...]` record and `#` comment block
//! - [`lines`]: one line per entry, tree-style or flat-style
//!
//! Rendering has no side effects; callers print the returned lines.

pub mod header;
pub mod lines;

use crate::config::ReviewConfig;
use crate::data::Entry;
use std::path::Path;

pub use header::{render_header, FormatRecord};
pub use lines::render_entries;

/// Renders the header block followed by every entry line.
///
/// # Arguments
/// * `root` - The root path as given to the review, shown in the header and flat paths
/// * `entry` - The root entry returned by [`crate::scan::review_tree`]
/// * `config` - The configuration the tree was built with
pub fn render(root: &Path, entry: &Entry, config: &ReviewConfig) -> Vec<String> {
    let mut lines = render_header(root, entry, config);
    lines.extend(render_entries(root, entry, config.style()));
    lines
}

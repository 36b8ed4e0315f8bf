//! Per-entry line rendering.
//!
//! Lines are emitted in pre-order, children in the same sorted order used
//! when hashing, so the last child seen here is the one drawn with `└──`.

use crate::cli::Style;
use crate::data::Entry;
use crate::utils::{display_name, flat_display_path};
use std::path::{Path, PathBuf};

const ATTR_WIDTH: usize = 10;
const HASH_WIDTH: usize = 32;

/// Renders `entry` and all of its descendants, one line each.
pub fn render_entries(root: &Path, entry: &Entry, style: Style) -> Vec<String> {
    let mut lines = Vec::new();
    let mut last_flags = Vec::new();
    push_lines(
        &mut lines,
        root,
        PathBuf::new(),
        entry,
        style,
        &mut last_flags,
        true,
    );
    lines
}

fn push_lines(
    lines: &mut Vec<String>,
    root: &Path,
    relative: PathBuf,
    entry: &Entry,
    style: Style,
    last_flags: &mut Vec<bool>,
    is_last: bool,
) {
    let location = match style {
        Style::Tree => format!("{} {}", tree_prefix(last_flags, is_last), tree_name(entry)),
        Style::Flat => flat_display_path(root, &relative, entry.is_dir_like()),
    };
    lines.push(entry_line(entry, &location));

    let count = entry.children.len();
    last_flags.push(is_last);
    for (i, child) in entry.children.iter().enumerate() {
        push_lines(
            lines,
            root,
            relative.join(&child.name),
            child,
            style,
            last_flags,
            i + 1 == count,
        );
    }
    last_flags.pop();
}

/// Formats the fixed-width columns followed by `location` and any link note.
pub fn entry_line(entry: &Entry, location: &str) -> String {
    let attr = entry.attr.to_string();
    let hash = entry.hash.to_string();
    let mut line = format!(
        "{:_<aw$.aw$} | {:_<hw$.hw$}{} {}",
        attr,
        hash,
        entry.status_char(),
        location,
        aw = ATTR_WIDTH,
        hw = HASH_WIDTH,
    );
    if let Some(note) = &entry.link_note {
        line.push_str(&note.to_string());
    }
    line
}

/// Ancestor guide columns plus this entry's branch glyph.
pub fn tree_prefix(last_flags: &[bool], is_last: bool) -> String {
    let mut prefix: String = last_flags
        .iter()
        .map(|&last| if last { "    " } else { "│   " })
        .collect();
    prefix.push_str(if is_last { "└──" } else { "├──" });
    prefix
}

/// Bare name, with a trailing `/` for directories; the root is `./`, or `.`
/// when it is not a directory.
fn tree_name(entry: &Entry) -> String {
    let mut name = display_name(&entry.name);
    if name.is_empty() {
        name.push('.');
    }
    if entry.is_dir_like() {
        name.push('/');
    }
    name
}

//! Data structures for representing reviewed filesystem entries.
//!
//! An [`Entry`] tree is built once by [`crate::scan`] and never mutated
//! afterwards. Error and status information is kept structured here; the
//! text forms (`Missing`, `error_unable_to_read`, ...) are only produced by
//! the `Display` impls used when hashing parents and rendering lines.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One reviewed filesystem object.
///
/// # Fields
/// * `parent_path` - Path of the containing directory (the root argument for the root entry)
/// * `name` - Bare filename; empty for the root entry
/// * `depth` - 0 at the root, +1 per descent
/// * `depth_remaining` - Listing budget left at this entry, `None` when unlimited
/// * `kind` - What the entry is
/// * `attr` - Normalised type and permission field
/// * `hash` - Kind-prefixed fingerprint
/// * `fault` - Why this entry itself could not be fully read, if it couldn't
/// * `has_error` - `fault` is set here or anywhere below
/// * `fully_reviewed` - No depth limit was hit here or anywhere below
/// * `deepest_depth_reached` - Height of the reviewed subtree below this entry
/// * `children` - Sorted by name; empty for everything but listed directories
/// * `link_note` - Symlink target annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub parent_path: PathBuf,
    pub name: OsString,
    pub depth: usize,
    pub depth_remaining: Option<usize>,
    pub kind: EntryKind,
    pub attr: Attr,
    pub hash: EntryHash,
    pub fault: Option<EntryFault>,
    pub has_error: bool,
    pub fully_reviewed: bool,
    pub deepest_depth_reached: usize,
    pub children: Vec<Entry>,
    pub link_note: Option<LinkNote>,
}

impl Entry {
    /// Filesystem path of this entry.
    pub fn path(&self) -> PathBuf {
        if self.name.is_empty() {
            self.parent_path.clone()
        } else {
            self.parent_path.join(&self.name)
        }
    }

    /// Whether this entry is rendered and traversed as a directory.
    pub fn is_dir_like(&self) -> bool {
        self.kind == EntryKind::Dir || self.hash.prefix == HashPrefix::LinkedDir
    }

    /// The `[attr:hash]` token contributed to a parent's aggregation string.
    pub fn aggregation_token(&self) -> String {
        format!("[{}:{}]", self.attr, self.hash)
    }

    /// Status column character: `*` on error, `?` when not fully reviewed.
    pub fn status_char(&self) -> char {
        if self.has_error {
            '*'
        } else if !self.fully_reviewed {
            '?'
        } else {
            ' '
        }
    }
}

/// The type of filesystem entry, as seen without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
    Missing,
}

/// Normalised attribute field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Type glyph followed by nine permission characters.
    Mode { glyph: char, perms: String },
    /// The path did not exist.
    Missing,
    /// Metadata could not be read.
    Unreadable,
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Mode { glyph, perms } => write!(f, "{glyph}{perms}"),
            Attr::Missing => f.write_str("Missing"),
            Attr::Unreadable => f.write_str("XXXXXXX"),
        }
    }
}

/// Kind-specific literal placed in front of every stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashPrefix {
    None,
    Link,
    LinkedDir,
    LinkedFile,
    LinkedOther,
    Dir,
}

impl HashPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashPrefix::None => "",
            HashPrefix::Link => "link_",
            HashPrefix::LinkedDir => "Linked[dir]_",
            HashPrefix::LinkedFile => "Linked[file]_",
            HashPrefix::LinkedOther => "Linked_",
            HashPrefix::Dir => "dir_",
        }
    }
}

/// What was fingerprinted, or the marker standing in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashBody {
    /// Hex fingerprint of contents, aggregation string or link target.
    Digest(String),
    /// Directory listed successfully with nothing left after filtering.
    EmptyDir,
    /// Directory not listed because the depth budget ran out.
    Unexamined,
    /// Device, fifo, socket or similar.
    UnknownType,
    /// Nothing could be fingerprinted.
    Fault(EntryFault),
}

impl fmt::Display for HashBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashBody::Digest(hex) => f.write_str(hex),
            HashBody::EmptyDir => f.write_str("_0_entries"),
            HashBody::Unexamined => f.write_str("unexamined"),
            HashBody::UnknownType => f.write_str("unknown_type"),
            HashBody::Fault(fault) => write!(f, "error_{}", fault.marker()),
        }
    }
}

/// A stored hash: prefix plus body, composed only when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHash {
    pub prefix: HashPrefix,
    pub body: HashBody,
}

impl EntryHash {
    pub fn new(prefix: HashPrefix, body: HashBody) -> Self {
        Self { prefix, body }
    }
}

impl fmt::Display for EntryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.as_str(), self.body)
    }
}

/// Non-fatal per-entry failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFault {
    #[error("path does not exist")]
    Missing,
    #[error("unable to read metadata")]
    Stat,
    #[error("unable to read contents")]
    Read,
    #[error("unable to list directory")]
    List,
    #[error("symbolic link leads back into an ancestor directory")]
    LinkCycle,
}

impl EntryFault {
    /// Short marker embedded in the hash column.
    pub fn marker(&self) -> &'static str {
        match self {
            EntryFault::Missing => "missing",
            EntryFault::Stat => "unable_to_stat",
            EntryFault::Read => "unable_to_read",
            EntryFault::List => "unable_to_list",
            EntryFault::LinkCycle => "link_cycle",
        }
    }
}

/// Symlink target annotation shown after the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNote {
    pub target: String,
    pub target_is_dir: bool,
}

impl fmt::Display for LinkNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " → {}", self.target)?;
        if self.target_is_dir {
            f.write_str("/")?;
        }
        Ok(())
    }
}

//! Recursive review engine for `dirhash`.
//!
//! This module handles:
//! - Depth-first, pre-order traversal with children sorted by raw name bytes
//! - Content fingerprints for files and Merkle-style aggregation for directories
//! - Symlink handling (opaque by default, followed with cycle detection on request)
//! - Filename filtering and depth limiting
//! - Recording per-entry failures in-band instead of aborting
//!
//! The main entry point is [`review_tree`], which returns the fully built,
//! immutable [`Entry`] tree for a root path.
//!
//! Hash composition:
//! - file: fingerprint of the file bytes
//! - directory: fingerprint of the concatenated `[attr:hash]` tokens of its
//!   sorted children, or the literal `_0_entries` when nothing survives filtering
//! - symlink (not followed): fingerprint of the link target string
//!
//! and every stored hash carries a kind prefix (see [`HashPrefix`]).

use crate::config::ReviewConfig;
use crate::data::{Attr, Entry, EntryFault, EntryHash, EntryKind, HashBody, HashPrefix, LinkNote};
use crate::error::ReviewError;
use crate::hash::{fingerprint_file, fingerprint_str};
use crate::utils::{display_name, permission_string};
use indicatif::ProgressBar;
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Reviews the tree rooted at `root` with the given configuration.
///
/// # Errors
/// Returns [`ReviewError::RootUnavailable`] if the root itself cannot be
/// stat'ed. Every failure below the root is recorded on the affected entry.
pub fn review_tree(root: &Path, config: &ReviewConfig) -> Result<Entry, ReviewError> {
    Reviewer::new(config).review(root)
}

/// Traversal state shared by every entry of one review: the configuration
/// and an optional progress spinner. Neither is mutated by the traversal.
pub struct Reviewer<'a> {
    config: &'a ReviewConfig,
    progress: ProgressBar,
}

/// Result of classifying and hashing one entry, before it is assembled into an [`Entry`].
struct Review {
    hash: EntryHash,
    fault: Option<EntryFault>,
    has_error: bool,
    fully_reviewed: bool,
    deepest_depth_reached: usize,
    children: Vec<Entry>,
}

impl Review {
    fn leaf(prefix: HashPrefix, body: HashBody) -> Self {
        Self {
            hash: EntryHash::new(prefix, body),
            fault: None,
            has_error: false,
            fully_reviewed: true,
            deepest_depth_reached: 0,
            children: Vec::new(),
        }
    }

    fn fault(prefix: HashPrefix, fault: EntryFault) -> Self {
        Self {
            hash: EntryHash::new(prefix, HashBody::Fault(fault)),
            fault: Some(fault),
            has_error: true,
            fully_reviewed: true,
            deepest_depth_reached: 0,
            children: Vec::new(),
        }
    }
}

impl<'a> Reviewer<'a> {
    pub fn new(config: &'a ReviewConfig) -> Self {
        Self {
            config,
            progress: ProgressBar::hidden(),
        }
    }

    /// Ticks `progress` once per reviewed entry.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Builds the entry tree for `root`.
    pub fn review(&self, root: &Path) -> Result<Entry, ReviewError> {
        fs::symlink_metadata(root).map_err(|source| ReviewError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut ancestors = Vec::new();
        let entry = self.build_entry(
            root,
            OsString::new(),
            0,
            self.config.depth_limit(),
            &mut ancestors,
        );
        self.progress.finish_and_clear();

        debug!(
            root = %root.display(),
            deepest = entry.deepest_depth_reached,
            has_error = entry.has_error,
            fully_reviewed = entry.fully_reviewed,
            "Review complete"
        );
        Ok(entry)
    }

    /// Stats, classifies and hashes the entry at `parent/name`, recursing into directories.
    ///
    /// `ancestors` holds canonical paths of the directories currently being
    /// listed; it is only populated when links are followed.
    fn build_entry(
        &self,
        parent: &Path,
        name: OsString,
        depth: usize,
        depth_remaining: Option<usize>,
        ancestors: &mut Vec<PathBuf>,
    ) -> Entry {
        let path = if name.is_empty() {
            parent.to_path_buf()
        } else {
            parent.join(&name)
        };
        self.progress.inc(1);

        let (kind, attr, review, link_note) = match fs::symlink_metadata(&path) {
            Ok(meta) => self.classify(&path, &meta, depth, depth_remaining, ancestors),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("File {} does not exist", path.display());
                (
                    EntryKind::Missing,
                    Attr::Missing,
                    Review::fault(HashPrefix::None, EntryFault::Missing),
                    None,
                )
            }
            Err(e) => {
                error!("Unable to get file stats of {}: {}", path.display(), e);
                (
                    EntryKind::Other,
                    Attr::Unreadable,
                    Review::fault(HashPrefix::None, EntryFault::Stat),
                    None,
                )
            }
        };

        Entry {
            parent_path: parent.to_path_buf(),
            name,
            depth,
            depth_remaining,
            kind,
            attr,
            hash: review.hash,
            fault: review.fault,
            has_error: review.has_error,
            fully_reviewed: review.fully_reviewed,
            deepest_depth_reached: review.deepest_depth_reached,
            children: review.children,
            link_note,
        }
    }

    /// Applies the first matching kind rule to an entry whose `lstat` succeeded.
    fn classify(
        &self,
        path: &Path,
        meta: &Metadata,
        depth: usize,
        depth_remaining: Option<usize>,
        ancestors: &mut Vec<PathBuf>,
    ) -> (EntryKind, Attr, Review, Option<LinkNote>) {
        let file_type = meta.file_type();
        let mode_attr = |glyph: char, mode: u32| Attr::Mode {
            glyph,
            perms: permission_string(mode),
        };

        if file_type.is_symlink() {
            let (target_meta, target_fault) = match fs::metadata(path) {
                Ok(target_meta) => (Some(target_meta), None),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("File {} does not exist", path.display());
                    (None, Some(EntryFault::Missing))
                }
                Err(e) => {
                    error!("Unable to get file stats of {}: {}", path.display(), e);
                    (None, Some(EntryFault::Stat))
                }
            };
            let (glyph, mut review, note) =
                self.review_symlink(path, target_meta.as_ref(), depth, depth_remaining, ancestors);
            let attr = match target_fault {
                Some(fault) => {
                    review.fault.get_or_insert(fault);
                    review.has_error = true;
                    if fault == EntryFault::Missing {
                        Attr::Missing
                    } else {
                        Attr::Unreadable
                    }
                }
                None => mode_attr(glyph, target_meta.as_ref().unwrap_or(meta).mode()),
            };
            (EntryKind::Symlink, attr, review, note)
        } else if file_type.is_file() {
            let review = self.review_file(path, HashPrefix::None);
            (EntryKind::File, mode_attr('-', meta.mode()), review, None)
        } else if file_type.is_dir() {
            let review = self.review_dir(path, depth, depth_remaining, ancestors, HashPrefix::Dir);
            (EntryKind::Dir, mode_attr('d', meta.mode()), review, None)
        } else {
            debug!("Unknown file type at {}", path.display());
            let review = Review::leaf(HashPrefix::None, HashBody::UnknownType);
            (EntryKind::Other, mode_attr('_', meta.mode()), review, None)
        }
    }

    /// Hashes a symlink by its target string, or by what it points to when following links.
    fn review_symlink(
        &self,
        path: &Path,
        target_meta: Option<&Metadata>,
        depth: usize,
        depth_remaining: Option<usize>,
        ancestors: &mut Vec<PathBuf>,
    ) -> (char, Review, Option<LinkNote>) {
        let target = match fs::read_link(path) {
            Ok(target) => target.to_string_lossy().into_owned(),
            Err(e) => {
                error!("Unable to read link {}: {}", path.display(), e);
                return ('l', Review::fault(HashPrefix::Link, EntryFault::Read), None);
            }
        };
        let target_is_dir = target_meta.is_some_and(|m| m.is_dir());
        let note = LinkNote {
            target: target.clone(),
            target_is_dir,
        };

        let review = match target_meta {
            Some(target_meta) if self.config.follow_links() => {
                if target_is_dir {
                    let review =
                        self.review_dir(path, depth, depth_remaining, ancestors, HashPrefix::LinkedDir);
                    return ('D', review, Some(note));
                } else if target_meta.is_file() {
                    self.review_file(path, HashPrefix::LinkedFile)
                } else {
                    Review::leaf(HashPrefix::LinkedOther, HashBody::UnknownType)
                }
            }
            _ => Review::leaf(HashPrefix::Link, HashBody::Digest(fingerprint_str(&target))),
        };
        ('l', review, Some(note))
    }

    fn review_file(&self, path: &Path, prefix: HashPrefix) -> Review {
        match fingerprint_file(path) {
            Ok(hex) => Review::leaf(prefix, HashBody::Digest(hex)),
            Err(e) => {
                error!("Unable to read {}: {}", path.display(), e);
                Review::fault(prefix, EntryFault::Read)
            }
        }
    }

    /// Lists, filters and recurses into a directory, then aggregates its children.
    fn review_dir(
        &self,
        path: &Path,
        depth: usize,
        depth_remaining: Option<usize>,
        ancestors: &mut Vec<PathBuf>,
        prefix: HashPrefix,
    ) -> Review {
        if depth_remaining == Some(0) {
            debug!("Depth limit reached at {}", path.display());
            let mut review = Review::leaf(prefix, HashBody::Unexamined);
            review.fully_reviewed = false;
            return review;
        }

        let canonical = if self.config.follow_links() {
            match fs::canonicalize(path) {
                Ok(canonical) if ancestors.contains(&canonical) => {
                    warn!(
                        "Not descending into {}: it leads back to {}",
                        path.display(),
                        canonical.display()
                    );
                    return Review::fault(prefix, EntryFault::LinkCycle);
                }
                Ok(canonical) => Some(canonical),
                Err(e) => {
                    debug!("Unable to canonicalize {}: {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        let mut names = match list_names(path) {
            Ok(names) => names,
            Err(e) => {
                error!("Unable to list directory {}: {}", path.display(), e);
                return Review::fault(prefix, EntryFault::List);
            }
        };
        names.sort();

        let child_remaining = depth_remaining.map(|n| n - 1);
        let pushed = canonical.is_some();
        if let Some(canonical) = canonical {
            ancestors.push(canonical);
        }

        let mut children = Vec::with_capacity(names.len());
        for name in names {
            if self.config.should_filter(&name) {
                info!(
                    "Skipping filtered filename: {:<40}  in {}",
                    display_name(&name),
                    path.display()
                );
                continue;
            }
            children.push(self.build_entry(path, name, depth + 1, child_remaining, ancestors));
        }

        if pushed {
            ancestors.pop();
        }

        aggregate(prefix, children)
    }
}

/// Entry names of a directory in listing order.
fn list_names(path: &Path) -> io::Result<Vec<OsString>> {
    fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect()
}

/// Folds sorted children into their parent's hash and status.
fn aggregate(prefix: HashPrefix, children: Vec<Entry>) -> Review {
    let mut aggregation = String::new();
    let mut has_error = false;
    let mut fully_reviewed = true;
    let mut deepest_depth_reached = 0;

    for child in &children {
        aggregation.push_str(&child.aggregation_token());
        has_error |= child.has_error;
        fully_reviewed &= child.fully_reviewed;
        deepest_depth_reached = deepest_depth_reached.max(child.deepest_depth_reached + 1);
    }

    let body = if children.is_empty() {
        HashBody::EmptyDir
    } else {
        HashBody::Digest(fingerprint_str(&aggregation))
    };

    Review {
        hash: EntryHash::new(prefix, body),
        fault: None,
        has_error,
        fully_reviewed,
        deepest_depth_reached,
        children,
    }
}

//! Utility functions for the `dirhash` review tool.
//!
//! This module provides:
//! - Permission-bit normalisation into `rwxrwxrwx` triads
//! - Glob-based filename filter compilation
//! - Display helpers for names and flat-style paths

use crate::error::ReviewError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::path::Path;

/// Permission bits tested for each of owner, group and other, in display order.
const PERMISSION_BITS: [(u32, char); 9] = [
    (libc::S_IRUSR as u32, 'r'),
    (libc::S_IWUSR as u32, 'w'),
    (libc::S_IXUSR as u32, 'x'),
    (libc::S_IRGRP as u32, 'r'),
    (libc::S_IWGRP as u32, 'w'),
    (libc::S_IXGRP as u32, 'x'),
    (libc::S_IROTH as u32, 'r'),
    (libc::S_IWOTH as u32, 'w'),
    (libc::S_IXOTH as u32, 'x'),
];

/// Renders the nine permission bits of `mode` as an `rwxr-xr-x` style string.
///
/// Type bits and setuid/setgid/sticky bits are ignored.
pub fn permission_string(mode: u32) -> String {
    PERMISSION_BITS
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}

/// Compiles filter patterns into a `GlobSet` matched against bare filenames.
pub fn build_filter_matcher(patterns: &[String]) -> Result<GlobSet, ReviewError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ReviewError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ReviewError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Lossy UTF-8 form of a filename for display and aggregation strings.
pub fn display_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}

/// Flat-style display path: `root` joined with `relative`, without a leading `./`.
///
/// Directories are shown with a trailing `/`. The root itself (empty
/// `relative`) is shown as the root argument, so `.` renders as `./`.
pub fn flat_display_path(root: &Path, relative: &Path, is_dir: bool) -> String {
    let joined = if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    };
    let text = joined.to_string_lossy();
    let mut text = match text.strip_prefix("./") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => text.into_owned(),
    };
    if is_dir && !text.ends_with('/') {
        text.push('/');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_permission_string() {
        assert_eq!(permission_string(0o644), "rw-r--r--");
        assert_eq!(permission_string(0o755), "rwxr-xr-x");
        assert_eq!(permission_string(0o100600), "rw-------");
        assert_eq!(permission_string(0o4777), "rwxrwxrwx");
        assert_eq!(permission_string(0), "---------");
    }

    #[test]
    fn test_filter_matcher_on_bare_names() {
        let set = build_filter_matcher(&["*.tmp".to_string(), "cache".to_string()]).unwrap();
        assert!(set.is_match("a.tmp"));
        assert!(set.is_match("cache"));
        assert!(!set.is_match("cache2"));
        assert!(!set.is_match("tmp"));
    }

    #[test]
    fn test_flat_display_path() {
        let dot = PathBuf::from(".");
        assert_eq!(flat_display_path(&dot, Path::new(""), true), "./");
        assert_eq!(flat_display_path(&dot, Path::new("a.txt"), false), "a.txt");
        assert_eq!(flat_display_path(&dot, Path::new("b/c"), true), "b/c/");

        let abs = PathBuf::from("/srv/data");
        assert_eq!(flat_display_path(&abs, Path::new(""), true), "/srv/data/");
        assert_eq!(flat_display_path(&abs, Path::new("x"), false), "/srv/data/x");
    }
}

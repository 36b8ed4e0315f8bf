//! Error types for the review engine.
//!
//! Per-entry failures never abort a traversal; they are recorded on the
//! entry as an [`EntryFault`](crate::data::EntryFault). The only failure that
//! escapes [`review_tree`](crate::scan::review_tree) is [`ReviewError`].

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that stop a review before any output is produced.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The root path could not be resolved at all.
    #[error("unable to review '{}': {source}", .path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filter pattern is not a valid glob.
    #[error("invalid filter pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

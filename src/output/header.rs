//! Header block emitted before the first entry line.
//!
//! The first line is a single-line JSON record describing every setting that
//! changes the entry lines, so two summaries can be checked for
//! comparability before diffing them. The rest are `#` comment lines.

use crate::cli::Style;
use crate::config::ReviewConfig;
use crate::data::Entry;
use crate::utils::flat_display_path;
use serde::Serialize;
use std::path::Path;

/// Bumped whenever the entry line or hash composition changes.
pub const FORMAT_REV: u32 = 1;

const COMMENT: &str = "# ";

/// Machine-readable description of the run configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRecord<'a> {
    pub format_rev: u32,
    pub style: &'static str,
    pub links: &'static str,
    pub filter_filenames: &'a [String],
    pub depth_limit: Option<usize>,
}

impl<'a> FormatRecord<'a> {
    pub fn new(config: &'a ReviewConfig) -> Self {
        Self {
            format_rev: FORMAT_REV,
            style: config.style().code(),
            links: if config.follow_links() {
                "FOLLOW"
            } else {
                "NOFOLLOW"
            },
            filter_filenames: config.filters(),
            depth_limit: config.depth_limit(),
        }
    }

    /// `[FORMAT: {...}]` line.
    pub fn to_line(&self) -> String {
        // Serializing plain strings and integers cannot fail.
        let json = serde_json::to_string(self).unwrap_or_default();
        format!("[FORMAT: {json}]")
    }
}

/// Renders the complete header block for a finished review of `root`.
pub fn render_header(root: &Path, entry: &Entry, config: &ReviewConfig) -> Vec<String> {
    let mut lines = vec![FormatRecord::new(config).to_line(), COMMENT.to_string()];

    lines.push(format!(
        "{COMMENT}Review of directory: {}",
        flat_display_path(root, Path::new(""), entry.is_dir_like())
    ));

    let mut depth_note = String::new();
    if let Some(limit) = config.depth_limit() {
        depth_note.push_str(&format!(" (limited to depth {limit})"));
    }
    if !entry.fully_reviewed {
        depth_note.push_str(" -- not fully reviewed");
    }
    lines.push(format!(
        "{COMMENT}Max depth found    : {}{depth_note}",
        entry.deepest_depth_reached
    ));

    lines.extend(styling_info(config));
    lines.push(COMMENT.to_string());
    lines
}

/// Filter list, style and column legend.
fn styling_info(config: &ReviewConfig) -> Vec<String> {
    let format = match config.style() {
        Style::Tree => "[attributes] | [hash] [TreePrefix]── [filename]",
        Style::Flat => "[attributes] | [hash] [path]",
    };
    vec![
        format!("{COMMENT}Filtering filenames: {}", config.filters().join(", ")),
        COMMENT.to_string(),
        format!("{COMMENT}Style              : {}", config.style()),
        COMMENT.to_string(),
        format!("{COMMENT}Format         : {format}"),
        format!(
            "{COMMENT}                 (Hash has a '*' suffix if error and '?' if not fully reviewed)"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_line() {
        let config = ReviewConfig::new(Style::Flat, true, vec![".git".to_string()], Some(3)).unwrap();
        assert_eq!(
            FormatRecord::new(&config).to_line(),
            r#"[FORMAT: {"formatRev":1,"style":"FLAT","links":"FOLLOW","filterFilenames":[".git"],"depthLimit":3}]"#
        );
    }

    #[test]
    fn test_format_record_defaults() {
        let config = ReviewConfig::default();
        let line = FormatRecord::new(&config).to_line();
        assert!(line.contains(r#""style":"TREE""#));
        assert!(line.contains(r#""links":"NOFOLLOW""#));
        assert!(line.contains(r#""depthLimit":null"#));
    }

    #[test]
    fn test_styling_info_legend_follows_style() {
        let tree = styling_info(&ReviewConfig::default());
        assert!(tree.iter().any(|l| l.contains("[TreePrefix]")));
        let flat = styling_info(&ReviewConfig::default().with_style(Style::Flat));
        assert!(flat.iter().any(|l| l.ends_with("[hash] [path]")));
        assert_eq!(flat[0], "# Filtering filenames: __pycache__, .git, .DS_Store, _skip_*");
    }
}

//! Review configuration.
//!
//! [`ReviewConfig`] is the single explicit configuration value threaded
//! through every traversal call and read by the renderer. It is immutable
//! once built.

use crate::cli::{Args, Style};
use crate::error::ReviewError;
use crate::utils::build_filter_matcher;
use globset::GlobSet;
use std::ffi::OsStr;

/// Filename globs skipped unless `--no-default-filters` is given.
pub const DEFAULT_FILTERS: &[&str] = &["__pycache__", ".git", ".DS_Store", "_skip_*"];

/// Everything that shapes a review and its rendered output.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    style: Style,
    follow_links: bool,
    filters: Vec<String>,
    matcher: GlobSet,
    depth_limit: Option<usize>,
}

impl ReviewConfig {
    /// Builds a configuration with the given filter patterns.
    ///
    /// # Errors
    /// Returns [`ReviewError::InvalidPattern`] if any pattern is not a valid glob.
    pub fn new(
        style: Style,
        follow_links: bool,
        filters: Vec<String>,
        depth_limit: Option<usize>,
    ) -> Result<Self, ReviewError> {
        let matcher = build_filter_matcher(&filters)?;
        Ok(Self {
            style,
            follow_links,
            filters,
            matcher,
            depth_limit,
        })
    }

    /// Builds the configuration described by parsed command-line arguments.
    pub fn from_args(args: &Args) -> Result<Self, ReviewError> {
        let mut filters: Vec<String> = if args.no_default_filters {
            Vec::new()
        } else {
            DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect()
        };
        for pattern in &args.filter {
            if !filters.contains(pattern) {
                filters.push(pattern.clone());
            }
        }
        Self::new(args.style, args.follow_links, filters, args.depth)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<usize>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Filter patterns in the order they were configured.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn depth_limit(&self) -> Option<usize> {
        self.depth_limit
    }

    /// Whether a bare filename matches any configured filter pattern.
    pub fn should_filter(&self, name: &OsStr) -> bool {
        self.matcher.is_match(name)
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        let filters: Vec<String> = DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect();
        let matcher = build_filter_matcher(&filters).unwrap_or_else(|_| GlobSet::empty());
        Self {
            style: Style::Tree,
            follow_links: false,
            filters,
            matcher,
            depth_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_filters_match_bare_names() {
        let config = ReviewConfig::default();
        assert!(config.should_filter(OsStr::new(".git")));
        assert!(config.should_filter(OsStr::new("__pycache__")));
        assert!(config.should_filter(OsStr::new("_skip_this")));
        assert!(!config.should_filter(OsStr::new("src")));
        assert!(!config.should_filter(OsStr::new("x.git")));
    }

    #[test]
    fn test_from_args_merges_filters() {
        let args = Args::parse_from(["dirhash", "--filter", "*.log", "--filter", ".git"]);
        let config = ReviewConfig::from_args(&args).unwrap();
        assert_eq!(config.filters().len(), DEFAULT_FILTERS.len() + 1);
        assert!(config.should_filter(OsStr::new("build.log")));
    }

    #[test]
    fn test_no_default_filters() {
        let args = Args::parse_from(["dirhash", "--no-default-filters", "--depth", "2"]);
        let config = ReviewConfig::from_args(&args).unwrap();
        assert!(config.filters().is_empty());
        assert!(!config.should_filter(OsStr::new(".git")));
        assert_eq!(config.depth_limit(), Some(2));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = ReviewConfig::new(Style::Tree, false, vec!["a[".to_string()], None);
        assert!(matches!(result, Err(ReviewError::InvalidPattern { .. })));
    }
}

use dirhash::utils::{build_filter_matcher, display_name, flat_display_path, permission_string};
use dirhash::ReviewError;
use std::ffi::OsStr;
use std::path::Path;

#[test]
fn test_permission_string_triads() {
    assert_eq!(permission_string(0o700), "rwx------");
    assert_eq!(permission_string(0o070), "---rwx---");
    assert_eq!(permission_string(0o007), "------rwx");
    assert_eq!(permission_string(0o40751), "rwxr-x--x");
}

#[test]
fn test_build_filter_matcher() {
    let patterns = vec!["__pycache__".to_string(), "*.pyc".to_string(), "_skip_*".to_string()];
    let set = build_filter_matcher(&patterns).unwrap();
    assert!(set.is_match("__pycache__"));
    assert!(set.is_match("mod.pyc"));
    assert!(set.is_match("_skip_"));
    assert!(!set.is_match("mod.py"));

    let empty = build_filter_matcher(&[]).unwrap();
    assert!(!empty.is_match("anything"));
}

#[test]
fn test_build_filter_matcher_invalid() {
    let err = build_filter_matcher(&["[oops".to_string()]).unwrap_err();
    assert!(matches!(err, ReviewError::InvalidPattern { ref pattern, .. } if pattern == "[oops"));
}

#[test]
fn test_display_helpers() {
    assert_eq!(display_name(OsStr::new("naïve.txt")), "naïve.txt");
    assert_eq!(flat_display_path(Path::new("./sub"), Path::new("f"), false), "sub/f");
    assert_eq!(flat_display_path(Path::new("rel"), Path::new(""), true), "rel/");
}

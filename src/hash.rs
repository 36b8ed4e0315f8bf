//! Fingerprint helpers backed by BLAKE3.
//!
//! Every digest is rendered as 64 lowercase hex characters. The same
//! algorithm and encoding are used for file contents, directory aggregation
//! strings and symlink targets so summaries stay comparable across runs.

use blake3::Hasher;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const READ_CHUNK: usize = 64 * 1024;

/// Fingerprint of a raw byte slice.
pub fn fingerprint_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Fingerprint of the UTF-8 encoding of `text`.
pub fn fingerprint_str(text: &str) -> String {
    fingerprint_bytes(text.as_bytes())
}

/// Fingerprint of a file's full contents, streamed in fixed-size chunks.
///
/// # Errors
/// Returns the underlying IO error if the file cannot be opened or read.
pub fn fingerprint_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; READ_CHUNK];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fingerprint_is_deterministic_hex() {
        let a = fingerprint_str("hi");
        let b = fingerprint_bytes(b"hi");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_file_fingerprint_matches_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.bin");
        // Spans several read chunks
        let content: Vec<u8> = (0..(READ_CHUNK * 3 + 17)).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &content).unwrap();

        assert_eq!(fingerprint_file(&path).unwrap(), fingerprint_bytes(&content));
    }

    #[test]
    fn test_file_fingerprint_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = fingerprint_file(&temp_dir.path().join("nope"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}

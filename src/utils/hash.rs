//! Content hashing and filename sanitization.

use crate::core::error::{Error, Result};
use crate::utils::slug::{convert_to_slug, SlugOptions};
use sha2::{Digest, Sha256};
use std::path::Path;

/// SHA-256 digest of a byte slice as lowercase hex.
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// SHA-256 digest of a file's contents as lowercase hex.
pub fn sha256_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(path.display().to_string())))?;
    Ok(sha256_hex(&content))
}

/// Sanitize an arbitrary filename into a lowercase slug that keeps dots,
/// so `My Photo (1).JPEG` becomes `my-photo-1.jpeg`.
pub fn sanitize_filename(name: &str) -> String {
    let options = SlugOptions {
        allow_dots: true,
        ..SlugOptions::default()
    };
    convert_to_slug(name, &options)
}

/// Build a content-addressed filename: the sanitized stem, a short content
/// hash, and the original extension. Collisions require a hash-prefix
/// collision, so the result is stable per (name, content) pair.
pub fn hashed_filename(name: &str, content: &[u8]) -> String {
    let sanitized = sanitize_filename(name);
    let digest = &sha256_hex(content)[..12];

    match sanitized.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, digest, ext),
        _ => {
            if sanitized.is_empty() {
                digest.to_string()
            } else {
                format!("{}-{}", sanitized, digest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hashes_known_vector() {
        assert_eq!(
            sha256_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn hashes_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();
        let digest = sha256_file(file.path()).unwrap();
        assert_eq!(digest, sha256_hex(b"hello"));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(sha256_file(Path::new("/nonexistent/oddjob-test")).is_err());
    }

    #[test]
    fn sanitizes_messy_filenames() {
        assert_eq!(sanitize_filename("My Photo (1).JPEG"), "my-photo-1.jpeg");
        assert_eq!(sanitize_filename("Café Menu.PDF"), "cafe-menu.pdf");
    }

    #[test]
    fn hashed_filename_keeps_extension() {
        let name = hashed_filename("My Photo.JPEG", b"bytes");
        assert!(name.starts_with("my-photo-"));
        assert!(name.ends_with(".jpeg"));
    }

    #[test]
    fn hashed_filename_without_extension() {
        let name = hashed_filename("README", b"bytes");
        assert!(name.starts_with("readme-"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn hashed_filename_is_deterministic() {
        assert_eq!(
            hashed_filename("a.txt", b"same"),
            hashed_filename("a.txt", b"same")
        );
        assert_ne!(
            hashed_filename("a.txt", b"one"),
            hashed_filename("a.txt", b"two")
        );
    }
}

use crate::sbom_generation::domain::Checksums;
use crate::shared::error::SbomError;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;

/// ChecksumEngine service computing the content digests recorded on files
pub struct ChecksumEngine;

impl ChecksumEngine {
    /// Reads a file and digests its content with SHA1 and SHA256.
    ///
    /// At most the size reported by the file's metadata is read. Hitting end
    /// of file earlier is not an error; the digests cover exactly the bytes
    /// that were read.
    ///
    /// # Errors
    /// `SbomError::NotFound` when the file does not exist (any more),
    /// `SbomError::Io` for every other open or read failure.
    pub fn compute(path: &Path) -> Result<Checksums, SbomError> {
        let mut file = fs::File::open(path).map_err(|e| SbomError::from_io(path, "open", e))?;
        let size = file
            .metadata()
            .map_err(|e| SbomError::from_io(path, "stat", e))?
            .len();

        let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        file.by_ref()
            .take(size)
            .read_to_end(&mut buffer)
            .map_err(|e| SbomError::from_io(path, "read", e))?;

        Ok(Self::digest(&buffer))
    }

    /// Digests an in-memory buffer.
    pub fn digest(bytes: &[u8]) -> Checksums {
        Checksums {
            sha1: hex::encode(Sha1::digest(bytes)),
            sha256: hex::encode(Sha256::digest(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn test_compute_known_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let checksums = ChecksumEngine::compute(&path).unwrap();

        assert_eq!(checksums.sha1, HELLO_SHA1);
        assert_eq!(checksums.sha256, HELLO_SHA256);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        fs::write(&path, [0u8, 1, 2, 3, 255]).unwrap();

        let first = ChecksumEngine::compute(&path).unwrap();
        let second = ChecksumEngine::compute(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_byte_change_changes_both_digests() {
        let before = ChecksumEngine::digest(b"hello");
        let after = ChecksumEngine::digest(b"hellp");

        assert_ne!(before.sha1, after.sha1);
        assert_ne!(before.sha256, after.sha256);
    }

    #[test]
    fn test_compute_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty");
        fs::write(&path, "").unwrap();

        let checksums = ChecksumEngine::compute(&path).unwrap();

        assert_eq!(checksums.sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            checksums.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digests_are_lowercase_hex() {
        let checksums = ChecksumEngine::digest(b"fs-sbom");
        assert_eq!(checksums.sha1.len(), 40);
        assert_eq!(checksums.sha256.len(), 64);
        assert!(checksums
            .sha256
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_compute_missing_file_is_not_found() {
        let err = ChecksumEngine::compute(&PathBuf::from("/nonexistent/file.bin")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_compute_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ChecksumEngine::compute(temp_dir.path()).unwrap_err();
        assert!(!err.is_not_found());
    }
}

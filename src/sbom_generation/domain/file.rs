use super::SpdxId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Checksum algorithm names as they appear in the document
pub const SHA1: &str = "SHA1";
pub const SHA256: &str = "SHA256";

/// Content digests of a file, lowercase hex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    pub sha1: String,
    pub sha256: String,
}

impl Checksums {
    /// Algorithm name to digest mapping, as stored on a [`File`]
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (SHA1.to_string(), self.sha1),
            (SHA256.to_string(), self.sha256),
        ])
    }
}

/// File record contributing to provenance
///
/// Files are created once per regular file encountered and never merged;
/// two records for the same path are both kept.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    id: SpdxId,
    path: PathBuf,
    pub checksums: BTreeMap<String, String>,
    pub license_concluded: Option<String>,
    pub license_info_in_file: Option<String>,
}

impl File {
    pub fn new(id: SpdxId, path: PathBuf) -> Self {
        Self {
            id,
            path,
            checksums: BTreeMap::new(),
            license_concluded: None,
            license_info_in_file: None,
        }
    }

    /// File record for a path read from disk, identified by its path.
    pub fn from_checksums(path: PathBuf, checksums: Checksums) -> Self {
        let id = SpdxId::for_file(&path.to_string_lossy());
        Self {
            checksums: checksums.into_map(),
            ..Self::new(id, path)
        }
    }

    pub fn id(&self) -> &SpdxId {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn checksum(&self, algorithm: &str) -> Option<&str> {
        self.checksums.get(algorithm).map(String::as_str)
    }
}

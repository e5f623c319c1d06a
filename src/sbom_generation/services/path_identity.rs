use crate::shared::error::SbomError;
use std::fs;
use std::path::Path;

/// Identity of the storage object a path points at
///
/// Two paths with equal identities are the same physical file, however
/// they are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
    #[cfg(unix)]
    device: u64,
    #[cfg(unix)]
    inode: u64,
    #[cfg(not(unix))]
    canonical: std::path::PathBuf,
}

/// PathIdentityResolver service deciding whether two paths are the same file
pub struct PathIdentityResolver;

impl PathIdentityResolver {
    /// Stats a path without following a final symlink.
    ///
    /// # Errors
    /// `SbomError::NotFound` if the path does not exist.
    pub fn identify(path: &Path) -> Result<FileIdentity, SbomError> {
        let metadata =
            fs::symlink_metadata(path).map_err(|e| SbomError::from_io(path, "stat", e))?;
        Self::from_metadata(path, &metadata)
    }

    /// True iff both identities denote the same storage object.
    pub fn same_file(a: &FileIdentity, b: &FileIdentity) -> bool {
        a == b
    }

    #[cfg(unix)]
    fn from_metadata(_path: &Path, metadata: &fs::Metadata) -> Result<FileIdentity, SbomError> {
        use std::os::unix::fs::MetadataExt;

        Ok(FileIdentity {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    #[cfg(not(unix))]
    fn from_metadata(path: &Path, _metadata: &fs::Metadata) -> Result<FileIdentity, SbomError> {
        let canonical = path
            .canonicalize()
            .map_err(|e| SbomError::from_io(path, "canonicalize", e))?;
        Ok(FileIdentity { canonical })
    }
}

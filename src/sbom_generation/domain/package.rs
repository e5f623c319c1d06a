use super::{File, SpdxId};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Identifier to package mapping; ordered so documents serialize deterministically
pub type PackageMap = BTreeMap<SpdxId, Package>;

/// Person and/or organization a package originates from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Originator {
    pub person: Option<String>,
    pub organization: Option<String>,
}

/// Package record representing a logical software unit
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    id: SpdxId,
    pub name: String,
    pub version: String,
    pub license_concluded: String,
    pub license_declared: String,
    pub originator: Originator,
    pub files_analyzed: bool,
    /// Package URL, when the discovery engine knows one
    pub purl: Option<String>,
    /// Where the package was found (manifest or archive path)
    pub source_path: Option<PathBuf>,
    files: Vec<File>,
    packages: PackageMap,
}

impl Package {
    pub fn new(id: SpdxId, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version: version.into(),
            license_concluded: String::new(),
            license_declared: String::new(),
            originator: Originator::default(),
            files_analyzed: false,
            purl: None,
            source_path: None,
            files: Vec::new(),
            packages: PackageMap::new(),
        }
    }

    pub fn id(&self) -> &SpdxId {
        &self.id
    }

    /// Files in the order they were attached
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Sub-packages attached with [`Package::add_package`]
    pub fn packages(&self) -> &PackageMap {
        &self.packages
    }

    /// Attaches a file record.
    ///
    /// Files are appended as-is; a second record for an already attached
    /// path is kept alongside the first.
    pub fn add_file(&mut self, file: File) -> Result<()> {
        if file.path().as_os_str().is_empty() {
            return Err(SbomError::Document {
                message: format!(
                    "file {} has an empty path and cannot be added to package {}",
                    file.id(),
                    self.id
                ),
            }
            .into());
        }
        self.files.push(file);
        Ok(())
    }

    /// Attaches a sub-package. A sub-package with the same identifier is replaced.
    pub fn add_package(&mut self, package: Package) -> Result<()> {
        if package.name.trim().is_empty() {
            return Err(SbomError::Document {
                message: format!(
                    "package {} has no name and cannot be added to package {}",
                    package.id, self.id
                ),
            }
            .into());
        }
        self.packages.insert(package.id.clone(), package);
        Ok(())
    }
}

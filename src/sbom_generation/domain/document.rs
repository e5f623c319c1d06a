use super::{Package, PackageMap, SpdxId};
use crate::sbom_generation::services::package_merge::{merge_maps, overlapping_keys};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Who created the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Creator {
    pub person: String,
    pub organization: String,
    pub tools: Vec<String>,
}

/// Top-level SBOM artifact for one build invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub name: String,
    pub creator: Creator,
    packages: PackageMap,
}

impl Document {
    pub fn new(name: impl Into<String>, creator: Creator) -> Self {
        Self {
            name: name.into(),
            creator,
            packages: PackageMap::new(),
        }
    }

    pub fn packages(&self) -> &PackageMap {
        &self.packages
    }

    pub fn package(&self, id: &SpdxId) -> Option<&Package> {
        self.packages.get(id)
    }

    pub fn package_mut(&mut self, id: &SpdxId) -> Option<&mut Package> {
        self.packages.get_mut(id)
    }

    /// Adds a package; an identifier already present in the document is an error.
    pub fn add_package(&mut self, package: Package) -> Result<()> {
        if self.packages.contains_key(package.id()) {
            return Err(SbomError::Document {
                message: format!(
                    "a package with identifier {} already exists in document {}",
                    package.id(),
                    self.name
                ),
            }
            .into());
        }
        self.packages.insert(package.id().clone(), package);
        Ok(())
    }

    /// Merges discovered packages into the document, later entries winning.
    ///
    /// Returns the identifiers whose previous package was replaced.
    pub fn merge_packages(&mut self, discovered: PackageMap) -> Vec<SpdxId> {
        let replaced = overlapping_keys(&self.packages, &discovered);
        let existing = std::mem::take(&mut self.packages);
        self.packages = merge_maps(existing, discovered);
        replaced
    }

    /// Total number of packages, including sub-packages of document packages
    pub fn package_count(&self) -> usize {
        fn count(map: &PackageMap) -> usize {
            map.values().map(|p| 1 + count(p.packages())).sum()
        }
        count(&self.packages)
    }

    /// Total number of file records across all packages
    pub fn file_count(&self) -> usize {
        fn count(map: &PackageMap) -> usize {
            map.values()
                .map(|p| p.files().len() + count(p.packages()))
                .sum()
        }
        count(&self.packages)
    }
}

use crate::sbom_generation::domain::DiscoveryResult;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a discovery engine is asked to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// A single file, cataloged on its own
    File(PathBuf),
    /// A directory, cataloged recursively
    Directory(PathBuf),
}

impl SourceLocator {
    pub fn path(&self) -> &Path {
        match self {
            SourceLocator::File(path) | SourceLocator::Directory(path) => path,
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocator::File(path) => write!(f, "file:{}", path.display()),
            SourceLocator::Directory(path) => write!(f, "dir:{}", path.display()),
        }
    }
}

/// Which image layers a cataloger searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Squashed,
    AllLayers,
}

/// Cataloging options passed with every discovery call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub include_indexed_archives: bool,
    pub include_unindexed_archives: bool,
    pub scope: SearchScope,
    /// Kept at 1 so package order, and with it identifier order, is deterministic
    pub parallelism: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_indexed_archives: true,
            include_unindexed_archives: true,
            scope: SearchScope::AllLayers,
            parallelism: 1,
        }
    }
}

/// PackageDiscovery port for the package discovery engine
///
/// Given a file or directory, an engine reports the packages it recognized
/// and, for file sources, the internal file entries it found. How packages
/// are detected is entirely up to the implementation.
pub trait PackageDiscovery {
    /// Catalogs one source
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or a recognized manifest
    /// cannot be parsed.
    fn catalog(&self, locator: &SourceLocator, config: &CatalogConfig) -> Result<DiscoveryResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_default() {
        let config = CatalogConfig::default();
        assert!(config.include_indexed_archives);
        assert!(config.include_unindexed_archives);
        assert_eq!(config.scope, SearchScope::AllLayers);
        assert_eq!(config.parallelism, 1);
    }

    #[test]
    fn test_source_locator_display() {
        assert_eq!(
            SourceLocator::File(PathBuf::from("/tmp/app.tar")).to_string(),
            "file:/tmp/app.tar"
        );
        assert_eq!(
            SourceLocator::Directory(PathBuf::from("/tmp/pkgdir")).to_string(),
            "dir:/tmp/pkgdir"
        );
    }
}
